//! Design tokens for the text renderer.
//!
//! All icons used by `render` come from here, in Unicode and ASCII variants.

pub mod icons {
    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    /// Drag handle on the first row of an array item
    pub const HANDLE: &str = "⠿";
}

pub mod icons_ascii {
    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const HANDLE: &str = "=";
}

/// Icon set chosen once per render
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub expand: &'static str,
    pub collapse: &'static str,
    pub handle: &'static str,
}

impl Icons {
    pub fn new(ascii: bool) -> Self {
        if ascii {
            Self {
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                handle: icons_ascii::HANDLE,
            }
        } else {
            Self {
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                handle: icons::HANDLE,
            }
        }
    }

    /// Blank space as wide as an expansion marker, for leaf rows
    pub fn leaf_pad(&self) -> String {
        " ".repeat(self.expand.chars().count())
    }
}

//! Shared helpers for CLI tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

pub const TREE: &str = r#"[
    {"key": "style", "type": "shape", "props": {"propertyName": "style"}, "children": [
        {"key": "color", "type": "string", "props": {"propertyName": "color", "propertyValue": "red"}}
    ]},
    {"key": "items", "type": "arrayOf", "props": {"propertyName": "items"}, "children": [
        {"key": "i0", "type": "string", "props": {"propertyValue": "a"}},
        {"key": "i1", "type": "string", "props": {"propertyValue": "b"}}
    ]},
    {"key": "flows", "type": "bool", "props": {"propertyName": "doNotUseInFlows", "propertyValue": true}},
    {"key": "width", "type": "number", "props": {"propertyName": "width", "propertyValue": 10}},
    {"key": "onClick", "type": "func", "props": {"propertyName": "onClick"}}
]"#;

/// Isolated working directory with a property tree and a private store path
pub struct TestEnv {
    pub dir: TempDir,
    pub tree: PathBuf,
    pub store: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempdir().unwrap();
        let tree = dir.path().join("tree.json");
        fs::write(&tree, TREE).unwrap();
        let store = dir.path().join("state/expanded.json");
        Self { dir, tree, store }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_proptree"))
            .current_dir(self.path())
            .env("PROPTREE_STORE_PATH", &self.store)
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env_remove("PROPTREE_ASCII")
            .env_remove("PROPTREE_VERBOSITY")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

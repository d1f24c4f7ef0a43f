#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Once;

static BUILD: Once = Once::new();

pub fn ensure_built() {
    BUILD.call_once(|| {
        println!("Building project...");
        let build_output = Command::new("cargo")
            .args(["build"])
            .output()
            .expect("Failed to execute cargo build");

        if !build_output.status.success() {
            panic!(
                "Failed to build project: {}",
                String::from_utf8_lossy(&build_output.stderr)
            );
        }
        println!("Project built successfully");
    });
}

pub fn pmtoken_cmd() -> Command {
    ensure_built();
    let mut path = std::env::current_dir().unwrap();
    path.push("target/debug/pmtoken");
    Command::new(path)
}

/// A scratch working directory for one end-to-end run. The binary resolves
/// its output path against the working directory and creates only the final
/// `generated/` level, so `scripts/` is premade here just like in the repo
/// the tool normally runs from.
pub struct Scenario {
    pub dir: PathBuf,
}

impl Scenario {
    pub fn new(name: &str) -> Scenario {
        let dir = std::env::temp_dir().join(format!("pmtoken_e2e_{name}_{}", std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).expect("Failed to clear scenario dir");
        }
        fs::create_dir_all(dir.join("scripts")).expect("Failed to create scenario dir");
        Scenario { dir }
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, content).expect("Failed to write scenario file");
        path
    }

    pub fn copy_fixture(&self, fixture: &str, dest: &str) -> PathBuf {
        let path = self.dir.join(dest);
        fs::copy(Path::new("tests/fixtures").join(fixture), &path)
            .expect("Failed to copy fixture");
        path
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir
            .join("scripts/generated/environment-with-token.json")
    }

    pub fn read_output(&self) -> Value {
        let content = fs::read_to_string(self.output_path()).expect("Failed to read output file");
        serde_json::from_str(&content).expect("Output file is not valid JSON")
    }
}

impl Drop for Scenario {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.dir).ok();
    }
}

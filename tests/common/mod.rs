use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = make_fixture_catalog(tmp.path());

        Self {
            _tmp: tmp,
            home,
            catalog,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("accesschain");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_catalog(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--catalog")
            .arg(self.catalog.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_catalog_err(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--catalog")
            .arg(self.catalog.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

fn make_fixture_catalog(base: &Path) -> PathBuf {
    let path = base.join("catalog.json");

    let catalog = serde_json::json!({
        "name": "fixture-catalog",
        "places": [
            {
                "id": 1,
                "name": "Central Library",
                "category": "library",
                "address": "123 Main St, Downtown",
                "rating": 4.5,
                "review_count": 23,
                "accessibility_score": 85,
                "features": ["Wheelchair Access", "Large Print Materials"],
                "distance": 0.5,
                "accessibility_details": {
                    "mobility": 90,
                    "vision": 85,
                    "hearing": 80,
                    "cognitive": 85
                }
            },
            {
                "id": 2,
                "name": "Sunrise Mall",
                "category": "shopping-center",
                "address": "456 Commerce Ave",
                "rating": 4.2,
                "review_count": 45,
                "accessibility_score": 78,
                "features": ["Wheelchair Access", "Wide Aisles"],
                "distance": 1.2
            },
            {
                "id": 3,
                "name": "Downtown Grocery",
                "category": "grocery-store",
                "address": "147 Market Street",
                "rating": 3.9,
                "review_count": 28,
                "accessibility_score": 72,
                "features": ["Accessible Checkout"],
                "distance": 0.3
            }
        ]
    });
    fs::write(
        &path,
        serde_json::to_string_pretty(&catalog).expect("serialize catalog"),
    )
    .expect("write catalog");

    path
}

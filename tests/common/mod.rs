#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PRODUCTION_BASE: &str = "/conspectus/webapp/";
pub const ARTIFACT_NAME: &str = "conspectus-mobile-production-abc123";

/// Scratch directory the CLI runs in; relative paths resolve against it.
pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.tmp.path().join(rel)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("conspectus");
        cmd.current_dir(self.tmp.path()).env_remove("CONSPECTUS_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, body).expect("write fixture file");
        path
    }

    pub fn write_json(&self, rel: &str, value: &Value) -> PathBuf {
        self.write(
            rel,
            &serde_json::to_string_pretty(value).expect("serialize fixture"),
        )
    }

    /// A `dist/` directory as the production build emits it for `base`.
    pub fn write_dist(&self, base: &str) -> PathBuf {
        self.write(
            "dist/index.html",
            &format!(
                r#"<!doctype html>
<html lang="en">
  <head>
    <link rel="icon" type="image/svg+xml" href="{base}vite.svg" />
    <link rel="manifest" href="{base}manifest.webmanifest">
    <script type="module" crossorigin src="{base}assets/index-abc123.js"></script>
    <link rel="stylesheet" crossorigin href="{base}assets/index-abc123.css">
  </head>
  <body><div id="app"></div></body>
</html>
"#
            ),
        );
        self.write_json(
            "dist/manifest.webmanifest",
            &json!({
                "name": "Conspectus Mobile",
                "short_name": "Conspectus",
                "start_url": base,
                "scope": base,
                "display": "standalone",
                "icons": [{"src": "vite.svg", "sizes": "any", "type": "image/svg+xml"}]
            }),
        );
        self.write(
            "dist/assets/index-abc123.js",
            &format!(
                r#"const e=document.getElementById("app");"serviceWorker" in navigator&&navigator.serviceWorker.register("{base}sw.js",{{scope:"{base}"}});"#
            ),
        );
        self.write(
            "dist/assets/index-abc123.css",
            ".app{background:url(./bg.png) no-repeat}",
        );
        self.write("dist/sw.js", r#"precacheAndRoute([{url:"index.html"}]);"#);
        self.path("dist")
    }

    pub fn write_handoff(&self, artifacts: Value, metadata: Value) -> (PathBuf, PathBuf) {
        (
            self.write_json("artifacts.json", &artifacts),
            self.write_json("deploy-metadata.json", &metadata),
        )
    }
}

pub fn valid_metadata() -> Value {
    json!({
        "channel": "production",
        "basePath": PRODUCTION_BASE,
        "sourceBranch": "main",
        "commitSha": "abc123",
        "buildTimeUtc": "2026-03-01T10:20:30Z",
        "qualityRunId": "1001",
        "deployRunId": "2002"
    })
}

pub fn single_artifact() -> Value {
    json!({"artifacts": [{"name": ARTIFACT_NAME}]})
}

pub fn handoff_args<'a>(artifacts: &'a str, metadata: &'a str) -> Vec<&'a str> {
    vec![
        "verify",
        "production-handoff",
        "--artifacts-json",
        artifacts,
        "--metadata",
        metadata,
        "--artifact-name",
        ARTIFACT_NAME,
        "--commit-sha",
        "abc123",
        "--quality-run-id",
        "1001",
        "--deploy-run-id",
        "2002",
    ]
}

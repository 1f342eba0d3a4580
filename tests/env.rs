mod common;

use common::TestEnv;
use predicates::str::contains;
use std::path::PathBuf;

#[test]
fn env_file_with_client_id_is_valid() {
    let env = TestEnv::new();
    env.write(
        ".env",
        "VITE_AZURE_CLIENT_ID= client-id \nVITE_DEPLOY_BASE_PATH=/conspectus/webapp/\n",
    );

    let out = env.run_json(&["env", "check", "--env-file", ".env"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["azure_client_id"], "client-id");
    assert_eq!(out["data"]["deploy_base_path"], "/conspectus/webapp/");
    assert!(out["data"].get("deploy_public_url").is_none());
}

#[test]
fn blank_client_id_is_reported_missing() {
    let env = TestEnv::new();
    env.write(".env", "VITE_AZURE_CLIENT_ID=\n");

    env.cmd()
        .args(["env", "check", "--env-file", ".env"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains(
            "Missing required environment variable(s): VITE_AZURE_CLIENT_ID.",
        ));
}

#[test]
fn process_environment_is_used_without_env_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["env", "check"])
        .env("VITE_AZURE_CLIENT_ID", "from-process")
        .env_remove("VITE_DEPLOY_BASE_PATH")
        .env_remove("VITE_DEPLOY_PUBLIC_URL")
        .assert()
        .success()
        .stdout(contains("runtime env valid (base path: unset, public url: unset)"));

    env.cmd()
        .args(["env", "check"])
        .env_remove("VITE_AZURE_CLIENT_ID")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn repository_env_example_documents_runtime_keys() {
    let example = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".env.example");
    let env = TestEnv::new();
    env.cmd()
        .args(["env", "example"])
        .arg(&example)
        .assert()
        .success()
        .stdout(contains("documents 3 runtime keys"));
}

#[test]
fn incomplete_env_example_fails() {
    let env = TestEnv::new();
    env.write(".env.example", "VITE_AZURE_CLIENT_ID=\n");

    env.cmd()
        .args(["env", "example", ".env.example"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains(
            ".env.example is missing runtime key(s): VITE_DEPLOY_BASE_PATH, VITE_DEPLOY_PUBLIC_URL",
        ));
}

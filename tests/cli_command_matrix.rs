use assert_cmd::cargo::cargo_bin_cmd;

fn run_help(args: &[&str]) {
    cargo_bin_cmd!("conspectus")
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    // command groups
    run_help(&["route"]);
    run_help(&["verify"]);
    run_help(&["env"]);

    // grouped subcommands
    run_help(&["route", "resolve"]);
    run_help(&["route", "hash"]);
    run_help(&["route", "list"]);

    run_help(&["verify", "build-channel"]);
    run_help(&["verify", "production-handoff"]);

    run_help(&["env", "check"]);
    run_help(&["env", "example"]);
}

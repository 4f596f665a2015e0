//! Integration tests for Yarnbox

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn yarnbox() -> Command {
        cargo_bin_cmd!("yarnbox")
    }

    #[test]
    fn help_displays() {
        yarnbox()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("containerized yarn build runner"));
    }

    #[test]
    fn version_displays() {
        yarnbox()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("yarnbox"));
    }

    #[test]
    fn no_arguments_prints_usage_and_exits_1() {
        yarnbox()
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn unknown_subcommand_prints_usage_and_exits_1() {
        yarnbox()
            .arg("frobnicate")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn override_flag_without_value_exits_1() {
        yarnbox()
            .arg("-m")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("--node-module"));
    }

    #[test]
    fn unknown_flag_exits_1() {
        yarnbox()
            .args(["--frob", "build"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn subcommand_help_displays() {
        yarnbox()
            .args(["build", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("build task"));
    }
}

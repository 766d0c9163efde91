#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shopkeep_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("shopkeep"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_full_session_workflow() {
    let temp = TempDir::new().unwrap();

    shopkeep_cmd(&temp)
        .write_stdin(
            "CREATE widget 10.00 5\n\
             UPDATE 1 stock = 8\n\
             DELETE 1 damaged\n\
             READ deleted_items\n\
             RESTORE 1\n\
             READ items\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Created item: widget, 10.00, 5"))
        .stdout(predicate::str::contains(
            "Updated item 1 to have values: widget, 10.00, 8",
        ))
        .stdout(predicate::str::contains("comment"))
        .stdout(predicate::str::contains(
            "Restored item: 1, 'widget', 10.00, 8",
        ))
        .stdout(predicate::str::contains("Table items contains:"))
        .stdout(predicate::str::contains("Exiting program."));
}

#[test]
fn test_invalid_input_keeps_the_session_alive() {
    let temp = TempDir::new().unwrap();

    shopkeep_cmd(&temp)
        .write_stdin(
            "CREATE widget ten 5\n\
             READ items\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("malformed create command"))
        .stdout(predicate::str::contains("Error text: CREATE widget ten 5"))
        .stdout(predicate::str::contains("ERROR: items is empty."))
        .stdout(predicate::str::contains("Exiting program."));
}

#[test]
fn test_seed_flag_populates_the_store() {
    let temp = TempDir::new().unwrap();
    let seed_path = temp.path().join("fixture.json");
    fs::write(
        &seed_path,
        r#"{ "items": [
            { "name": "iced_tea", "price": "1.99", "stock": 100 },
            { "name": "chowder", "price": "7.50", "stock": 3 }
        ] }"#,
    )
    .unwrap();

    shopkeep_cmd(&temp)
        .args(["--seed", seed_path.to_str().unwrap()])
        .write_stdin("READ items\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 items"))
        .stdout(predicate::str::contains("iced_tea"))
        .stdout(predicate::str::contains("7.50"));
}

#[test]
fn test_config_file_sets_the_prompt() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("shopkeep.json"),
        r#"{ "prompt": "shop> " }"#,
    )
    .unwrap();

    shopkeep_cmd(&temp)
        .args(["--no-banner"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("shop> "));
}

#[test]
fn test_banner_prints_help_and_tables() {
    let temp = TempDir::new().unwrap();

    shopkeep_cmd(&temp)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to the shopkeep inventory console.",
        ))
        .stdout(predicate::str::contains("`HELP` - view the list of valid commands"))
        .stdout(predicate::str::contains("tables: items, deleted_items"));
}

#[test]
fn test_eof_without_quit_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    shopkeep_cmd(&temp)
        .args(["--no-banner"])
        .write_stdin("CREATE widget 10.00 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created item: widget, 10.00, 5"));
}

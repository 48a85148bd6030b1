use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn roster(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn roster_cmd() -> Command {
    Command::cargo_bin("roster").unwrap()
}

#[test]
fn lookup_prints_the_schedule() {
    let file = roster("name,studentid,section\nAli,1001,S1\n");

    roster_cmd()
        .arg("lookup")
        .arg(file.path())
        .arg("1001")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Loaded 1 rows\nAli\nEELU ID: 1001 • Section: S1\nSaturday\n  Probability: 9:00 - 10:00\n",
        ))
        .stdout(predicate::str::ends_with("  Software: 12:00 - 13:00\n"));
}

#[test]
fn lookup_runs_every_query_in_order() {
    let file = roster("Name,EELU ID,S\nMona,2002,s02\n");

    roster_cmd()
        .args(["lookup"])
        .arg(file.path())
        .arg("9999,2002")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Loaded 1 rows\nStudent not found\nMona\nEELU ID: 2002 • Section: S2\n",
        ));
}

#[test]
fn lookup_without_queries_only_reports_rows() {
    let file = roster("");

    roster_cmd()
        .arg("lookup")
        .arg(file.path())
        .assert()
        .success()
        .stdout("Loaded 0 rows\n");
}

#[test]
fn missing_roster_is_an_error() {
    roster_cmd()
        .args(["lookup", "/nonexistent/roster.csv", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read roster file"));
}

#[test]
fn sections_lists_the_table() {
    roster_cmd()
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("S1\n  Saturday\n"))
        .stdout(predicate::str::contains("\nS2\n"));
}

#[test]
fn schedule_override_is_used() {
    let schedules = roster(
        "version = 1\n[[sections]]\nkey = \"S9\"\n[[sections.days]]\nday = \"Friday\"\nitems = [{ name = \"Art\", time = \"8:00 - 9:00\" }]\n",
    );
    let file = roster("name,id,section\nOmar,3003,s09\n");

    roster_cmd()
        .arg("--schedules")
        .arg(schedules.path())
        .arg("lookup")
        .arg(file.path())
        .arg("3003")
        .assert()
        .success()
        .stdout("Loaded 1 rows\nOmar\nEELU ID: 3003 • Section: S9\nFriday\n  Art: 8:00 - 9:00\n");
}

#[test]
fn bad_schedule_override_is_an_error() {
    let schedules = roster("version = 3\n");

    roster_cmd()
        .arg("--schedules")
        .arg(schedules.path())
        .arg("sections")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported schedule version 3"));
}

#[test]
fn verbose_lookup_logs_each_query() {
    let file = roster("name,studentid,section\nAli,1001,S1\n");

    roster_cmd()
        .env_remove("ROSTER_LOG")
        .arg("-v")
        .arg("lookup")
        .arg(file.path())
        .arg("1001,2002")
        .assert()
        .success()
        .stderr(predicate::str::contains("looking up id").count(2));
}

#[test]
fn default_lookup_keeps_debug_events_quiet() {
    let file = roster("name,studentid,section\nAli,1001,S1\n");

    roster_cmd()
        .env_remove("ROSTER_LOG")
        .arg("lookup")
        .arg(file.path())
        .arg("1001")
        .assert()
        .success()
        .stderr(predicate::str::contains("looking up id").not());
}

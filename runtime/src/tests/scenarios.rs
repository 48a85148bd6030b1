use crate::{load_schedules, test_case::TestCase, LookupResult, SectionKey, Session};
use pretty_assertions::assert_eq;

fn run(content: &str) -> (Session, Vec<LookupResult>) {
    let test_case = TestCase::from_string(content, "scenario.md").unwrap();
    let mut session = Session::new(load_schedules(None).unwrap());
    session.upload(&test_case.roster);

    let results = test_case
        .queries()
        .into_iter()
        .filter_map(|query| session.search(query).cloned())
        .collect();
    (session, results)
}

fn key(raw: &str) -> Option<SectionKey> {
    Some(raw.parse().unwrap())
}

fn days(result: &LookupResult) -> Option<Vec<&str>> {
    match result {
        LookupResult::Found { schedule, .. } => schedule
            .as_ref()
            .map(|days| days.iter().map(|day| day.day.as_str()).collect()),
        LookupResult::NotFound => panic!("expected a match"),
    }
}

#[test]
fn studentid_header_resolves_s1() {
    let (session, results) = run(include_str!(
        "../../../compatibility-tests/00000000001-studentid-header.md"
    ));

    assert_eq!(session.record_count(), 1);
    let LookupResult::Found {
        student,
        section_key,
        ..
    } = &results[0]
    else {
        panic!("expected a match");
    };
    assert_eq!(student.name, "Ali");
    assert_eq!(student.id, "1001");
    assert_eq!(*section_key, key("S1"));
    assert_eq!(days(&results[0]), Some(vec!["Saturday", "Sunday", "Monday"]));
}

#[test]
fn eelu_id_header_resolves_s2() {
    let (_, results) = run(include_str!(
        "../../../compatibility-tests/00000000002-eelu-id-and-short-section.md"
    ));

    assert!(matches!(
        &results[0],
        LookupResult::Found { section_key, .. } if *section_key == key("S2")
    ));
    assert_eq!(days(&results[0]), Some(vec!["Saturday", "Monday"]));
}

#[test]
fn unknown_id_is_not_found() {
    let (_, results) = run(include_str!(
        "../../../compatibility-tests/00000000003-student-not-found.md"
    ));
    assert_eq!(results, vec![LookupResult::NotFound]);
}

#[test]
fn section_without_schedule() {
    let (_, results) = run(include_str!(
        "../../../compatibility-tests/00000000004-section-without-schedule.md"
    ));

    assert!(matches!(
        &results[0],
        LookupResult::Found { section_key, .. } if *section_key == key("S9")
    ));
    assert_eq!(days(&results[0]), None);
}

#[test]
fn empty_roster_finds_nothing() {
    let (session, results) = run(include_str!(
        "../../../compatibility-tests/00000000005-empty-roster.md"
    ));

    assert_eq!(session.record_count(), 0);
    assert_eq!(session.message(), Some("Loaded 0 rows"));
    assert_eq!(results, vec![LookupResult::NotFound]);
}

#[test]
fn search_ignores_case_and_returns_first_match() {
    let (_, results) = run(include_str!(
        "../../../compatibility-tests/00000000006-quoted-and-positional.md"
    ));

    let names: Vec<&str> = results
        .iter()
        .map(|result| result.student().unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["Khaled, Jr.", "Khaled, Jr."]);
}

#[test]
fn missing_section_has_no_key() {
    let (_, results) = run(include_str!(
        "../../../compatibility-tests/00000000007-missing-name-and-section.md"
    ));

    assert!(matches!(
        &results[0],
        LookupResult::Found {
            section_key: None,
            schedule: None,
            ..
        }
    ));
}

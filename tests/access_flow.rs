// Access-request capture: validation and the waitlist journal

use launchdeck::access::{AccessRequest, Waitlist, is_valid_email};

#[test]
fn validation_matches_the_form_contract() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first+tag@sub.domain.io"));

    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("user name@example.com"));
}

#[test]
fn journal_appends_and_loads_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let waitlist = Waitlist::at(dir.path().join("waitlist.jsonl"));

    let first = AccessRequest::new("first@example.com");
    let second = AccessRequest::new("second@example.com");

    waitlist.append(&first).unwrap();
    waitlist.append(&second).unwrap();

    let loaded = waitlist.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0], first);
    assert_eq!(loaded[1], second);
    assert_ne!(loaded[0].id, loaded[1].id);
}

#[test]
fn missing_journal_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let waitlist = Waitlist::at(dir.path().join("waitlist.jsonl"));

    assert_eq!(waitlist.load().unwrap().len(), 0);
}

#[test]
fn append_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let waitlist = Waitlist::at(dir.path().join("nested").join("dir").join("waitlist.jsonl"));

    waitlist.append(&AccessRequest::new("user@example.com")).unwrap();

    assert!(waitlist.path().exists());
    assert_eq!(waitlist.load().unwrap().len(), 1);
}

#[test]
fn corrupt_journal_line_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waitlist.jsonl");
    std::fs::write(&path, "not json\n").unwrap();

    let waitlist = Waitlist::at(path);
    assert!(waitlist.load().is_err());
}

use keyescape::{
    collect_strings, escape_document, read_document, render_report, run, Error, ReportFormat,
    RunOptions,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup(content: &[u8]) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    let map = dir.path().join("replacement_map.txt");
    fs::write(&input, content).unwrap();
    (dir, input, map)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_run_rewrites_input_and_writes_report() {
    let (_dir, input, map) = setup(br#"{"a":"hello"}"#);

    let outcome = run(&RunOptions::new(&input).with_map_path(&map)).unwrap();

    assert!(outcome.is_complete());
    assert_eq!(read(&input), r#"{"\u0061":"hello"}"#);
    assert_eq!(read(&map), "a -> \\x61\n");
}

#[test]
fn test_run_on_typical_config() {
    let source = r#"{
  "name": "demo",
  "version": "1.0",
  "tags": ["x", "y"]
}"#;
    let (_dir, input, map) = setup(source.as_bytes());

    let outcome = run(&RunOptions::new(&input).with_map_path(&map)).unwrap();
    println!("Rewritten: {}", read(&input));

    // Tokens: name(K) demo(V) version(K) 1.0(V) tags(K) x(V) y(K)
    let keys: Vec<_> = outcome.escaped.map.keys().collect();
    assert_eq!(keys, vec![&b"name"[..], &b"version"[..], &b"tags"[..], &b"y"[..]]);
    assert_eq!(
        read(&input),
        r#"{
  "\u006e\u0061\u006d\u0065": "demo",
  "\u0076\u0065\u0072\u0073\u0069\u006f\u006e": "1.0",
  "\u0074\u0061\u0067\u0073": ["x", "\u0079"]
}"#
    );
    assert_eq!(
        read(&map),
        "name -> \\x6e\\x61\\x6d\\x65\n\
         version -> \\x76\\x65\\x72\\x73\\x69\\x6f\\x6e\n\
         tags -> \\x74\\x61\\x67\\x73\n\
         y -> \\x79\n"
    );
}

#[test]
fn test_run_json_report() {
    let (_dir, input, map) = setup(br#"{"k":1}"#);

    run(&RunOptions::new(&input)
        .with_map_path(&map)
        .with_report_format(ReportFormat::Json))
    .unwrap();

    let report: serde_json::Value = serde_json::from_str(&read(&map)).unwrap();
    assert_eq!(report[0]["original"], "k");
    assert_eq!(report[0]["escaped"], "\\x6b");
}

#[test]
fn test_missing_input_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.json");
    let map = dir.path().join("replacement_map.txt");

    let err = run(&RunOptions::new(&input).with_map_path(&map)).unwrap_err();

    assert!(matches!(err, Error::InputUnreadable { .. }));
    assert!(err.is_fatal());
    assert!(!input.exists());
    assert!(!map.exists());
}

#[test]
fn test_empty_input_is_fatal() {
    let (_dir, input, map) = setup(b"");

    let err = run(&RunOptions::new(&input).with_map_path(&map)).unwrap_err();

    assert!(matches!(err, Error::EmptyInput { .. }));
    assert!(!map.exists());
}

#[test]
fn test_unwritable_report_is_not_fatal() {
    let (dir, input, _map) = setup(br#"{"a":"b"}"#);
    let map = dir.path().join("no-such-dir").join("map.txt");

    let outcome = run(&RunOptions::new(&input).with_map_path(&map)).unwrap();

    assert!(matches!(
        outcome.report_error,
        Some(Error::OutputUnwritable { .. })
    ));
    assert!(outcome.document_error.is_none());
    assert!(!outcome.is_complete());
    assert_eq!(read(&input), r#"{"\u0061":"b"}"#);
}

#[test]
fn test_empty_key_terminates_and_reports() {
    let (_dir, input, map) = setup(br#"{"":"x"}"#);

    run(&RunOptions::new(&input).with_map_path(&map)).unwrap();

    assert_eq!(read(&input), r#"{"":"x"}"#);
    assert_eq!(read(&map), " -> \n");
}

#[test]
fn test_second_run_is_not_idempotent() {
    let (_dir, input, map) = setup(br#"{"a":"hello"}"#);
    let options = RunOptions::new(&input).with_map_path(&map);

    run(&options).unwrap();
    let first = read(&input);
    run(&options).unwrap();
    let second = read(&input);

    assert_ne!(first, second);
    assert!(second.starts_with(r#"{"\u005c\u0075\u0030\u0030\u0036\u0031""#));
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let (_dir, input, map) = setup(b"{\"\xe9\":\"\xff\"}");

    run(&RunOptions::new(&input).with_map_path(&map)).unwrap();

    assert_eq!(fs::read(&input).unwrap(), b"{\"\\u00e9\":\"\xff\"}");
    assert_eq!(fs::read(&map).unwrap(), b"\xe9 -> \\xe9\n");
}

#[test]
fn test_stages_compose_like_run() {
    let source = br#"{"id":7,"label":"id"}"#;
    let (_dir, input, _map) = setup(source);

    let document = read_document(&input).unwrap();
    let extraction = collect_strings(document.as_bytes());
    let escaped = escape_document(document.as_bytes());

    assert_eq!(extraction.replacement_map(), escaped.map);
    // Tokens: id(K) label(V) id(K)
    assert_eq!(escaped.map.len(), 1);
    assert_eq!(
        render_report(&escaped.map, ReportFormat::Text).unwrap(),
        b"id -> \\x69\\x64\n"
    );
}

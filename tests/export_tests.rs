//! Integration tests for the CSV export layout.

use access_audit::analysis::{analyze, AnalysisConfig};
use access_audit::export::export_csv;
use access_audit::report::write_report;
use std::fs;
use tempfile::TempDir;

fn request_line(ip: &str, method: &str, path: &str) -> String {
    format!(r#"{ip} - - [03/Dec/2024:10:12:36 +0000] "{method} {path} HTTP/1.1" 200 512"#)
}

#[test]
fn test_exact_section_layout() {
    let lines = vec![
        request_line("5.5.5.5", "GET", "/a"),
        request_line("5.5.5.5", "GET", "/a"),
        request_line("6.6.6.6", "GET", "/b"),
    ];
    let result = analyze(&lines, &AnalysisConfig::default());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.csv");
    export_csv(&result, &output).unwrap();

    let expected = "IP Address,Request Count\n\
                    5.5.5.5,2\n\
                    6.6.6.6,1\n\
                    \n\
                    Most Accessed Endpoint,Access Count\n\
                    /a,2\n\
                    \n\
                    IP Address,Failed Login Attempts\n\
                    \n\
                    Endpoint,Access Count\n\
                    /a,2\n\
                    /b,1\n";
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_empty_log_exports_headers_only() {
    let result = analyze(&[], &AnalysisConfig::default());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.csv");
    export_csv(&result, &output).unwrap();

    let expected = "IP Address,Request Count\n\
                    \n\
                    Most Accessed Endpoint,Access Count\n\
                    \n\
                    IP Address,Failed Login Attempts\n\
                    \n\
                    Endpoint,Access Count\n";
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_export_overwrites_existing_file() {
    let result = analyze(&[], &AnalysisConfig::default());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.csv");
    fs::write(&output, "stale content that should disappear").unwrap();

    export_csv(&result, &output).unwrap();
    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("stale content"));
    assert!(content.starts_with("IP Address,Request Count"));
}

#[test]
fn test_export_is_idempotent() {
    let lines = vec![
        request_line("5.5.5.5", "GET", "/a"),
        request_line("6.6.6.6", "POST", "/b"),
    ];
    let result = analyze(&lines, &AnalysisConfig::default());

    let dir = TempDir::new().unwrap();
    let first_path = dir.path().join("first.csv");
    let second_path = dir.path().join("second.csv");

    export_csv(&result, &first_path).unwrap();
    let rerun = analyze(&lines, &AnalysisConfig::default());
    export_csv(&rerun, &second_path).unwrap();

    assert_eq!(
        fs::read(&first_path).unwrap(),
        fs::read(&second_path).unwrap()
    );
}

#[test]
fn test_tie_break_consistent_between_report_and_export() {
    // /first and /second both hit twice; /first is seen first and must win
    // everywhere.
    let lines = vec![
        request_line("1.1.1.1", "GET", "/first"),
        request_line("1.1.1.1", "GET", "/second"),
        request_line("1.1.1.1", "GET", "/first"),
        request_line("1.1.1.1", "GET", "/second"),
    ];
    let result = analyze(&lines, &AnalysisConfig::default());

    assert_eq!(result.most_accessed, Some(("/first".to_string(), 2)));

    let mut buf = Vec::new();
    write_report(&mut buf, &result, 5, 5).unwrap();
    let report = String::from_utf8(buf).unwrap();
    assert!(report.contains("/first (Accessed 2 times)"));

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.csv");
    export_csv(&result, &output).unwrap();
    let exported = fs::read_to_string(&output).unwrap();
    assert!(exported.contains("Most Accessed Endpoint,Access Count\n/first,2\n"));

    // Endpoint section lists /first before /second.
    let first_pos = exported.rfind("/first,2").unwrap();
    let second_pos = exported.rfind("/second,2").unwrap();
    assert!(first_pos < second_pos);
}

#[test]
fn test_suspicious_section_keeps_first_seen_order() {
    let failed = |ip: &str| format!(r#"{ip} - - "POST /login HTTP/1.1" 401 128"#);
    let mut lines = Vec::new();
    // 9.9.9.9 crosses the threshold first, then 2.2.2.2; both flagged.
    for _ in 0..12 {
        lines.push(failed("9.9.9.9"));
    }
    for _ in 0..11 {
        lines.push(failed("2.2.2.2"));
    }
    let result = analyze(&lines, &AnalysisConfig::default());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.csv");
    export_csv(&result, &output).unwrap();
    let exported = fs::read_to_string(&output).unwrap();

    let section = exported
        .split("IP Address,Failed Login Attempts\n")
        .nth(1)
        .unwrap();
    let nine = section.find("9.9.9.9,12").unwrap();
    let two = section.find("2.2.2.2,11").unwrap();
    assert!(nine < two);
}

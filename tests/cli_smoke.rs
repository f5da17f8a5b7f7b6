use assert_cmd::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn gpaint(year: &str, store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gpaint").unwrap();
    cmd.arg("--year").arg(year).arg("--store").arg(store);
    cmd
}

fn write_pattern(path: &Path, days: Vec<serde_json::Value>) {
    std::fs::write(path, serde_json::Value::Array(days).to_string()).unwrap();
}

#[test]
fn export_of_an_empty_year_reports_nothing() {
    let dir = tempdir().unwrap();
    let mut cmd = gpaint("2024", dir.path());
    cmd.arg("export");
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("nothing to export"));
}

#[test]
fn import_then_export_round_trips_commands() {
    let dir = tempdir().unwrap();
    let mut days = vec![serde_json::json!({ "hasContribution": false }); 366];
    days[1] = serde_json::json!({
        "hasContribution": true,
        "commit": { "message": "Initial commit", "date": "2024-01-02 12:00:00" }
    });
    days[59] = serde_json::json!({
        "hasContribution": true,
        "commit": { "message": "Say \"hi\"", "date": "2024-02-29 12:00:00" }
    });
    let file = dir.path().join("pattern.json");
    write_pattern(&file, days);

    let mut import = gpaint("2024", dir.path());
    import.arg("import").arg(&file);
    import.assert().success();

    let mut export = gpaint("2024", dir.path());
    export.arg("export");
    let out = export.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(
        "GIT_AUTHOR_DATE=\"2024-01-02 12:00:00\" GIT_COMMITTER_DATE=\"2024-01-02 12:00:00\" \
         git commit --allow-empty -m \"Initial commit\""
    ));
    assert!(text.contains("-m \"Say \\\"hi\\\"\""));
    let first = text.find("2024-01-02").unwrap();
    let second = text.find("2024-02-29").unwrap();
    assert!(first < second);
}

#[test]
fn exported_json_keeps_the_wire_shape() {
    let dir = tempdir().unwrap();
    let mut days = vec![serde_json::json!({ "hasContribution": false }); 365];
    days[100] = serde_json::json!({
        "hasContribution": true,
        "commit": { "message": "Initial commit", "date": "2023-04-11 12:00:00" }
    });
    let file = dir.path().join("pattern.json");
    write_pattern(&file, days);

    let mut import = gpaint("2023", dir.path());
    import.arg("import").arg(&file);
    import.assert().success();

    let mut export = gpaint("2023", dir.path());
    export.args(["export", "--json"]);
    let out = export.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 365);
    assert_eq!(array[0], serde_json::json!({ "hasContribution": false }));
    assert_eq!(array[100]["commit"]["date"], "2023-04-11 12:00:00");
}

#[test]
fn wrong_length_import_is_rejected_and_stores_nothing() {
    let dir = tempdir().unwrap();
    let days = vec![serde_json::json!({ "hasContribution": false }); 300];
    let file = dir.path().join("short.json");
    write_pattern(&file, days);

    let mut import = gpaint("2023", dir.path());
    import.arg("import").arg(&file);
    let err = import.assert().failure().get_output().stderr.clone();
    let text = String::from_utf8(err).unwrap();
    assert!(text.contains("365"));
    assert!(text.contains("300"));

    let mut show = gpaint("2023", dir.path());
    show.arg("show");
    let out = show.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Stored pattern: no"));
}

#[test]
fn show_summarizes_an_imported_pattern() {
    let dir = tempdir().unwrap();
    let mut days = vec![serde_json::json!({ "hasContribution": false }); 366];
    for index in [10, 11, 12] {
        days[index] = serde_json::json!({
            "hasContribution": true,
            "commit": { "message": "Initial commit", "date": "2024-01-11 12:00:00" }
        });
    }
    let file = dir.path().join("pattern.json");
    write_pattern(&file, days);

    let mut import = gpaint("2024", dir.path());
    import.arg("import").arg(&file);
    import.assert().success();

    let mut show = gpaint("2024", dir.path());
    show.arg("show");
    let out = show.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Stored pattern: yes"));
    assert!(text.contains("Active days: 3"));
    assert!(text.contains("leap year"));
}

#[test]
fn inconsistent_entries_are_rejected_with_a_reason() {
    let dir = tempdir().unwrap();
    let mut days = vec![serde_json::json!({ "hasContribution": false }); 365];
    days[4] = serde_json::json!({ "hasContribution": true });
    let file = dir.path().join("broken.json");
    write_pattern(&file, days);

    let mut import = gpaint("2023", dir.path());
    import.arg("import").arg(&file);
    let err = import.assert().failure().get_output().stderr.clone();
    let text = String::from_utf8(err).unwrap();
    assert!(text.contains("day 4"));
}

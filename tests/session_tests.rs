//! Tests for the line-driven session and directory data files

use campus_directory_search::directory::Directory;
use campus_directory_search::error::DirectoryError;
use campus_directory_search::search::Selection;
use campus_directory_search::session::{Command, Flow, Session};
use campus_directory_search::types::{FacilityId, OutputFormat, RoomId};
use std::io::{Cursor, Write};
use tempfile::Builder;

const CAMPUS_JSON: &str = r#"{
    "facilities": [
        { "id": 1, "name": "本館", "type": 1 },
        { "id": 2, "name": "体育館", "type": 5 }
    ],
    "rooms": [
        { "id": 10, "room": "講堂", "buildId": 1 },
        { "id": 11, "room": "トレーニング室", "buildId": 2 }
    ]
}"#;

fn write_data(content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run_script(session: &mut Session<'_>, script: &str) -> String {
    let mut output = Vec::new();
    session.run(Cursor::new(script.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_directory_file_drives_session() {
    let file = write_data(CAMPUS_JSON);
    let directory = Directory::from_file(file.path()).unwrap();
    assert_eq!(directory.facility_count(), 2);
    assert_eq!(directory.room_count(), 2);

    let mut session = Session::new(&directory);
    let output = run_script(&mut session, "こうどう\n講堂\n:enter\n");

    assert!(output.contains("#10 講堂(本館)"));
    assert_eq!(session.selection(), Selection::room(RoomId::new(10), FacilityId::new(1)));
}

#[test]
fn test_directory_file_rejects_dangling_building() {
    let file = write_data(
        r#"{ "facilities": [ { "id": 1, "name": "本館", "type": 1 } ],
             "rooms": [ { "id": 10, "room": "講堂", "buildId": 3 } ] }"#,
    );
    let error = Directory::from_file(file.path()).unwrap_err();
    assert!(matches!(error, DirectoryError::UnknownFacility { .. }));
}

#[test]
fn test_directory_file_rejects_unknown_category() {
    let file = write_data(r#"{ "facilities": [ { "id": 1, "name": "本館", "type": 9 } ] }"#);
    assert!(Directory::from_file(file.path()).is_err());
}

#[test]
fn test_directory_file_without_rooms() {
    let file = write_data(r#"{ "facilities": [ { "id": 1, "name": "本館", "type": 1 } ] }"#);
    let directory = Directory::from_file(file.path()).unwrap();
    assert_eq!(directory.room_count(), 0);
}

#[test]
fn test_missing_directory_file() {
    let error = Directory::from_file("/nonexistent/campus.json").unwrap_err();
    assert!(matches!(error, DirectoryError::FileNotFound(_)));
}

#[test]
fn test_one_shot_query_with_enter() {
    let directory = Directory::builtin();
    let mut session = Session::new(&directory).with_output_format(OutputFormat::Json);

    assert_eq!(session.handle(&Command::Input("図書".to_string())).unwrap(), Flow::Continue);
    assert_eq!(session.handle(&Command::Enter).unwrap(), Flow::Continue);
    assert_eq!(session.selection(), Selection::facility(FacilityId::new(21)));

    let mut output = Vec::new();
    session.render(&mut output).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["query"], "図書");
    assert_eq!(json["selection"]["facility"], 21);
    assert_eq!(json["selection"]["room"], 0);
}

#[test]
fn test_display_limit_applies_to_session_view() {
    let directory = Directory::builtin();
    let mut session = Session::new(&directory).with_max_display(2);

    session.handle(&Command::Input("ｐｃ".to_string())).unwrap();
    let view = session.view();
    assert_eq!(view.rooms.buttons.len(), 2);
    assert_eq!(view.rooms.remainder_text().as_deref(), Some("他1件..."));
}

#[test]
fn test_dead_end_line_keeps_rendered_results() {
    let directory = Directory::builtin();
    let mut session = Session::new(&directory);
    let output = run_script(&mut session, "図書\n図書xyz\n");

    let blocks: Vec<&str> = output.split("検索:").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("図書館"));
    assert!(blocks[1].contains("図書館"));
}

#[test]
fn test_literal_colon_and_quit() {
    let directory = Directory::builtin();
    let mut session = Session::new(&directory);
    let output = run_script(&mut session, "::\n:q\n図書\n");

    assert_eq!(session.controller().query(), ":");
    assert!(!output.contains("図書館"));
}

#[test]
fn test_show_selection_and_help() {
    let directory = Directory::builtin();
    let mut session = Session::new(&directory);
    let output = run_script(&mut session, ":selection\n:f 21\n:s\n:help\n");

    assert!(output.contains("選択: なし"));
    assert!(output.contains("選択: 図書館 {facility: 21, room: 0}"));
    assert!(output.contains(":compose-enter"));
}

#[test]
fn test_json_session_stream_is_machine_readable() {
    let directory = Directory::builtin();
    let mut session = Session::new(&directory).with_output_format(OutputFormat::Json);
    let output = run_script(&mut session, "閲覧\n:nope\n:enter\n:s\n:?\n");

    let values: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("every line is JSON"))
        .collect();
    assert_eq!(values.len(), 5);
    assert!(values[1].get("error").is_some());
    assert_eq!(values[2]["selection"]["room"], 44);
    assert_eq!(values[3]["description"], "選択: 図書館 閲覧室 {facility: 21, room: 44}");
    assert!(values[4]["help"].as_str().unwrap().contains(":quit"));
}

//! Integration tests for the console host
//!
//! These tests write settings, key maps and scripts to disk and replay them
//! the way the binary does.

use std::fs;

use input_types::{KeyEventSource, ScriptedSource};
use pane_console::{
    load_keymap, load_script, load_settings, parse_keys, parse_records, run, ConsoleError,
};
use pane_core::{PaneError, Position};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_key_script_end_to_end() {
    let dir = TempDir::new().unwrap();
    let settings = write(
        &dir,
        "settings.json",
        r#"{"char_metrics": {"char_width": 1, "char_height": 1}, "width_px": 12, "height_px": 3}"#,
    );
    let keymap = write(&dir, "keymap.json", r#"{"Ctrl+L": {"type": "HIDE_GUTTER"}}"#);
    let script = write(
        &dir,
        "script.keys",
        "# greet\n\"hello\"\nEnter\n\"world\"\nCtrl+A\nAlt+F\nCtrl+L\n",
    );

    let settings = load_settings(&settings).unwrap();
    let mut source = KeyEventSource::new(load_keymap(&keymap).unwrap());
    for event in parse_keys(&load_script(&script).unwrap()).unwrap() {
        source.push(event);
    }

    let report = run(settings, &mut source, false).unwrap();
    assert!(report.errors.is_empty());
    assert_eq!(report.text, "hello\nworld");
    assert_eq!(report.cursor, Position::new(2, 6));
    assert_eq!(report.final_frame, "hello\nworld[ ]\n~\n");
}

#[test]
fn test_record_script_end_to_end() {
    let dir = TempDir::new().unwrap();
    let script = write(
        &dir,
        "script.jsonl",
        concat!(
            "{\"type\": \"INSERT\", \"text\": \"abc\\ndef\"}\n",
            "{\"type\": \"MOVE_TO_POS\", \"line\": 9, \"col\": 1}\n",
            "{\"type\": \"MOVE_TO_POS\", \"line\": 1, \"col\": 2}\n",
            "{\"type\": \"KILL_LINE\"}\n",
        ),
    );

    let mut source: ScriptedSource = parse_records(&load_script(&script).unwrap())
        .unwrap()
        .into_iter()
        .collect();
    let report = run(pane_core::PaneSettings::default(), &mut source, true).unwrap();

    // The out-of-range jump is rejected without failing the step
    assert_eq!(report.applied, 4);
    assert!(report.errors.is_empty());
    assert_eq!(report.frames.len(), 4);
    assert_eq!(report.text, "a\ndef");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    match load_settings(&missing) {
        Err(ConsoleError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_bad_settings_rejected() {
    let dir = TempDir::new().unwrap();
    let json = r#"{"char_metrics": {"char_width": 0, "char_height": 0}}"#;
    let path = write(&dir, "settings.json", json);
    assert!(matches!(
        load_settings(&path),
        Err(ConsoleError::Pane(PaneError::InvalidSettings(_)))
    ));
}

#[test]
fn test_bad_keymap_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "keymap.json", r#"{"Hyper+X": {"type": "KILL_LINE"}}"#);
    assert!(matches!(load_keymap(&path), Err(ConsoleError::KeyMap(_))));
}

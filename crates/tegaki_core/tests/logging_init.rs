use tegaki_core::{init_logging, logging_status, Character, Point};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let first_dir = first.path().to_str().unwrap();
    let second_dir = second.path().to_str().unwrap();

    assert_eq!(logging_status(), None);

    init_logging("debug", first_dir).unwrap();
    init_logging("DEBUG", first_dir).unwrap();

    let level_err = init_logging("info", first_dir).unwrap_err();
    assert!(level_err.contains("refusing to switch"));
    let dir_err = init_logging("debug", second_dir).unwrap_err();
    assert!(dir_err.contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "debug");
    assert_eq!(dir, first.path());

    // Model events must not break when a logger is active.
    let mut character = Character::with_label("日");
    character.writing_mut().move_to_point(Point::new(0.0, 0.0));
    character.writing_mut().remove_last_stroke();
    assert!(character.to_xml().contains("<utf8>日</utf8>"));
}

#[test]
fn init_logging_rejects_invalid_arguments() {
    assert!(init_logging("loud", "/tmp").unwrap_err().contains("unsupported"));
    assert!(init_logging("info", "relative/dir").unwrap_err().contains("absolute"));
}

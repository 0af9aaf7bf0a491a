//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tegaki_core` linkage and logging configuration outside any UI.
//! - Draw a fixed sample character through the public API and print its
//!   XML export, so the output stays deterministic.

use log::warn;
use tegaki_core::{init_with_config, Character, LoggingConfig, Point};

fn main() {
    match LoggingConfig::from_env() {
        Ok(Some(config)) => {
            if let Err(err) = init_with_config(config) {
                eprintln!("tegaki_cli logging disabled: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => eprintln!("tegaki_cli logging disabled: {err}"),
    }

    println!("tegaki_core version={}", tegaki_core::core_version());
    println!("{}", sample_character().to_xml());
}

/// Two-stroke "十" drawn on a 100x100 canvas, 16 ms between samples.
fn sample_character() -> Character {
    let mut character = Character::with_label("十");
    let writing = character.writing_mut();

    writing.move_to_point(Point::new(10.0, 50.0).with_timestamp(0));
    for (step, x) in [50.0, 90.0].into_iter().enumerate() {
        let timestamp = 16 * (step as i64 + 1);
        if let Err(err) = writing.line_to_point(Point::new(x, 50.0).with_timestamp(timestamp)) {
            warn!("event=sample_draw module=cli status=error error={err}");
        }
    }

    writing.move_to_point(Point::new(50.0, 10.0).with_pressure(0.4).with_timestamp(200));
    let end = Point::new(50.0, 90.0).with_pressure(0.7).with_timestamp(232);
    if let Err(err) = writing.line_to_point(end) {
        warn!("event=sample_draw module=cli status=error error={err}");
    }

    character
}

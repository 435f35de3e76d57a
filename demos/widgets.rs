//! Widgets Demo: one of each dialog flavor, chained.
//!
//! Walks through an info box, text input, slider, date and time
//! pickers, a button choice box, and a progress box. Run with
//! `cargo run --example widgets_demo`; logs land in widgets_demo.log.

use chrono::{Local, Timelike};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::thread;
use std::time::Duration;
use termdialog::widget::{
    choice_box, date_box, info_box, input_box, slider_box, time_box, ChoiceBoxConfig,
    DateTimeConfig, InfoBoxConfig, InputBoxConfig, ProgressBox, ProgressBoxConfig,
    SliderConfig,
};
use termdialog::{CrosstermConsole, DialogError};

fn main() -> Result<(), DialogError> {
    if let Ok(file) = File::create("widgets_demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let mut console = CrosstermConsole::new();

    info_box(
        &mut console,
        "Welcome to the widgets tour.\nEach dialog commits with Enter and cancels with Escape.",
        &InfoBoxConfig {
            title: Some("Widgets".to_owned()),
            ..InfoBoxConfig::default()
        },
    )?;

    let name = input_box(
        &mut console,
        "What should we call you?",
        "friend",
        &InputBoxConfig::default(),
    )?
    .value_or("friend".to_owned());

    let volume = slider_box(
        &mut console,
        &format!("Pick a volume, {name}:"),
        0,
        11,
        7,
        &SliderConfig {
            title: Some("Volume".to_owned()),
            ..SliderConfig::default()
        },
    )?
    .value_or(7);

    let today = Local::now().date_naive();
    let date = date_box(&mut console, "Schedule for:", today, &DateTimeConfig::default())?
        .value_or(today);

    let now = Local::now().time().with_nanosecond(0).unwrap_or_default();
    let time = time_box(&mut console, "At what time?", now, &DateTimeConfig::default())?
        .value_or(now);

    let confirm = choice_box(
        &mut console,
        &format!("Volume {volume} on {date} at {time}. Proceed?"),
        &["Proceed", "Abort"],
        &ChoiceBoxConfig::default(),
    )?;

    if confirm.value_or(1) == 0 {
        let mut progress =
            ProgressBox::open(&mut console, "Applying settings", ProgressBoxConfig {
                show_percentage: true,
                ..ProgressBoxConfig::default()
            })?;
        for step in 1_u8..=20 {
            thread::sleep(Duration::from_millis(80));
            progress.update(f32::from(step) / 20.0)?;
        }
        progress.close()?;

        info_box(&mut console, "All done.", &InfoBoxConfig::default())?;
    }

    Ok(())
}

//! Selection Demo: single and multi selection over a choice tree.
//!
//! A grouped single-select, then a flat multi-select. Try `f` for
//! regex search, `?` for the key table, Tab for choice details, and
//! right-click on a choice for its description.

use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use termdialog::widget::{info_box, select_many, select_one, InfoBoxConfig, SelectionConfig};
use termdialog::{Choice, ChoiceCategory, ChoiceGroup, CrosstermConsole, DialogError};

fn main() -> Result<(), DialogError> {
    if let Ok(file) = File::create("selection_demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let mut console = CrosstermConsole::new();

    let languages = vec![ChoiceCategory::new(
        "langs",
        "Languages",
        vec![
            ChoiceGroup::new(
                "compiled",
                "Compiled",
                vec![
                    Choice::new("rust", "Rust")
                        .with_description("Memory safety without garbage collection.")
                        .highlighted(),
                    Choice::new("go", "Go").with_description("Goroutines and fast builds."),
                    Choice::new("fortran", "Fortran 77").disabled(),
                ],
            ),
            ChoiceGroup::new(
                "scripting",
                "Scripting",
                vec![
                    Choice::new("lua", "Lua").with_description("Embeddable and tiny."),
                    Choice::new("python", "Python"),
                ],
            ),
        ],
    )];

    let picked = select_one(
        &mut console,
        "Which language shall we use?",
        &languages,
        &SelectionConfig {
            title: Some("Language".to_owned()),
            ..SelectionConfig::default()
        },
    )?;

    let toppings = vec![ChoiceCategory::flat(vec![
        Choice::new("tests", "Unit tests").selected(),
        Choice::new("docs", "Documentation"),
        Choice::new("ci", "CI pipeline"),
        Choice::new("bench", "Benchmarks"),
    ])];

    let extras = select_many(
        &mut console,
        "What should the project ship with?",
        &toppings,
        &SelectionConfig {
            title: Some("Extras".to_owned()),
            ..SelectionConfig::default()
        },
    )?;

    let summary = match picked {
        termdialog::DialogOutcome::Committed(i) => {
            let names = ["Rust", "Go", "Fortran 77", "Lua", "Python"];
            format!(
                "Language: {}\nExtras picked: {}",
                names.get(i).copied().unwrap_or("?"),
                extras.value_or(Vec::new()).len()
            )
        }
        termdialog::DialogOutcome::Cancelled => "No language chosen.".to_owned(),
    };

    info_box(&mut console, &summary, &InfoBoxConfig::default())?;
    Ok(())
}

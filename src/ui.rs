// UI layer: an interactive menu built on `dialoguer`, plus a one-shot mode
// for scripts. Both run the same reducer and renderer; this module only
// owns the terminal, the spinner and the current `AppState`.

use crate::api::ParseService;
use crate::picker::{FilePicker, SelectedFile};
use crate::render::{menu_items, paint, view};
use crate::state::{Action, AppState};
use crate::uploader::Uploader;
use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Main interactive menu. Redraws the screen after every transition and
/// loops until the user chooses "Exit".
pub fn main_menu<S: ParseService>(uploader: &Uploader<S>, picker: FilePicker) -> Result<()> {
    let mut state = AppState::default();
    let mut notice: Option<String> = None;
    let mut out = io::stdout();

    loop {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        paint(&view(&state), &mut out)?;
        if let Some(n) = notice.take() {
            writeln!(out, "{n}")?;
        }

        let items = menu_items(&state);
        let default = if state.can_upload() { 1 } else { 0 };
        let selection = Select::new().items(&items).default(default).interact()?;
        match selection {
            0 => match picker.pick()? {
                Some(path) => match SelectedFile::from_path(&path) {
                    Ok(file) => state = state.reduce(Action::FileSelected(file)),
                    Err(e) => {
                        warn!(error = %e, "file selection failed");
                        notice = Some(format!("Could not use that file: {e}"));
                    }
                },
                None => {}
            },
            // The uploader itself rejects the call when no file is selected.
            1 => state = run_upload(uploader, state)?,
            2 => {
                match &state.parsed_result {
                    Some(result) => {
                        println!("{}", serde_json::to_string_pretty(result)?);
                        let _: String = Input::new()
                            .with_prompt("Press Enter to go back")
                            .allow_empty(true)
                            .interact_text()?;
                    }
                    None => notice = Some("Nothing parsed yet.".into()),
                }
            }
            3 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Upload `path` once, print the outcome and return an error if it failed.
pub fn one_shot<S: ParseService>(uploader: &Uploader<S>, path: &Path, json: bool) -> Result<()> {
    let file = SelectedFile::from_path(path).context("Failed to select file")?;
    let state = AppState::default().reduce(Action::FileSelected(file));
    let state = run_upload(uploader, state)?;

    if json {
        if let Some(result) = &state.parsed_result {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        if let Some(e) = state.error_message {
            anyhow::bail!(e);
        }
        return Ok(());
    }

    paint(&view(&state), &mut io::stdout())?;
    if state.error_message.is_some() {
        anyhow::bail!("upload did not complete");
    }
    Ok(())
}

/// Run one upload with an indicatif spinner shown while it is in flight.
fn run_upload<S: ParseService>(uploader: &Uploader<S>, state: AppState) -> Result<AppState> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);

    let next = uploader.upload(state, |s| {
        if let Some(p) = view(s).progress {
            spinner.set_message(p);
            spinner.enable_steady_tick(Duration::from_millis(100));
        }
    });
    spinner.finish_and_clear();
    Ok(next)
}

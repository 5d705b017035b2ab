// Rendering is split in two: `view` decides what to show for a state and
// is pure, `paint` writes a view to the terminal with crossterm styling.

use crate::state::{AppState, ParsedResult};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write};

pub const FIELD_LABELS: [&str; 8] = [
    "Name",
    "Phone",
    "Address",
    "Links",
    "Skills",
    "Experience",
    "Education",
    "Achievements",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: Vec<Field>,
}

/// Everything the terminal should show for one state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub selected: Option<String>,
    pub progress: Option<String>,
    pub error_banner: Option<String>,
    pub card: Option<Card>,
}

pub fn view(state: &AppState) -> View {
    View {
        selected: state
            .selected_file
            .as_ref()
            .map(|f| format!("{} ({} bytes, {})", f.name, f.size(), f.mime)),
        progress: state.is_loading.then(|| "Uploading...".to_string()),
        error_banner: state.error_message.clone(),
        card: state.parsed_result.as_ref().map(card),
    }
}

fn card(result: &ParsedResult) -> Card {
    let scalar = |v: &Option<String>| v.clone().unwrap_or_default();
    let values = [
        scalar(&result.name),
        scalar(&result.phone),
        scalar(&result.address),
        result.links.join(", "),
        result.skills.join(", "),
        result.experience.join(", "),
        result.education.join(", "),
        result.achievements.join(", "),
    ];
    Card {
        title: "Parsed file Data",
        subtitle: "Extracted information from your file",
        fields: FIELD_LABELS
            .into_iter()
            .zip(values)
            .map(|(label, value)| Field { label, value })
            .collect(),
    }
}

/// Labels for the menu. The upload entry reads as disabled when
/// `can_upload` is false.
pub fn menu_items(state: &AppState) -> Vec<String> {
    let upload = if state.is_loading {
        "Uploading..."
    } else if state.selected_file.is_none() {
        "Upload file (choose a file first)"
    } else {
        "Upload file"
    };
    vec![
        "Choose file".to_string(),
        upload.to_string(),
        "Show result as JSON".to_string(),
        "Exit".to_string(),
    ]
}

pub fn paint<W: Write>(v: &View, out: &mut W) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("File Parser\n"),
        SetAttribute(Attribute::Reset),
        Print("Upload your file to extract key information.\n\n"),
    )?;

    match &v.selected {
        Some(s) => queue!(out, Print(format!("Selected: {s}\n")))?,
        None => queue!(out, Print("Selected: (none)\n"))?,
    }

    if let Some(p) = &v.progress {
        queue!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(format!("{p}\n")),
            ResetColor
        )?;
    }

    if let Some(e) = &v.error_banner {
        queue!(
            out,
            Print("\n"),
            SetForegroundColor(Color::Red),
            Print(format!("[error] {e}\n")),
            ResetColor
        )?;
    }

    if let Some(c) = &v.card {
        queue!(
            out,
            Print("\n"),
            SetForegroundColor(Color::Green),
            Print(format!("{}\n", c.title)),
            ResetColor,
            Print(format!("{}\n", c.subtitle)),
        )?;
        for f in &c.fields {
            queue!(
                out,
                Print("  "),
                SetAttribute(Attribute::Bold),
                Print(format!("{:<13}", f.label)),
                SetAttribute(Attribute::Reset),
                Print(format!("{}\n", f.value)),
            )?;
        }
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

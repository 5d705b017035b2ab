// Client state and its reducer. Every transition consumes the old state
// and returns a new one; nothing else mutates these fields.

use crate::error::UploadError;
use crate::picker::SelectedFile;
use serde::{Deserialize, Serialize};

pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";
pub const UPLOAD_ERROR_PREFIX: &str = "Error uploading file: ";

/// Fields extracted by the parsing service. Every key must be present;
/// the scalars are `null` when the service found nothing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResult {
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub address: Option<String>,
    pub links: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub selected_file: Option<SelectedFile>,
    pub parsed_result: Option<ParsedResult>,
    pub error_message: Option<String>,
    pub is_loading: bool,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// A file was chosen; replaces any previous one.
    FileSelected(SelectedFile),
    /// Upload triggered with nothing selected.
    UploadRejected,
    UploadStarted,
    UploadSucceeded(ParsedResult),
    UploadFailed(UploadError),
}

impl AppState {
    pub fn reduce(self, action: Action) -> AppState {
        match action {
            // Result and error from a previous attempt stay on screen.
            Action::FileSelected(file) => AppState {
                selected_file: Some(file),
                ..self
            },
            Action::UploadRejected => AppState {
                error_message: Some(NO_FILE_MESSAGE.to_string()),
                is_loading: false,
                ..self
            },
            Action::UploadStarted => AppState {
                error_message: None,
                is_loading: true,
                ..self
            },
            Action::UploadSucceeded(result) => AppState {
                parsed_result: Some(result),
                error_message: None,
                is_loading: false,
                ..self
            },
            // parsed_result is kept: a stale card may sit under the new banner.
            Action::UploadFailed(err) => AppState {
                error_message: Some(format!("{UPLOAD_ERROR_PREFIX}{err}")),
                is_loading: false,
                ..self
            },
        }
    }

    /// Whether the upload trigger is enabled.
    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.is_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.into(),
            content: b"x".to_vec(),
            mime: "application/pdf".into(),
        }
    }

    #[test]
    fn upload_disabled_without_file_or_while_loading() {
        let s = AppState::default();
        assert!(!s.can_upload());

        let s = s.reduce(Action::FileSelected(file("a.pdf")));
        assert!(s.can_upload());

        let s = s.reduce(Action::UploadStarted);
        assert!(!s.can_upload());

        let s = s.reduce(Action::UploadFailed(UploadError::Transport("x".into())));
        assert!(s.can_upload());
    }

    #[test]
    fn new_selection_replaces_file_but_keeps_result_and_error() {
        let s = AppState::default()
            .reduce(Action::FileSelected(file("a.pdf")))
            .reduce(Action::UploadStarted)
            .reduce(Action::UploadSucceeded(ParsedResult::default()))
            .reduce(Action::UploadFailed(UploadError::Status { status: 500 }));

        let s = s.reduce(Action::FileSelected(file("b.pdf")));
        assert_eq!(s.selected_file.as_ref().unwrap().name, "b.pdf");
        assert!(s.parsed_result.is_some());
        assert_eq!(
            s.error_message.as_deref(),
            Some("Error uploading file: Request failed with status code 500")
        );
    }

    #[test]
    fn start_clears_error_and_success_sets_result() {
        let s = AppState::default()
            .reduce(Action::UploadRejected)
            .reduce(Action::FileSelected(file("a.pdf")))
            .reduce(Action::UploadStarted);
        assert!(s.is_loading);
        assert!(s.error_message.is_none());

        let result = ParsedResult {
            name: Some("A".into()),
            ..ParsedResult::default()
        };
        let s = s.reduce(Action::UploadSucceeded(result.clone()));
        assert!(!s.is_loading);
        assert_eq!(s.parsed_result, Some(result));
        assert!(s.error_message.is_none());
    }

    #[test]
    fn rejected_upload_sets_validation_message() {
        let s = AppState::default().reduce(Action::UploadRejected);
        assert_eq!(s.error_message.as_deref(), Some(NO_FILE_MESSAGE));
        assert!(!s.is_loading);
    }

    #[test]
    fn parsed_result_accepts_null_scalars() {
        let r: ParsedResult = serde_json::from_str(
            r#"{"name":null,"phone":"1","address":null,"links":["a"],"skills":[],
                "experience":[],"education":[],"achievements":[]}"#,
        )
        .unwrap();
        assert_eq!(r.name, None);
        assert_eq!(r.phone.as_deref(), Some("1"));
        assert_eq!(r.links, vec!["a"]);
        assert!(r.skills.is_empty());
    }

    #[test]
    fn parsed_result_requires_every_key() {
        let missing_list = r#"{"name":"A","phone":"1","address":"X","links":[]}"#;
        assert!(serde_json::from_str::<ParsedResult>(missing_list).is_err());

        let missing_scalar = r#"{"phone":"1","address":"X","links":[],"skills":[],
            "experience":[],"education":[],"achievements":[]}"#;
        assert!(serde_json::from_str::<ParsedResult>(missing_scalar).is_err());
    }
}

// Drives one upload cycle through the reducer: validate, start, call the
// service once, then record success or failure.

use crate::api::ParseService;
use crate::state::{Action, AppState};
use tracing::{debug, info};

pub struct Uploader<S> {
    service: S,
}

impl<S: ParseService> Uploader<S> {
    pub fn new(service: S) -> Self {
        Uploader { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run one upload. `observe` sees the in-flight state (loading set)
    /// right before the request goes out, so the caller can show progress.
    pub fn upload<F>(&self, state: AppState, mut observe: F) -> AppState
    where
        F: FnMut(&AppState),
    {
        let Some(file) = state.selected_file.clone() else {
            debug!("upload triggered with no file selected");
            return state.reduce(Action::UploadRejected);
        };

        let state = state.reduce(Action::UploadStarted);
        observe(&state);

        match self.service.parse(&file) {
            Ok(result) => {
                info!("file parsed");
                state.reduce(Action::UploadSucceeded(result))
            }
            Err(e) => state.reduce(Action::UploadFailed(e)),
        }
    }
}

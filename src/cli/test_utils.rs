//! Shared test utilities for CLI tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lint_changed::{ChangedFilesGateway, Cursor, FilePage, IntakeError, PullRequestLocator};

/// A gateway that replays queued responses and records the cursors it saw.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    /// Cursors passed to each call, in call order.
    pub cursors: Arc<Mutex<Vec<Option<String>>>>,
    /// Responses returned in order, one per call.
    pub responses: Arc<Mutex<VecDeque<Result<FilePage, IntakeError>>>>,
}

impl ScriptedGateway {
    /// Creates a gateway that answers with `responses` in order.
    pub fn new(responses: impl IntoIterator<Item = Result<FilePage, IntakeError>>) -> Self {
        Self {
            cursors: Arc::default(),
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
        }
    }

    /// Cursors seen so far.
    pub fn seen_cursors(&self) -> Vec<Option<String>> {
        self.cursors
            .lock()
            .expect("cursors mutex should be available")
            .clone()
    }
}

#[async_trait]
impl ChangedFilesGateway for ScriptedGateway {
    async fn changed_files_page(
        &self,
        _locator: &PullRequestLocator,
        cursor: Option<Cursor>,
    ) -> Result<FilePage, IntakeError> {
        self.cursors
            .lock()
            .expect("cursors mutex should be available")
            .push(cursor.map(|value| value.as_str().to_owned()));

        self.responses
            .lock()
            .expect("responses mutex should be available")
            .pop_front()
            .expect("no more scripted responses")
    }
}

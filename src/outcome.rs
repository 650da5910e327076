//! Result of a unify run as shown to the user, and the window's dialog state.

use crate::error::UnifyError;
use std::path::PathBuf;

/// Severity of an outcome dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Warning,
    Error,
    Success,
}

/// Final outcome of one unify action. Exactly one is produced per run.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// No matching export was found; carries the reason when listing failed
    NoFilesFound(Option<UnifyError>),
    LoadFailed(UnifyError),
    MergeFailed(UnifyError),
    SaveFailed(UnifyError),
    /// The combined workbook was written to this path
    Saved(PathBuf),
}

impl Outcome {
    pub fn level(&self) -> DialogLevel {
        match self {
            Outcome::NoFilesFound(_) => DialogLevel::Warning,
            Outcome::LoadFailed(_) | Outcome::MergeFailed(_) | Outcome::SaveFailed(_) => {
                DialogLevel::Error
            }
            Outcome::Saved(_) => DialogLevel::Success,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level() {
            DialogLevel::Warning => "Warning",
            DialogLevel::Error => "Error",
            DialogLevel::Success => "Success",
        }
    }

    /// Generic per-stage message.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::NoFilesFound(_) => "No files were found in the specified path.",
            Outcome::LoadFailed(_) => "Error loading one or more files.",
            Outcome::MergeFailed(_) => "Error merging the data.",
            Outcome::SaveFailed(_) => "Error saving the unified file.",
            Outcome::Saved(_) => "The files were unified and saved successfully.",
        }
    }

    /// The underlying error, if the outcome is a failure with a known cause.
    pub fn error(&self) -> Option<&UnifyError> {
        match self {
            Outcome::NoFilesFound(e) => e.as_ref(),
            Outcome::LoadFailed(e) | Outcome::MergeFailed(e) | Outcome::SaveFailed(e) => Some(e),
            Outcome::Saved(_) => None,
        }
    }

    /// Dialog body: the generic message followed by the cause or the written path.
    pub fn description(&self) -> String {
        match (self, self.error()) {
            (Outcome::Saved(path), _) => format!("{}\n\n{}", self.message(), path.display()),
            (_, Some(err)) => format!("{}\n\n{}", self.message(), err),
            (_, None) => self.message().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }
}

/// What the window should do after the user dismisses an outcome dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    /// Back to idle; the window stays open
    Dismiss,
    /// The run succeeded; the application exits
    Terminate,
}

/// Dialog state of the unifier window.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Dialog(Outcome),
}

/// Tracks a single window through idle, running and dialog states.
///
/// Only one run can be in flight, and a new run cannot start while an
/// outcome dialog is still open.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running)
    }

    /// Begin a run. Returns `false` (and changes nothing) unless idle.
    pub fn start(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = SessionState::Running;
        true
    }

    /// Record the outcome of the current run and open its dialog.
    pub fn finish(&mut self, outcome: Outcome) {
        if !self.is_running() {
            log::warn!("Outcome received with no run in progress: {:?}", outcome);
        }
        self.state = SessionState::Dialog(outcome);
    }

    /// The outcome currently shown, if a dialog is open.
    pub fn dialog(&self) -> Option<&Outcome> {
        match &self.state {
            SessionState::Dialog(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Close the open dialog and return to idle.
    ///
    /// Acknowledging a success dialog ends the application; with no dialog
    /// open this is a no-op dismissal.
    pub fn acknowledge(&mut self) -> Acknowledgment {
        match std::mem::take(&mut self.state) {
            SessionState::Dialog(outcome) if outcome.is_success() => Acknowledgment::Terminate,
            SessionState::Dialog(_) | SessionState::Idle => Acknowledgment::Dismiss,
            SessionState::Running => {
                self.state = SessionState::Running;
                Acknowledgment::Dismiss
            }
        }
    }
}

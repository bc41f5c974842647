//! Run lifecycle: NotStarted → Running → Completed | Failed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    Completed,
    Failed,
}

impl RunState {
    /// Completed or Failed; no transition leaves these.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }

    /// Move to Running. Only valid from NotStarted; otherwise returns the current state.
    pub(crate) fn start(&mut self) -> Result<(), RunState> {
        match self {
            RunState::NotStarted => {
                *self = RunState::Running;
                Ok(())
            }
            other => Err(*other),
        }
    }

    /// Move from Running to Completed (`succeeded`) or Failed.
    pub(crate) fn finish(&mut self, succeeded: bool) {
        debug_assert_eq!(*self, RunState::Running);
        *self = if succeeded {
            RunState::Completed
        } else {
            RunState::Failed
        };
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::NotStarted => "not started",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
        };
        f.write_str(s)
    }
}

use std::fmt;

/// Lifecycle of one action. `Confirmed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionState {
    Idle,
    Validating,
    Approving,
    Submitting,
    Confirmed,
    Failed,
}

impl ActionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ActionState::Confirmed | ActionState::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionState::Idle => "IDLE",
            ActionState::Validating => "VALIDATING",
            ActionState::Approving => "APPROVING",
            ActionState::Submitting => "SUBMITTING",
            ActionState::Confirmed => "CONFIRMED",
            ActionState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

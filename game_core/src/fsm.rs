//! Run state machine
//!
//! `Running` is the only state in which gameplay advances.

/// Run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    Running,
    Paused,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    TogglePause,
    Collide,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: RunState,
    pub to_state: RunState,
    pub action: RunAction,
}

/// Run finite state machine
#[derive(Debug, Clone, Default)]
pub struct RunFsm {
    state: RunState,
}

impl RunFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn is_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RunAction) -> TransitionResult {
        let from_state = self.state;
        match Self::next_state(from_state, action) {
            Some(next) => {
                self.state = next;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(state: RunState, action: RunAction) -> Option<RunState> {
        use RunAction::*;
        use RunState::*;

        match (state, action) {
            (Running, TogglePause) => Some(Paused),
            (Paused, TogglePause) => Some(Running),
            (Running, Collide) => Some(GameOver),
            (GameOver, Restart) => Some(Running),
            _ => None,
        }
    }
}

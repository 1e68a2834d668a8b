//! Read-eval loop state.

/// Whether the shell loop keeps reading keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Running,
    Stopped,
}

impl LoopState {
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

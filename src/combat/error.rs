use thiserror::Error;

use super::character::{Action, Character};

/// Why an action could not be performed on the selected target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TargetError {
    /// Nothing was selected.
    #[error("No target currently selected")]
    NoTarget,

    /// The selected character cannot perform the requested action.
    #[error("{character} cannot perform {action}")]
    InvalidTarget {
        /// The selected character.
        character: Character,
        /// The attempted action.
        action: Action,
    },
}

static_assertions::assert_impl_all!(TargetError: Send, Sync, std::error::Error);

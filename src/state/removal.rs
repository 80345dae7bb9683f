#[cfg(test)]
#[path = "removal_test.rs"]
mod removal_test;

/// Participant-removal confirmation flow.
///
/// One flow instance is shared across every remove button. Only one
/// confirmation can be active at a time: `open` is rejected while a
/// modal is showing or a DELETE is in flight, so rapid clicks cannot
/// stack confirmations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RemovalFlow {
    #[default]
    Idle,
    /// Waiting on the user's confirm/cancel choice.
    ModalOpen { activity: String, email: String },
    /// The DELETE request is in flight; the modal is already closed.
    Requesting,
}

impl RemovalFlow {
    /// Ask to open the confirmation modal for `(activity, email)`.
    /// Returns `false` without changing state unless the flow is idle.
    pub fn open(&mut self, activity: impl Into<String>, email: impl Into<String>) -> bool {
        if *self != Self::Idle {
            return false;
        }
        *self = Self::ModalOpen {
            activity: activity.into(),
            email: email.into(),
        };
        true
    }

    /// Close the modal without acting.
    pub fn cancel(&mut self) {
        if matches!(self, Self::ModalOpen { .. }) {
            *self = Self::Idle;
        }
    }

    /// Accept the confirmation: closes the modal, moves to `Requesting`,
    /// and yields the `(activity, email)` pair to send the DELETE for.
    /// Returns `None` when no modal is open.
    pub fn confirm(&mut self) -> Option<(String, String)> {
        match std::mem::replace(self, Self::Requesting) {
            Self::ModalOpen { activity, email } => Some((activity, email)),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Mark the in-flight request as finished, ready for the next flow.
    pub fn settle(&mut self) {
        if *self == Self::Requesting {
            *self = Self::Idle;
        }
    }

    /// Confirmation text for the open modal, if any.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Self::ModalOpen { activity, email } => Some(format!(
                "Are you sure you want to unregister {email} from {activity}?"
            )),
            _ => None,
        }
    }
}

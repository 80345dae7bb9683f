#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::time::Duration;

/// How long a sign-up outcome message stays visible.
pub const SIGNUP_MESSAGE_TTL: Duration = Duration::from_secs(5);
/// How long a removal outcome message stays visible.
pub const REMOVAL_MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Visual kind of a transient status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A transient status message shown in the message area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Transient message state.
///
/// Each `show` bumps a sequence number and returns it as a token. The
/// auto-hide task passes its token back to [`MessageState::clear_if`],
/// which only clears the message the timer was armed for. A stale timer
/// firing after a newer message appeared is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageState {
    current: Option<StatusMessage>,
    seq: u64,
}

impl MessageState {
    /// Show a message, replacing any current one. Returns the hide token.
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(StatusMessage {
            kind,
            text: text.into(),
        });
        self.seq
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.show(MessageKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.show(MessageKind::Error, text)
    }

    /// Clear the message identified by `token`; ignored if a newer
    /// message has replaced it since.
    pub fn clear_if(&mut self, token: u64) {
        if self.seq == token {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

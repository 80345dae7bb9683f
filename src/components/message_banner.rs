//! Transient status message area and its auto-hide scheduler.

use leptos::prelude::*;

use crate::state::message::{MessageKind, MessageState};

/// The shared message area below the sign-up form.
///
/// Renders nothing while no message is active; otherwise a success- or
/// error-styled banner with the current text.
#[component]
pub fn MessageBanner() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessageState>>();

    let current = move || messages.get().current().cloned();

    view! {
        <Show when=move || current().is_some()>
            <div
                id="message"
                class=move || match current().map(|m| m.kind) {
                    Some(MessageKind::Error) => "message message--error",
                    _ => "message message--success",
                }
            >
                {move || current().map(|m| m.text).unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Hide the message identified by `token` after `ttl`.
///
/// A newer message replacing the current one invalidates the token, so
/// the sleep firing late never hides the wrong message.
#[cfg(feature = "csr")]
pub fn schedule_hide(messages: RwSignal<MessageState>, token: u64, ttl: std::time::Duration) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ttl).await;
        messages.update(|m| m.clear_if(token));
    });
}

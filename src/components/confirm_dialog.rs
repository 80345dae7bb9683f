//! Confirmation dialog for removing a participant from an activity.

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::activities::ActivityMap;
use crate::state::message::MessageState;
use crate::state::removal::RemovalFlow;

/// Modal dialog driven by the shared [`RemovalFlow`].
///
/// Shown while the flow is in `ModalOpen`. Only the two action buttons
/// do anything; clicking the backdrop leaves the modal open. Confirming
/// closes the modal immediately and sends exactly one DELETE.
#[component]
pub fn ConfirmDialog(activities: LocalResource<Result<ActivityMap, ApiError>>) -> impl IntoView {
    let messages = expect_context::<RwSignal<MessageState>>();
    let removal = expect_context::<RwSignal<RemovalFlow>>();

    let on_cancel = move |_| removal.update(RemovalFlow::cancel);

    let on_confirm = move |_| {
        let Some((activity, email)) = removal.try_update(RemovalFlow::confirm).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::unregister(&activity, &email).await;
                removal.update(RemovalFlow::settle);

                match result {
                    Ok(message) => {
                        let text =
                            message.unwrap_or_else(|| "Participant removed".to_owned());
                        if let Some(token) = messages.try_update(|m| m.success(text)) {
                            crate::components::message_banner::schedule_hide(
                                messages,
                                token,
                                crate::state::message::REMOVAL_MESSAGE_TTL,
                            );
                        }
                        activities.refetch();
                    }
                    Err(err) if err.is_transport() => {
                        log::error!("error removing participant: {err}");
                        messages.update(|m| {
                            m.error("Network error when removing participant");
                        });
                    }
                    Err(err) => {
                        log::error!("error removing participant: {err}");
                        let text = err.user_message("Failed to remove participant");
                        if let Some(token) = messages.try_update(|m| m.error(text)) {
                            crate::components::message_banner::schedule_hide(
                                messages,
                                token,
                                crate::state::message::REMOVAL_MESSAGE_TTL,
                            );
                        }
                    }
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email, &messages, &activities);
        }
    };

    view! {
        <Show when=move || removal.get().prompt().is_some()>
            <div id="confirm-modal" class="dialog-backdrop">
                <div class="dialog">
                    <p class="dialog__content">
                        {move || removal.get().prompt().unwrap_or_default()}
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" data-action="cancel" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" data-action="confirm" on:click=on_confirm>
                            "Unregister"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

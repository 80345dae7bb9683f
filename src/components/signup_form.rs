//! Sign-up form: email input plus an activity select fed by the
//! activities resource.

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::activities::ActivityMap;
use crate::state::message::MessageState;

/// The sign-up form. Submission is intercepted and sent as
/// `POST /activities/{name}/signup?email={email}`; on success the form
/// resets and the activities resource is re-fetched.
#[component]
pub fn SignupForm(activities: LocalResource<Result<ActivityMap, ApiError>>) -> impl IntoView {
    let messages = expect_context::<RwSignal<MessageState>>();

    let email = RwSignal::new(String::new());
    let activity = RwSignal::new(String::new());

    let options = move || {
        activities.get().and_then(Result::ok).map(|map| {
            map.into_keys()
                .map(|name| {
                    view! { <option value=name.clone()>{name.clone()}</option> }
                })
                .collect::<Vec<_>>()
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let chosen = activity.get_untracked();
            let address = email.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&chosen, &address).await {
                    Ok(message) => {
                        let text = message.unwrap_or_else(|| "Signed up".to_owned());
                        if let Some(token) = messages.try_update(|m| m.success(text)) {
                            crate::components::message_banner::schedule_hide(
                                messages,
                                token,
                                crate::state::message::SIGNUP_MESSAGE_TTL,
                            );
                        }
                        email.set(String::new());
                        activity.set(String::new());
                        activities.refetch();
                    }
                    Err(err) if err.is_transport() => {
                        log::error!("error signing up: {err}");
                        messages.update(|m| {
                            m.error("Failed to sign up. Please try again.");
                        });
                    }
                    Err(err) => {
                        log::error!("error signing up: {err}");
                        let text = err.user_message("An error occurred");
                        if let Some(token) = messages.try_update(|m| m.error(text)) {
                            crate::components::message_banner::schedule_hide(
                                messages,
                                token,
                                crate::state::message::SIGNUP_MESSAGE_TTL,
                            );
                        }
                    }
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = &messages;
        }
    };

    view! {
        <section class="signup">
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=on_submit>
                <label class="signup__label">
                    "Email"
                    <input
                        id="email"
                        type="email"
                        required=true
                        placeholder="your-email@mergington.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="signup__label">
                    "Activity"
                    <select
                        id="activity"
                        required=true
                        prop:value=move || activity.get()
                        on:change=move |ev| activity.set(event_target_value(&ev))
                    >
                        <option value="">"-- Select an activity --"</option>
                        {options}
                    </select>
                </label>
                <button type="submit" class="btn btn--primary">
                    "Sign Up"
                </button>
            </form>
        </section>
    }
}

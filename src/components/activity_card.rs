//! Card component for a single activity with its participant roster.

use leptos::either::Either;
use leptos::prelude::*;

use crate::state::activities::Activity;
use crate::state::removal::RemovalFlow;

/// One activity card: description, schedule, remaining spots, and the
/// participant list with a remove control per entry.
///
/// Remove clicks go through the shared [`RemovalFlow`]; clicks while a
/// confirmation is already active are ignored by the flow itself.
#[component]
pub fn ActivityCard(name: String, activity: Activity) -> impl IntoView {
    let removal = expect_context::<RwSignal<RemovalFlow>>();

    let spots_left = activity.spots_left();

    let rows = activity
        .participants
        .iter()
        .map(|email| {
            let activity_name = name.clone();
            let email = email.clone();
            let label = email.clone();
            view! {
                <li>
                    <span class="participant-email">{label}</span>
                    <button
                        class="participant-remove"
                        title="Remove participant"
                        on:click=move |_| {
                            removal.update(|flow| {
                                flow.open(activity_name.clone(), email.clone());
                            });
                        }
                    >
                        "✕"
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let roster = if rows.is_empty() {
        Either::Left(view! { <li class="participants__empty">"No participants yet"</li> })
    } else {
        Either::Right(rows)
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{activity.description}</p>
            <p>
                <strong>"Schedule: "</strong>
                {activity.schedule}
            </p>
            <p>
                <strong>"Availability: "</strong>
                {format!("{spots_left} spots left")}
            </p>
            <div class="participants">
                <h5 class="participants__title">"Participants"</h5>
                <ul class="participants-list">{roster}</ul>
            </div>
        </div>
    }
}

//! The activity board page: activities list, sign-up form, transient
//! messaging, and the removal confirmation dialog.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::message_banner::MessageBanner;
use crate::components::signup_form::SignupForm;
use crate::net::api::ApiError;
use crate::state::activities::ActivityMap;

/// Fetch the activity map, logging failures before handing the result
/// to the resource so render code stays side-effect free.
async fn load_activities() -> Result<ActivityMap, ApiError> {
    let result = crate::net::api::fetch_activities().await;
    #[cfg(feature = "csr")]
    if let Err(err) = &result {
        log::error!("error fetching activities: {err}");
    }
    result
}

/// The single page of the app.
///
/// Owns the activities resource; the sign-up form and the confirmation
/// dialog trigger `refetch` on it after successful mutations, which is
/// the only way client state catches up with the server.
#[component]
pub fn BoardPage() -> impl IntoView {
    let activities = LocalResource::new(|| load_activities());

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <h1>"Mergington High School"</h1>
                <p>"Learn what activities are available and sign up"</p>
            </header>

            <main class="board-page__main">
                <section id="activities-container" class="board-page__activities">
                    <h3>"Activities"</h3>
                    <div id="activities-list">
                        <Suspense fallback=move || view! { <p>"Loading activities..."</p> }>
                            {move || {
                                activities
                                    .get()
                                    .map(|result| match result {
                                        Ok(map) => {
                                            view! {
                                                <div class="activity-cards">
                                                    {map
                                                        .into_iter()
                                                        .map(|(name, activity)| {
                                                            view! { <ActivityCard name=name activity=activity/> }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                        Err(_) => {
                                            view! {
                                                <p class="board-page__load-error">
                                                    "Failed to load activities. Please try again later."
                                                </p>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </div>
                </section>

                <SignupForm activities=activities/>
            </main>

            <MessageBanner/>
            <ConfirmDialog activities=activities/>
        </div>
    }
}

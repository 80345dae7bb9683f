//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::board::BoardPage;
use crate::state::message::MessageState;
use crate::state::removal::RemovalFlow;

/// Root application component.
///
/// Provides the shared message and removal-flow contexts and sets up
/// client-side routing for the single board page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One message area and one removal flow for the whole app.
    let messages = RwSignal::new(MessageState::default());
    let removal = RwSignal::new(RemovalFlow::default());

    provide_context(messages);
    provide_context(removal);

    view! {
        <Title text="Mergington High School Activities"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}

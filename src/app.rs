//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::chapter::ChapterPage;

/// Root application component.
///
/// Provides editor settings to every component and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::util::settings::editor_settings());

    view! {
        <Title text="Content Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChapterPage/>
            </Routes>
        </Router>
    }
}

//! Chapter page: resolves the chapter from the URL and opens the content editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts link here with `?board=&class=&stream=&subject=&chapter=&title=`.
//! A link missing a required parameter cannot address a record, so it is
//! surfaced through the fault boundary instead of opening an editor on a
//! bogus key.

#[cfg(test)]
#[path = "chapter_test.rs"]
mod chapter_test;

use content::ChapterRef;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::content_editor_modal::ContentEditorModal;
use crate::components::fault_boundary::FaultBoundary;

const REQUIRED_PARAMS: [&str; 4] = ["board", "class", "subject", "chapter"];

/// Build a chapter reference from query parameters.
fn chapter_from_query<F>(get: F) -> Result<ChapterRef, String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = |name: &str| get(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

    let missing: Vec<&str> = REQUIRED_PARAMS.into_iter().filter(|p| value(p).is_none()).collect();
    if !missing.is_empty() {
        return Err(format!("missing chapter parameter: {}", missing.join(", ")));
    }

    let chapter_id = value("chapter").unwrap_or_default();
    Ok(ChapterRef {
        board: value("board").unwrap_or_default(),
        class_level: value("class").unwrap_or_default(),
        stream: value("stream"),
        subject_name: value("subject").unwrap_or_default(),
        chapter_title: value("title").unwrap_or_else(|| chapter_id.clone()),
        chapter_id,
    })
}

#[component]
pub fn ChapterPage() -> impl IntoView {
    let query = use_query_map();

    let render = move || {
        chapter_from_query(|name| query.with(|q| q.get(name)))
            .map(|chapter| view! { <ChapterLauncher chapter/> }.into_any())
    };
    let on_reset = Callback::new(|()| crate::util::browser::history_back());

    view! {
        <div class="chapter-page">
            <FaultBoundary render on_reset/>
        </div>
    }
}

/// Chapter summary with an "Edit Content" action that opens the modal.
#[component]
fn ChapterLauncher(chapter: ChapterRef) -> impl IntoView {
    let open = RwSignal::new(false);
    let last_saved = RwSignal::new(false);

    let on_close = Callback::new(move |()| open.set(false));
    let on_save = Callback::new(move |()| {
        last_saved.set(true);
        open.set(false);
    });

    let key = chapter.content_key();
    let heading = chapter.chapter_title.clone();
    let subtitle = chapter.subtitle();

    view! {
        <section class="chapter-card">
            <h2 class="chapter-card__title">{heading}</h2>
            <p class="chapter-card__subtitle">{subtitle}</p>
            <p class="chapter-card__key">{key}</p>
            <button class="btn btn--primary" on:click=move |_| open.set(true)>
                "Edit Content"
            </button>
            <Show when=move || last_saved.get()>
                <p class="chapter-card__saved">"Content saved."</p>
            </Show>
        </section>
        <Show when=move || open.get()>
            <ContentEditorModal chapter=chapter.clone() on_close on_save/>
        </Show>
    }
}

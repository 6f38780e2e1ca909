//! Tabbed modal for editing one chapter's content record.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the record is loaded through `content::ContentRepository`
//! (remote first, then `localStorage`, then a default record). Tabs edit an
//! `EditorSession` signal; Save reassembles the record, writes it to both
//! stores, and waits for the remote acknowledgement before reporting.
//!
//! A record that exists but cannot be decoded loads as a placeholder with
//! Save disabled, and closing with unsaved edits asks for confirmation.
//!
//! Load and save complete asynchronously, possibly after the modal has been
//! closed. An alive flag cleared on cleanup, plus `try_*` signal writes, keep
//! late results from touching disposed state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use content::{ChapterRef, EditorSession, EditorSettings};
use leptos::prelude::*;

use crate::components::mcq_tab::McqTab;
use crate::components::notes_tab::NotesTab;
use crate::components::pdf_tab::PdfTab;
use crate::components::video_tab::VideoTab;
use crate::state::editor::{EditorState, EditorTab, Notice, editor_title, should_close};

#[cfg(feature = "csr")]
fn repository(
    settings: &EditorSettings,
) -> content::ContentRepository<crate::net::api::HttpContentStore, crate::util::storage::BrowserLocalStore> {
    content::ContentRepository::new(
        crate::net::api::HttpContentStore::new(settings),
        crate::util::storage::BrowserLocalStore,
        settings,
    )
}

/// Content editor modal for `chapter`.
#[component]
pub fn ContentEditorModal(
    chapter: ChapterRef,
    on_close: Callback<()>,
    /// Runs after a save that reached both stores.
    #[prop(optional)]
    on_save: Option<Callback<()>>,
) -> impl IntoView {
    let settings = use_context::<EditorSettings>().unwrap_or_default();
    let key = chapter.content_key();
    let session = RwSignal::new(EditorSession::default());
    let state = RwSignal::new(EditorState::default());

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    #[cfg(feature = "csr")]
    {
        let alive = alive.clone();
        let key = key.clone();
        let settings = settings.clone();
        leptos::task::spawn_local(async move {
            let loaded = repository(&settings).load(&key).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            session.try_set(EditorSession::from_record(loaded.record));
            state.try_update(|s| s.finish_loading(loaded.source));
        });
    }

    let notice_timeout_ms = settings.notice_timeout_ms;
    let show_notice = {
        let alive = alive.clone();
        Callback::new(move |notice: Notice| {
            let Some(seq) = state.try_update(|s| s.push_notice(notice)) else {
                return;
            };
            #[cfg(feature = "csr")]
            {
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(notice_timeout_ms))).await;
                    if alive.load(Ordering::Relaxed) {
                        state.try_update(|s| s.dismiss_notice(seq));
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (seq, notice_timeout_ms, &alive);
            }
        })
    };

    let request_close = Callback::new(move |()| {
        let dirty = session.with_untracked(EditorSession::dirty);
        if should_close(dirty, crate::util::browser::confirm) {
            on_close.run(());
        }
    });

    let on_save_click = {
        let key = key.clone();
        move |_| {
            if !state.with_untracked(EditorState::can_save) {
                return;
            }
            let record = session.with_untracked(EditorSession::to_record);
            state.update(|s| s.saving = true);

            #[cfg(feature = "csr")]
            {
                let alive = alive.clone();
                let key = key.clone();
                let settings = settings.clone();
                leptos::task::spawn_local(async move {
                    let outcome = repository(&settings).save(&key, &record).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    if outcome.is_saved() {
                        session.try_update(EditorSession::mark_saved);
                    }
                    state.try_update(|s| s.saving = false);
                    show_notice.run(Notice::from_save(&outcome));
                    if outcome.is_saved() {
                        if let Some(cb) = on_save {
                            cb.run(());
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&key, record, on_save);
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            request_close.run(());
        }
    };

    let title = editor_title(&chapter.chapter_title);
    let subtitle = chapter.subtitle();

    view! {
        <div class="dialog-backdrop" on:click=move |_| request_close.run(())>
            <div
                class="dialog dialog--content-editor"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <div class="content-editor__loading">"Loading Editor..."</div> }
                >
                    <header class="content-editor__header">
                        <div>
                            <h3 class="content-editor__title">{title.clone()}</h3>
                            <p class="content-editor__subtitle">{subtitle.clone()}</p>
                            {move || {
                                state
                                    .with(EditorState::source_hint)
                                    .map(|hint| view! { <p class="content-editor__hint">{hint}</p> })
                            }}
                        </div>
                        <button
                            class="btn content-editor__close"
                            title="Close editor"
                            on:click=move |_| request_close.run(())
                        >
                            "✕"
                        </button>
                    </header>

                    <nav class="content-editor__tabs">
                        {EditorTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="content-editor__tab"
                                        class:content-editor__tab--active=move || state.with(|s| s.tab == tab)
                                        on:click=move |_| state.update(|s| s.tab = tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="content-editor__body">
                        {move || match state.with(|s| s.tab) {
                            EditorTab::Pdf => view! { <PdfTab session/> }.into_any(),
                            EditorTab::Video => view! { <VideoTab session/> }.into_any(),
                            EditorTab::Notes => view! { <NotesTab session/> }.into_any(),
                            EditorTab::Mcq => view! { <McqTab session on_notice=show_notice/> }.into_any(),
                        }}
                    </div>

                    {move || {
                        state
                            .with(|s| s.notice.clone())
                            .map(|notice| {
                                view! {
                                    <div class=format!("editor-notice {}", notice.kind.css_modifier()) role="status">
                                        {notice.text}
                                    </div>
                                }
                            })
                    }}

                    <footer class="content-editor__footer">
                        <button class="btn" on:click=move |_| request_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || !state.with(EditorState::can_save)
                            on:click=on_save_click.clone()
                        >
                            {move || if state.with(|s| s.saving) { "Saving..." } else { "Save Changes" }}
                        </button>
                    </footer>
                </Show>
            </div>
        </div>
    }
}

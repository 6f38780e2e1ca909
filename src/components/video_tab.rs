//! VIDEO tab: direct video links, credit cost, and the ordered playlist.

use content::{EditorSession, LinkField};
use leptos::prelude::*;

use crate::state::editor::parse_credits;

#[component]
pub fn VideoTab(session: RwSignal<EditorSession>) -> impl IntoView {
    let link_input = move |field: LinkField, label: &'static str| {
        view! {
            <label class="editor-field">
                <span class="editor-field__label">{label}</span>
                <input
                    class="editor-field__input"
                    type="text"
                    placeholder="https://..."
                    prop:value=move || session.with(|s| s.link(field).to_owned())
                    on:input=move |ev| session.update(|s| s.set_link(field, event_target_value(&ev)))
                />
            </label>
        }
    };

    let on_add = move |_| {
        session.update(|s| {
            s.add_video_from_draft();
        });
    };

    view! {
        <div class="editor-tab editor-tab--video">
            {link_input(LinkField::FreeVideo, "Free Video Link")}
            {link_input(LinkField::PremiumVideo, "Premium Video Link")}
            <label class="editor-field">
                <span class="editor-field__label">"Video Credits Cost"</span>
                <input
                    class="editor-field__input"
                    type="number"
                    min="0"
                    prop:value=move || {
                        session.with(|s| s.video_credits_cost().map(|c| c.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        session.update(|s| s.set_video_credits_cost(parse_credits(&event_target_value(&ev))))
                    }
                />
            </label>

            <div class="playlist-add">
                <h4 class="playlist-add__title">"Add Video"</h4>
                <div class="playlist-add__inputs">
                    <input
                        class="editor-field__input playlist-add__name"
                        type="text"
                        placeholder="Title"
                        prop:value=move || session.with(|s| s.video_draft().title.clone())
                        on:input=move |ev| session.update(|s| s.set_video_draft_title(event_target_value(&ev)))
                    />
                    <input
                        class="editor-field__input playlist-add__url"
                        type="text"
                        placeholder="URL"
                        prop:value=move || session.with(|s| s.video_draft().url.clone())
                        on:input=move |ev| session.update(|s| s.set_video_draft_url(event_target_value(&ev)))
                    />
                </div>
                <button class="btn playlist-add__button" on:click=on_add>
                    "+ Add to Playlist"
                </button>
            </div>

            <ul class="playlist">
                {move || {
                    session
                        .with(|s| s.playlist().to_vec())
                        .into_iter()
                        .enumerate()
                        .map(|(idx, video)| {
                            view! {
                                <li class="playlist__item">
                                    <span class="playlist__title" title=video.url>{video.title}</span>
                                    <button
                                        class="btn playlist__remove"
                                        title="Remove video"
                                        on:click=move |_| {
                                            session.update(|s| {
                                                if let Err(e) = s.remove_video(idx) {
                                                    leptos::logging::warn!("playlist remove rejected: {e}");
                                                }
                                            });
                                        }
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

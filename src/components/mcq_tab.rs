//! MCQ tab: spreadsheet import, question list, and per-question editing.

use content::{EditorSession, McqEdit, OPTION_COUNT};
use leptos::prelude::*;

use crate::state::editor::Notice;

const IMPORT_PLACEHOLDER: &str = "Paste spreadsheet rows (Q | A | B | C | D | Ans 1-4 | Explanation)";
const OPTION_LETTERS: [&str; OPTION_COUNT] = ["A", "B", "C", "D"];

#[component]
pub fn McqTab(session: RwSignal<EditorSession>, on_notice: Callback<Notice>) -> impl IntoView {
    let on_import = move |_| {
        let Some(result) = session.try_update(EditorSession::import_draft) else {
            return;
        };
        if let Some(notice) = Notice::from_import(&result) {
            on_notice.run(notice);
        }
    };

    let on_add = move |_| {
        session.update(|s| {
            s.add_mcq();
        });
    };

    let count = move || session.with(|s| s.mcqs().len());

    view! {
        <div class="editor-tab editor-tab--mcq">
            <div class="mcq-import">
                <textarea
                    class="mcq-import__text"
                    placeholder=IMPORT_PLACEHOLDER
                    prop:value=move || session.with(|s| s.import_text().to_owned())
                    on:input=move |ev| session.update(|s| s.set_import_text(event_target_value(&ev)))
                ></textarea>
                <button class="btn mcq-import__button" on:click=on_import>
                    "Import"
                </button>
            </div>

            <div class="mcq-toolbar">
                <span class="mcq-toolbar__count">
                    {move || format!("{} Questions", count())}
                </span>
                <button class="btn mcq-toolbar__add" on:click=on_add>
                    "+ Add Question"
                </button>
            </div>

            <div class="mcq-list">
                <For
                    each=move || 0..count()
                    key=|idx| *idx
                    children=move |idx| view! { <McqCard session index=idx/> }
                />
            </div>
        </div>
    }
}

/// Editor for the question at `index`. Reads through the session by index so
/// a card keeps its DOM (and focus) while its fields change.
#[component]
fn McqCard(session: RwSignal<EditorSession>, index: usize) -> impl IntoView {
    let apply = move |edit: McqEdit| {
        session.update(|s| {
            if let Err(e) = s.update_mcq(index, edit) {
                leptos::logging::warn!("mcq edit rejected: {e}");
            }
        });
    };
    let answer = move || session.with(|s| s.mcq(index).and_then(content::McqItem::answer_index));
    let field = move |read: fn(&content::McqItem) -> String| {
        move || session.with(|s| s.mcq(index).map(read).unwrap_or_default())
    };

    let on_delete = move |_| {
        session.update(|s| {
            if let Err(e) = s.delete_mcq(index) {
                leptos::logging::warn!("mcq delete rejected: {e}");
            }
        });
    };

    let options = (0..OPTION_COUNT)
        .map(|opt| {
            view! {
                <label class="mcq-card__option">
                    <input
                        type="radio"
                        name=format!("mcq-{index}-answer")
                        title=format!("Mark option {} correct", OPTION_LETTERS[opt])
                        prop:checked=move || answer() == Some(opt)
                        on:change=move |_| apply(McqEdit::CorrectAnswer(opt))
                    />
                    <input
                        class="editor-field__input mcq-card__option-text"
                        type="text"
                        placeholder=OPTION_LETTERS[opt]
                        prop:value=move || {
                            session.with(|s| s.mcq(index).map(|q| q.options[opt].clone()).unwrap_or_default())
                        }
                        on:input=move |ev| {
                            session.update(|s| {
                                if let Err(e) = s.update_mcq_option(index, opt, event_target_value(&ev)) {
                                    leptos::logging::warn!("mcq option edit rejected: {e}");
                                }
                            });
                        }
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="mcq-card">
            <div class="mcq-card__header">
                <span class="mcq-card__number">{format!("Q{}", index + 1)}</span>
                <Show when=move || answer().is_none()>
                    <span class="mcq-card__warning">"No valid answer selected"</span>
                </Show>
                <button class="btn mcq-card__delete" title="Delete question" on:click=on_delete>
                    "✕"
                </button>
            </div>
            <input
                class="editor-field__input mcq-card__question"
                type="text"
                placeholder="Question"
                prop:value=field(|q| q.question.clone())
                on:input=move |ev| apply(McqEdit::Question(event_target_value(&ev)))
            />
            <div class="mcq-card__options">{options}</div>
            <input
                class="editor-field__input mcq-card__explanation"
                type="text"
                placeholder="Explanation"
                prop:value=field(|q| q.explanation.clone())
                on:input=move |ev| apply(McqEdit::Explanation(event_target_value(&ev)))
            />
        </div>
    }
}

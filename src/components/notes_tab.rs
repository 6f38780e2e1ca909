//! NOTES tab: free and premium HTML notes.

use content::{EditorSession, NotesTier};
use leptos::prelude::*;

use crate::components::rich_text_field::RichTextField;

#[component]
pub fn NotesTab(session: RwSignal<EditorSession>) -> impl IntoView {
    let notes = move |tier: NotesTier| Signal::derive(move || session.with(|s| s.notes(tier).to_owned()));
    let setter = move |tier: NotesTier| Callback::new(move |html: String| session.update(|s| s.set_notes(tier, html)));

    view! {
        <div class="editor-tab editor-tab--notes">
            <RichTextField
                label="Free Notes (HTML)"
                value=notes(NotesTier::Free)
                on_change=setter(NotesTier::Free)
            />
            <RichTextField
                label="Premium Notes (HTML)"
                value=notes(NotesTier::Premium)
                on_change=setter(NotesTier::Premium)
                modifier="rich-text--premium"
            />
        </div>
    }
}

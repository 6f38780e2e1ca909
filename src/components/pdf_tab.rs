//! PDF tab: free/premium/ultra PDF links and the ultra price.

use content::{EditorSession, LinkField};
use leptos::prelude::*;

use crate::state::editor::parse_credits;

#[derive(Clone, Copy)]
struct LinkRow {
    field: LinkField,
    label: &'static str,
}

const PDF_LINKS: &[LinkRow] = &[
    LinkRow { field: LinkField::FreePdf, label: "Free PDF Link" },
    LinkRow { field: LinkField::PremiumPdf, label: "Premium PDF Link" },
    LinkRow { field: LinkField::UltraPdf, label: "Ultra PDF Link" },
];

#[component]
pub fn PdfTab(session: RwSignal<EditorSession>) -> impl IntoView {
    view! {
        <div class="editor-tab editor-tab--pdf">
            {PDF_LINKS
                .iter()
                .map(|row| {
                    let field = row.field;
                    view! {
                        <label class="editor-field">
                            <span class="editor-field__label">{row.label}</span>
                            <input
                                class="editor-field__input"
                                type="text"
                                placeholder="https://..."
                                prop:value=move || session.with(|s| s.link(field).to_owned())
                                on:input=move |ev| session.update(|s| s.set_link(field, event_target_value(&ev)))
                            />
                        </label>
                    }
                })
                .collect_view()}
            <label class="editor-field">
                <span class="editor-field__label">"Ultra Price (Credits)"</span>
                <input
                    class="editor-field__input"
                    type="number"
                    min="0"
                    prop:value=move || session.with(|s| s.price().map(|p| p.to_string()).unwrap_or_default())
                    on:input=move |ev| session.update(|s| s.set_price(parse_credits(&event_target_value(&ev))))
                />
            </label>
        </div>
    }
}

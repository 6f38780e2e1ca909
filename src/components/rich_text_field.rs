//! HTML notes field: source editor with a live rendered preview.
//!
//! The HTML is treated as an opaque string; nothing here parses or sanitizes
//! it beyond what the browser does when rendering the preview.

use leptos::prelude::*;

#[component]
pub fn RichTextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// Extra modifier class, e.g. to tint the premium notes editor.
    #[prop(optional)]
    modifier: &'static str,
) -> impl IntoView {
    let preview = RwSignal::new(false);

    view! {
        <div class=format!("rich-text {modifier}")>
            <div class="rich-text__header">
                <label class="editor-field__label">{label}</label>
                <button
                    class="btn rich-text__toggle"
                    on:click=move |_| preview.update(|p| *p = !*p)
                >
                    {move || if preview.get() { "Edit HTML" } else { "Preview" }}
                </button>
            </div>
            <Show
                when=move || preview.get()
                fallback=move || {
                    view! {
                        <textarea
                            class="rich-text__source"
                            placeholder="<p>Write notes as HTML…</p>"
                            prop:value=move || value.get()
                            on:input=move |ev| on_change.run(event_target_value(&ev))
                        ></textarea>
                    }
                }
            >
                <div class="rich-text__preview" inner_html=move || value.get()></div>
            </Show>
        </div>
    }
}

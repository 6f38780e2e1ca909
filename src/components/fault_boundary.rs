//! Fault boundary: renders a fallible view and swaps in a recovery panel on failure.
//!
//! DESIGN
//! ======
//! State lives in a `content::FaultBarrier` signal. The render closure is run
//! through the barrier on every reactive pass; once it fails, the fallback is
//! shown until "Go Back" resets the barrier (running the caller's reset hook)
//! or "Reload App" reloads the page.
//!
//! The rendered view sits inside a Leptos `ErrorBoundary`, so an `Err` view
//! thrown anywhere below it faults the same barrier. Resetting re-runs
//! `render`, which rebuilds that subtree from scratch.

use content::{Fault, FaultBarrier};
use leptos::prelude::*;

/// Wrap `render`; an `Err` from it or from any view beneath it is logged and
/// replaced with a fallback panel.
#[component]
pub fn FaultBoundary<F>(
    render: F,
    /// Called once per "Go Back" so the caller can discard what caused the fault.
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView
where
    F: Fn() -> Result<AnyView, String> + Send + Sync + 'static,
{
    let mut initial = FaultBarrier::new();
    if let Some(hook) = on_reset {
        initial = initial.with_reset_hook(move || hook.run(()));
    }
    let barrier = RwSignal::new(initial);

    let on_go_back = Callback::new(move |()| {
        barrier.update(|b| {
            b.reset();
        });
    });
    let on_reload = Callback::new(move |()| crate::util::browser::reload_page());

    move || {
        // Subscribe to resets; the render itself must not re-notify this closure.
        barrier.track();
        match barrier.try_update_untracked(|b| b.render_guarded(&render)) {
            Some(Ok(view)) => view! {
                <ErrorBoundary fallback=move |errors| {
                    let first = errors.with_untracked(|errs| errs.iter().next().map(|(_, e)| e.to_string()));
                    first
                        .and_then(|message| barrier.try_update_untracked(|b| b.capture(Fault::new(message))))
                        .map(|fault| view! { <FaultFallback fault on_go_back on_reload/> })
                }>
                    {view}
                </ErrorBoundary>
            }
            .into_any(),
            Some(Err(fault)) => view! { <FaultFallback fault on_go_back on_reload/> }.into_any(),
            None => ().into_any(),
        }
    }
}

#[component]
fn FaultFallback(fault: Fault, on_go_back: Callback<()>, on_reload: Callback<()>) -> impl IntoView {
    view! {
        <div class="fault-fallback" role="alert">
            <div class="fault-fallback__icon" aria-hidden="true">"⚠"</div>
            <h2 class="fault-fallback__title">"Something went wrong"</h2>
            <p class="fault-fallback__lead">
                "We encountered an unexpected error while loading this content."
            </p>
            <div class="fault-fallback__message">
                <p>{fault.message().to_owned()}</p>
            </div>
            <div class="fault-fallback__actions">
                <button class="btn btn--primary" on:click=move |_| on_go_back.run(())>
                    "← Go Back"
                </button>
                <button class="btn" on:click=move |_| on_reload.run(())>
                    "⟳ Reload App"
                </button>
            </div>
        </div>
    }
}

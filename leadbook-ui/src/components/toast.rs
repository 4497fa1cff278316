//! Toast Notification Component
//!
//! Renders the transient outcome of the last store mutation.

use leptos::*;

use crate::state::use_global_state;

/// Bottom-right stack of the current success and error messages
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();
    let (success, error) = (state.success, state.error);

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
            {move || success.get().map(|text| toast_line(text, "bg-emerald-700"))}
            {move || error.get().map(|text| toast_line(text, "bg-rose-700"))}
        </div>
    }
}

fn toast_line(text: String, tone: &'static str) -> impl IntoView {
    view! {
        <p class=format!("{} text-sm text-white px-4 py-2 rounded shadow", tone) role="status">
            {text}
        </p>
    }
}

use leptos::prelude::*;

/// Transient notice for a failed submit. Messages shown here are either the
/// server's `message` field or a generic fallback; token material never
/// reaches this component.
#[component]
pub fn Notice(message: String) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            role="alert"
        >
            {message}
        </div>
    }
}

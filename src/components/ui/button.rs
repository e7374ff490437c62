use leptos::prelude::*;

const BUTTON_CLASS: &str = "text-white bg-[#4285f4] hover:bg-[#3367d6] focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center";

/// Primary action button. Disabled state is reactive so forms can lock the
/// button while a submit is in flight.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get();

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=BUTTON_CLASS
            class:opacity-70=is_disabled
            class:cursor-not-allowed=is_disabled
            disabled=is_disabled
        >
            {children()}
        </button>
    }
}

//! Fallback for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-6xl font-black text-gray-200">"404"</h1>
                <p class="mt-2 text-xl font-semibold text-gray-900">"Page not found"</p>
                <p class="mt-2 text-sm text-gray-500">
                    "The page you are looking for does not exist or has moved."
                </p>
                <A
                    href="/home"
                    {..}
                    class="mt-6 text-white bg-[#4285f4] hover:bg-[#3367d6] rounded-lg px-5 py-2.5 text-sm font-medium"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}

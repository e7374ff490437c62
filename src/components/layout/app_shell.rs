//! Shared page chrome: brand, static nav links and the auth-conditional
//! action (create account vs logout). Routes render inside its container.

use crate::features::auth::session::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated();
    let navigate = use_navigate();

    let logout_session = session;
    let on_logout = move |_| {
        logout_session.clear_session();
        navigate(
            "/signin",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="sticky top-0 z-10 bg-white shadow-sm">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto px-4 py-3">
                    <A href="/" {..} class="text-2xl font-semibold text-[#4285f4] whitespace-nowrap">
                        "DoctoProche"
                    </A>
                    <nav class="flex items-center gap-6 text-sm font-medium text-gray-800">
                        <A href="/home" {..} class="hidden sm:block hover:text-[#4285f4]">
                            "HOME"
                        </A>
                        <a href="#specialities" class="hidden sm:block hover:text-[#4285f4]">
                            "FIND DOCTORS"
                        </a>
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A
                                        href="/signup"
                                        {..}
                                        class="text-white bg-[#4285f4] hover:bg-[#3367d6] rounded-full px-5 py-2"
                                    >
                                        "Create account"
                                    </A>
                                }
                            }
                        >
                            <button
                                type="button"
                                class="text-white bg-[#4285f4] hover:bg-[#3367d6] rounded-full px-5 py-2"
                                on:click=on_logout.clone()
                            >
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-xl mx-auto px-4 py-6">{children()}</div>
            </main>
        </div>
    }
}

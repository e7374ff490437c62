//! Deploy check page showing which build is live.

use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-sm mx-auto mt-8 bg-white border border-gray-200 rounded-lg shadow-sm p-8 text-center">
                <h2 class="text-xl font-semibold text-gray-900">"Build Version"</h2>
                <p class="mt-4 text-sm text-gray-500">{concat!("v", env!("CARGO_PKG_VERSION"))}</p>
                <pre class="mt-2 text-sm text-gray-900">{build_info::git_commit_hash()}</pre>
            </div>
        </AppShell>
    }
}

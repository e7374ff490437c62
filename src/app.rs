//! Application root: the session context wraps the router so every route
//! and the shell can reach it.

use crate::features::auth::session::SessionProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <Router>
                <AppRoutes />
            </Router>
        </SessionProvider>
    }
}

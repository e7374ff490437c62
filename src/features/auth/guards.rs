use crate::features::auth::session::use_session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Gates a protected view on session presence.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let redirect_session = session.clone();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !redirect_session.is_authorized() {
            // UX-only guard; real access control must live on the API.
            navigate(
                "/signin",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    // The protected view never renders without a session; the effect then
    // replaces the blocked location so it stays out of history.
    view! {
        <Show when=move || session.is_authorized()>
            {children()}
        </Show>
    }
}

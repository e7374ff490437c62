//! Route table. The root path is an alias for the protected home page;
//! unknown paths fall back to the not-found page.

mod health;
mod home;
mod not_found;
mod signin;
mod signup;

pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signin::SignInPage;
pub(crate) use signup::SignUpPage;

use crate::features::auth::guards::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{path, NavigateOptions};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=RootRedirect />
            <Route
                path=path!("/home")
                view=|| {
                    view! {
                        <RequireAuth>
                            <HomePage />
                        </RequireAuth>
                    }
                }
            />
            <Route path=path!("/signin") view=SignInPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

/// Replace-redirects `/` to the home page, which then applies the guard.
#[component]
fn RootRedirect() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        navigate(
            "/home",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}

//! Sign-in page: validates the form locally, requires a completed CAPTCHA,
//! exchanges credentials for a session token and stores it before moving on
//! to the home page.

use crate::app_lib::AppError;
use crate::components::{AppShell, Button, FieldError, Notice, Spinner, TextField};
use crate::features::auth::captcha::CaptchaGate;
use crate::features::auth::forms::{fields, login_request, signin_schema};
use crate::features::auth::session::use_session;
use crate::features::auth::{client, types::LoginRequest};
use crate::forms::FormState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(signin_schema()));
    let (notice, set_notice) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    session.set_session(&response.token);
                    navigate("/home", Default::default());
                }
                Err(err) => set_notice.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        // One request at a time; the button is disabled but Enter still
        // submits the form.
        if login_action.pending().get_untracked() {
            return;
        }

        let is_valid = form.try_update(FormState::validate_all).unwrap_or(false);
        if !is_valid {
            return;
        }

        login_action.dispatch(form.with_untracked(login_request));
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto mt-8 bg-white border border-gray-200 rounded-lg shadow-sm p-8">
                <h2 class="text-xl font-semibold text-gray-900">"Sign in"</h2>
                <p class="text-sm text-gray-500 mb-6">"Please sign in to book appointment"</p>

                <form on:submit=on_submit novalidate>
                    <TextField
                        form=form
                        name=fields::EMAIL
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                    />
                    <TextField
                        form=form
                        name=fields::PASSWORD
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                    />

                    <div class="mb-5">
                        <CaptchaGate
                            on_complete=Callback::new(move |token: String| {
                                form.update(|state| state.set_field(fields::RECAPTCHA, token));
                            })
                            on_expire=Callback::new(move |()| {
                                form.update(|state| {
                                    state.set_field(fields::RECAPTCHA, String::new())
                                });
                            })
                        />
                        <FieldError form=form name=fields::RECAPTCHA />
                    </div>

                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign In"
                    </Button>
                </form>

                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    notice
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Notice message=err.notice("Error signing in").to_string() />
                                </div>
                            }
                        })
                }}

                <p class="mt-6 text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <A href="/signup" {..} class="text-[#4285f4] hover:underline">
                        "Create account"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}

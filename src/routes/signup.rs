//! Sign-up page: collects the registration fields, requires a completed
//! CAPTCHA and creates the account. Success moves the user to sign-in; no
//! session is established here.

use crate::app_lib::AppError;
use crate::components::{AppShell, Button, FieldError, Notice, SelectField, Spinner, TextField};
use crate::features::auth::captcha::CaptchaGate;
use crate::features::auth::forms::{fields, register_request, signup_schema};
use crate::features::auth::{client, types::RegisterRequest};
use crate::forms::FormState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const ROLE_OPTIONS: &[(&str, &str)] = &[("patient", "Patient"), ("doctor", "Doctor")];

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(signup_schema()));
    let (notice, set_notice) = signal::<Option<AppError>>(None);

    let signup_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => navigate("/signin", Default::default()),
                Err(err) => set_notice.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        if signup_action.pending().get_untracked() {
            return;
        }

        let is_valid = form.try_update(FormState::validate_all).unwrap_or(false);
        if !is_valid {
            return;
        }

        let Some(request) = form.with_untracked(register_request) else {
            return;
        };

        signup_action.dispatch(request);
    };

    view! {
        <AppShell>
            <div class="max-w-md mx-auto mt-8 bg-white border border-gray-200 rounded-lg shadow-sm p-8">
                <h2 class="text-xl font-semibold text-gray-900">"Create account"</h2>
                <p class="text-sm text-gray-500 mb-6">"Please sign up to book appointment"</p>

                <form on:submit=on_submit novalidate>
                    <TextField
                        form=form
                        name=fields::FIRST_NAME
                        label="First name"
                        autocomplete="given-name"
                    />
                    <TextField
                        form=form
                        name=fields::LAST_NAME
                        label="Last name"
                        autocomplete="family-name"
                    />
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
                        autocomplete="new-password"
                    />
                    <TextField
                        form=form
                        name=fields::PHONE_NUMBER
                        label="Phone number"
                        input_type="tel"
                        autocomplete="tel"
                        placeholder="+1 555 123 4567"
                    />
                    <SelectField form=form name=fields::ROLE label="Role" options=ROLE_OPTIONS />

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

                    <Button button_type="submit" disabled=signup_action.pending()>
                        "Sign Up"
                    </Button>
                </form>

                {move || {
                    signup_action
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
                                    <Notice message=err.notice("Error creating account").to_string() />
                                </div>
                            }
                        })
                }}

                <p class="mt-6 text-center text-sm text-gray-600">
                    "Already have an account? "
                    <A href="/signin" {..} class="text-[#4285f4] hover:underline">
                        "Sign in"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}

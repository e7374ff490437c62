//! reCAPTCHA gate rendered into the sign-in and sign-up forms. The widget is
//! an external collaborator: this component renders it once its container
//! exists and reports the token lifecycle through callbacks. It produces
//! field values only; the form schema decides whether a missing token blocks
//! submission.

use crate::app_lib::{config::AppConfig, AppError};
use leptos::prelude::*;

/// The widget script loads async; poll briefly before declaring it missing.
const WIDGET_POLL_MS: u32 = 200;
const WIDGET_POLL_LIMIT: u32 = 25;

/// Renders the CAPTCHA widget. Completion supplies the opaque token; expiry
/// fires `on_expire` so the caller can drop it (the widget enforces its own
/// validity window). If the script never becomes available the failure is
/// shown inline and the token field simply never fills, which keeps
/// submission blocked.
#[component]
pub fn CaptchaGate(on_complete: Callback<String>, on_expire: Callback<()>) -> impl IntoView {
    let container: NodeRef<leptos::html::Div> = NodeRef::new();
    let rendered = RwSignal::new(false);
    let attempts = RwSignal::new(0u32);
    let (init_error, set_init_error) = signal::<Option<AppError>>(None);

    Effect::new(move |_| {
        let attempt = attempts.get();

        let Some(element) = container.get() else {
            return;
        };

        if rendered.get_untracked() {
            return;
        }

        let config = AppConfig::load();

        match render_widget(&element, &config.recaptcha_site_key, on_complete, on_expire) {
            Ok(()) => rendered.set(true),
            Err(err) => {
                if attempt < WIDGET_POLL_LIMIT {
                    schedule_retry(attempts);
                } else {
                    set_init_error.set(Some(err));
                }
            }
        }
    });

    view! {
        <div node_ref=container class="min-h-[78px]"></div>
        {move || {
            init_error
                .get()
                .map(|err| view! { <p class="mt-1 text-sm text-red-600">{err.to_string()}</p> })
        }}
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_retry(attempts: RwSignal<u32>) {
    use gloo_timers::callback::Timeout;

    Timeout::new(WIDGET_POLL_MS, move || {
        attempts.update(|count| *count += 1);
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_retry(_attempts: RwSignal<u32>) {}

#[cfg(target_arch = "wasm32")]
fn render_widget(
    container: &web_sys::HtmlDivElement,
    site_key: &str,
    on_complete: Callback<String>,
    on_expire: Callback<()>,
) -> Result<(), AppError> {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let window =
        web_sys::window().ok_or_else(|| AppError::Config("Window not found".to_string()))?;
    let grecaptcha = Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(|| AppError::Config("reCAPTCHA script is not loaded.".to_string()))?;

    let params = Object::new();
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("sitekey"),
        &JsValue::from_str(site_key),
    );

    let complete = Closure::<dyn FnMut(JsValue)>::new(move |token: JsValue| {
        on_complete.run(token.as_string().unwrap_or_default());
    });
    let _ = Reflect::set(&params, &JsValue::from_str("callback"), complete.as_ref());

    let expired = Closure::<dyn FnMut()>::new(move || on_expire.run(()));
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("expired-callback"),
        expired.as_ref(),
    );

    let render = Reflect::get(&grecaptcha, &JsValue::from_str("render"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| AppError::Config("reCAPTCHA render API is unavailable.".to_string()))?;

    render
        .call2(&grecaptcha, container, &params)
        .map_err(|err| AppError::Config(format!("Failed to render reCAPTCHA: {err:?}")))?;

    // The widget keeps invoking these callbacks for its whole lifetime.
    complete.forget();
    expired.forget();

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn render_widget(
    _container: &web_sys::HtmlDivElement,
    _site_key: &str,
    _on_complete: Callback<String>,
    _on_expire: Callback<()>,
) -> Result<(), AppError> {
    Ok(())
}

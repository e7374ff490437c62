//! Labeled inputs bound to a `FormState` by field name: edits update the
//! value on input, blur marks the field touched, and the inline caption
//! shows the field's error once validation has produced one.

use crate::forms::FormState;
use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-[#4285f4] focus:border-[#4285f4] block w-full p-2.5";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900";

#[component]
pub fn TextField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-5">
            <label class=LABEL_CLASS for=name>
                {label}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class=INPUT_CLASS
                autocomplete=autocomplete
                placeholder=placeholder
                prop:value=move || form.with(|state| state.value(name).to_string())
                on:input=move |event| {
                    form.update(|state| state.set_field(name, event_target_value(&event)));
                }
                on:blur=move |_| form.update(|state| state.touch(name))
            />
            <FieldError form=form name=name />
        </div>
    }
}

#[component]
pub fn SelectField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="mb-5">
            <label class=LABEL_CLASS for=name>
                {label}
            </label>
            <select
                id=name
                name=name
                class=INPUT_CLASS
                on:change=move |event| {
                    form.update(|state| state.set_field(name, event_target_value(&event)));
                }
                on:blur=move |_| form.update(|state| state.touch(name))
            >
                {options
                    .iter()
                    .map(|(value, text)| {
                        view! {
                            <option
                                value=*value
                                selected=move || form.with(|state| state.value(name) == *value)
                            >
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError form=form name=name />
        </div>
    }
}

/// Inline error caption for one field; renders nothing while the field has
/// no error.
#[component]
pub fn FieldError(form: RwSignal<FormState>, name: &'static str) -> impl IntoView {
    view! {
        {move || {
            form.with(|state| state.error(name).map(str::to_string))
                .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
        }}
    }
}

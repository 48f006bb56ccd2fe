//! Field Input Component
//!
//! One labelled form control rendered from a `FieldSpec`.

use leptos::prelude::*;

use crate::sections::{FieldKind, FieldSpec};

#[component]
pub fn FieldInput(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let label = if spec.required { format!("{} *", spec.label) } else { spec.label.to_string() };

    let control = match spec.kind {
        FieldKind::Toggle => view! {
            <input
                type="checkbox"
                prop:checked=move || value.with(|v| v == "true")
                disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev).to_string())
            />
        }.into_any(),
        FieldKind::TextArea => view! {
            <textarea
                rows="3"
                prop:value=value
                disabled=disabled
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        }.into_any(),
        FieldKind::Choice(options) => view! {
            <select disabled=disabled on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options.iter().map(|opt| {
                    let opt = *opt;
                    view! { <option value=opt selected=move || value.with(|v| v == opt)>{opt}</option> }
                }).collect_view()}
            </select>
        }.into_any(),
        kind => {
            let input_type = if kind == FieldKind::Url { "url" } else { "text" };
            let input_mode = if kind == FieldKind::Number { "decimal" } else { "text" };
            view! {
                <input
                    type=input_type
                    inputmode=input_mode
                    prop:value=value
                    required=spec.required
                    disabled=disabled
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
            }.into_any()
        }
    };

    view! {
        <label class=format!("form-field field-{}", spec.key)>
            <span class="field-label">{label}</span>
            {control}
        </label>
    }
}

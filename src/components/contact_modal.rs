//! Contact Modal Component

use leptos::html;
use leptos::prelude::*;

use crate::components::can_dismiss;
use crate::models::ContactInfo;

/// Close the overlay unless the host pinned it open
fn request_close(open: RwSignal<bool>, locked: bool) {
    if can_dismiss(false, locked) {
        open.set(false);
    }
}

fn contact_row(label: &'static str, value: String, href: Option<String>) -> impl IntoView {
    (!value.trim().is_empty()).then(|| {
        let body = match href {
            Some(href) => view! { <a href=href target="_blank" rel="noopener">{value}</a> }.into_any(),
            None => view! { <span>{value}</span> }.into_any(),
        };
        view! {
            <div class="contact-row">
                <span class="contact-label">{label}</span>
                {body}
            </div>
        }
    })
}

/// Contact details overlay; renders nothing when the section is off
///
/// A `locked` modal (admin preview) ignores Escape and backdrop clicks and
/// has no close button; the host closes it through `open`.
#[component]
pub fn ContactModal(
    #[prop(into)] info: Signal<Option<ContactInfo>>,
    open: RwSignal<bool>,
    #[prop(optional)] locked: bool,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if open.get() {
            if let Some(el) = dialog_ref.get() {
                let _ = el.focus();
            }
        }
    });

    view! {
        {move || {
            let info = info.get().filter(|i| i.is_active)?;
            open.get().then(|| view! {
                <div class="modal-backdrop" class:locked=locked on:click=move |_| request_close(open, locked)>
                    <div
                        class="modal contact-modal"
                        role="dialog"
                        tabindex="-1"
                        node_ref=dialog_ref
                        on:click=|ev| ev.stop_propagation()
                        on:keydown=move |ev| {
                            if ev.key() == "Escape" {
                                request_close(open, locked);
                            }
                        }
                    >
                        {(!locked).then(|| view! {
                            <button class="modal-close" on:click=move |_| request_close(open, false)>"×"</button>
                        })}
                        <h3 class="modal-title">{info.title.clone()}</h3>
                        {contact_row("Email", info.email.clone(), info.mailto())}
                        {contact_row("Phone", info.phone.clone(), Some(format!("tel:{}", info.phone.trim())))}
                        {contact_row("WhatsApp", info.whatsapp.clone(), info.whatsapp_link())}
                        {contact_row("Instagram", info.instagram.clone(), info.instagram_link())}
                        {contact_row("Address", info.address.clone(), None)}
                        {contact_row("Hours", info.business_hours.clone(), None)}
                    </div>
                </div>
            })
        }}
    }
}

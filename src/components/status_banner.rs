//! Status Banner Component

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn StatusBannerView() -> impl IntoView {
    let status = use_app().status;

    view! {
        {move || status.current().map(|msg| {
            let status = status.clone();
            view! {
                <div class=msg.kind.class() role="status">
                    <span>{msg.text}</span>
                    <button class="status-close" on:click=move |_| status.dismiss(msg.ticket)>"×"</button>
                </div>
            }
        })}
    }
}

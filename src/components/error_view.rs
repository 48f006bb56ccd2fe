//! Full-page Error View
//!
//! Shown when a page's initial fetch fails. Stays until the user retries.

use leptos::prelude::*;

#[component]
pub fn ErrorView(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-view">
            <h2>"Something went wrong"</h2>
            <p class="error-detail">{message}</p>
            <button class="btn" on:click=move |_| on_retry.run(())>"Try again"</button>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="error-view">
            <h2>"Page not found"</h2>
            <a class="btn" href="#/">"Back to the shop"</a>
        </div>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="loading"><span class="spinner"></span>" Loading..."</div> }
}

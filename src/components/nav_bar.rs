//! Navigation Bar Component

use leptos::prelude::*;

use crate::catalog::CATEGORIES;
use crate::context::use_app;
use crate::routes::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();
    let page = ctx.page;
    let contact_open = ctx.contact_open;
    let session = ctx.session().clone();

    let link_class = move |target: Page| {
        move || if page.get() == target { "nav-link active" } else { "nav-link" }
    };

    view! {
        <header class="nav-bar">
            <a class="brand" href="#/">"Trackside Toys"</a>
            <nav class="nav-links">
                <a class=link_class(Page::Home) href="#/">"Home"</a>
                <a class=link_class(Page::Category(None)) href="#/shop">"Shop all"</a>
                {CATEGORIES.iter().map(|c| {
                    let target = Page::Category(Some(c.slug.to_string()));
                    let href = format!("#{}", target.to_path());
                    view! { <a class=link_class(target) href=href>{c.name}</a> }
                }).collect_view()}
            </nav>
            <div class="nav-actions">
                <button class="btn ghost" on:click=move |_| contact_open.set(true)>"Contact"</button>
                {move || if session.signed_in() {
                    let class = if page.get().is_admin() { "btn ghost active" } else { "btn ghost" };
                    view! { <a class=class href="#/admin/studio">"Admin"</a> }.into_any()
                } else {
                    view! { <a class="btn ghost" href="#/login">"Sign in"</a> }.into_any()
                }}
            </div>
        </header>
    }
}

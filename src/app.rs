//! Storefront App
//!
//! Root component: navigation, status banner, current page, contact modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    AdminShell, CategoryPage, ContactModal, HomePage, LoginPage, NavBar, NotFound, ProductPage,
    StatusBannerView,
};
use crate::context::AppContext;
use crate::routes::{HashNavigator, Page};
use crate::settings::AppSettings;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppSettings::from_env());
    provide_context(ctx.clone());

    let page = ctx.page;
    let contact_open = ctx.contact_open;
    let navigator = HashNavigator::new(page);
    // back/forward buttons and plain `#/...` links
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        navigator.show(HashNavigator::current_page());
    });

    // Contact info backs the modal on every page
    {
        let contact = ctx.contact.clone();
        spawn_local(async move {
            if let Err(e) = contact.load().await {
                log::warn!("contact info unavailable: {}", e);
            }
        });
    }
    let contact = ctx.contact.clone();

    view! {
        <div class="app-layout">
            <NavBar />
            <StatusBannerView />

            <main class="page">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Category(slug) => view! { <CategoryPage slug=slug /> }.into_any(),
                    Page::Product(id) => view! { <ProductPage id=id /> }.into_any(),
                    Page::Login => view! { <LoginPage /> }.into_any(),
                    Page::Admin(tab) => view! { <AdminShell tab=tab /> }.into_any(),
                    Page::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>

            <ContactModal
                info=Signal::derive(move || contact.canonical())
                open=contact_open
            />

            <footer class="site-footer">
                <span>"© Trackside Toys"</span>
                <button class="link-btn" on:click=move |_| contact_open.set(true)>"Contact us"</button>
            </footer>
        </div>
    }
}

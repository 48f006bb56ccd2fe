//! Admin Shell
//!
//! Tab bar and sign-out for the admin area. Without a session it only
//! offers the way to the login page.

use leptos::prelude::*;

use crate::components::{ContactAdmin, StudioAdmin, TrendingAdmin};
use crate::context::use_app;
use crate::routes::{AdminTab, Page};
use crate::status::StatusKind;

#[component]
pub fn AdminShell(tab: AdminTab) -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session().clone();
    let api = ctx.api.clone();
    let status = ctx.status.clone();

    let signed_in = {
        let session = session.clone();
        move || session.signed_in()
    };

    let greeting = move || {
        session
            .user()
            .map(|u| format!("Signed in as {}", if u.name.is_empty() { u.email } else { u.name }))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=signed_in
            fallback=|| view! {
                <div class="error-view">
                    <h2>"Admins only"</h2>
                    <p>"Sign in to manage the storefront sections."</p>
                    <a class="btn primary" href="#/login">"Sign in"</a>
                </div>
            }
        >
            <div class="admin-shell">
                <header class="admin-header">
                    <nav class="admin-tabs">
                        {AdminTab::ALL.into_iter().map(|t| view! {
                            <a
                                class=if t == tab { "admin-tab active" } else { "admin-tab" }
                                href=format!("#{}", Page::Admin(t).to_path())
                            >
                                {t.label()}
                            </a>
                        }).collect_view()}
                    </nav>
                    <div class="admin-user">
                        <span>{greeting.clone()}</span>
                        <button class="btn ghost" on:click={
                            let (api, status) = (api.clone(), status.clone());
                            move |_| {
                                api.logout();
                                status.flash(StatusKind::Info, "Signed out");
                            }
                        }>"Sign out"</button>
                    </div>
                </header>
                {match tab {
                    AdminTab::Studio => view! { <StudioAdmin /> }.into_any(),
                    AdminTab::Trending => view! { <TrendingAdmin /> }.into_any(),
                    AdminTab::Contact => view! { <ContactAdmin /> }.into_any(),
                }}
            </div>
        </Show>
    }
}

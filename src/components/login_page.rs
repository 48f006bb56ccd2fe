//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::routes::{AdminTab, Page};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            set_submitting.set(true);
            set_error.set(None);

            let ctx = ctx.clone();
            let (email, password) = (email.get_untracked(), password.get_untracked());
            spawn_local(async move {
                match ctx.api.login(&email, &password).await {
                    Ok(credentials) => {
                        log::info!("signed in as {}", credentials.user.email);
                        let _ = set_password.try_set(String::new());
                        ctx.status.success(format!("Welcome back, {}", credentials.user.name));
                        ctx.go(Page::Admin(AdminTab::Studio));
                    }
                    Err(e) => {
                        log::warn!("login failed: {}", e);
                        let _ = set_error.try_set(Some(e.to_string()));
                    }
                }
                let _ = set_submitting.try_set(false);
            });
        }
    };

    let signed_in = {
        let session = ctx.session().clone();
        move || session.signed_in()
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Admin sign in"</h1>
                <Show when=signed_in>
                    <p class="login-note">
                        "You are already signed in. "
                        <a href="#/admin/studio">"Go to the dashboard"</a>
                    </p>
                </Show>
                <label>
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button class="btn primary" type="submit" disabled=submitting>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

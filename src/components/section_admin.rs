//! Section Admin Screens
//!
//! One screen per storefront section. Each pairs the config form with the
//! item list and can render the working copy through the public component.

use leptos::prelude::*;

use crate::collection::CollectionStore;
use crate::components::{CollectionAdmin, ConfigForm, ContactModal, StudioShowcase, TrendingGrid};
use crate::config_editor::ConfigEditor;
use crate::context::use_app;
use crate::models::{StudioConfig, StudioVideo, TrendingConfig, TrendingVideo};
use crate::sections::{studio, trending};

#[component]
fn PreviewToggle(preview: RwSignal<bool>) -> impl IntoView {
    view! {
        <button class="btn ghost preview-toggle" on:click=move |_| preview.update(|p| *p = !*p)>
            {move || if preview.get() { "Hide preview" } else { "Preview" }}
        </button>
    }
}

#[component]
pub fn StudioAdmin() -> impl IntoView {
    let ctx = use_app();
    let editor = ConfigEditor::<StudioConfig>::new(ctx.api.clone(), studio::CONFIG);
    let store = CollectionStore::<StudioVideo>::new(ctx.api.clone(), studio::ENDPOINTS);
    let preview = RwSignal::new(false);

    let config = {
        let editor = editor.clone();
        Signal::derive(move || editor.draft())
    };
    let items = {
        let store = store.clone();
        Signal::derive(move || store.items())
    };

    view! {
        <div class="section-admin">
            <PreviewToggle preview=preview />
            <Show when=move || preview.get()>
                <div class="preview-frame">
                    <StudioShowcase config=config items=items />
                </div>
            </Show>
            <ConfigForm editor=editor status=ctx.status.clone() heading="Studio Showcase" />
            <CollectionAdmin store=store status=ctx.status.clone() />
        </div>
    }
}

#[component]
pub fn TrendingAdmin() -> impl IntoView {
    let ctx = use_app();
    let editor = ConfigEditor::<TrendingConfig>::new(ctx.api.clone(), trending::CONFIG);
    let store = CollectionStore::<TrendingVideo>::new(ctx.api.clone(), trending::ENDPOINTS);
    let preview = RwSignal::new(false);

    let config = {
        let editor = editor.clone();
        Signal::derive(move || editor.draft())
    };
    let items = {
        let store = store.clone();
        Signal::derive(move || store.items())
    };

    view! {
        <div class="section-admin">
            <PreviewToggle preview=preview />
            <Show when=move || preview.get()>
                <div class="preview-frame">
                    <TrendingGrid config=config items=items />
                </div>
            </Show>
            <ConfigForm editor=editor status=ctx.status.clone() heading="Hot Drops" />
            <CollectionAdmin store=store status=ctx.status.clone() />
        </div>
    }
}

#[component]
pub fn ContactAdmin() -> impl IntoView {
    let ctx = use_app();
    let editor = ctx.contact.clone();
    let preview = RwSignal::new(false);

    let info = {
        let editor = editor.clone();
        Signal::derive(move || editor.draft())
    };

    view! {
        <div class="section-admin">
            <PreviewToggle preview=preview />
            <div class="preview-frame">
                <ContactModal info=info open=preview locked=true />
            </div>
            <ConfigForm editor=editor status=ctx.status.clone() heading="Contact details" />
        </div>
    }
}

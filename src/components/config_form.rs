//! Config Form
//!
//! Editor for a section's singleton config: field edits stay local until
//! Save; Reset restores server defaults after a confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ConfirmModal, ErrorView, FieldInput, Loading};
use crate::config_editor::{ConfigEditor, LoadState};
use crate::sections::ConfigSchema;
use crate::status::StatusBanner;

fn load_config<C: ConfigSchema>(editor: ConfigEditor<C>) {
    spawn_local(async move {
        // failure lands in the editor's load state
        let _ = editor.load().await;
    });
}

#[component]
pub fn ConfigForm<C: ConfigSchema>(
    editor: ConfigEditor<C>,
    status: StatusBanner,
    heading: &'static str,
) -> impl IntoView {
    let confirm_reset = RwSignal::new(false);

    load_config(editor.clone());

    let retry = {
        let editor = editor.clone();
        Callback::new(move |_| load_config(editor.clone()))
    };

    let busy = {
        let editor = editor.clone();
        Signal::derive(move || editor.is_busy())
    };
    let dirty = {
        let editor = editor.clone();
        Signal::derive(move || editor.is_dirty())
    };

    let save = {
        let (editor, status) = (editor.clone(), status.clone());
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let (editor, status) = (editor.clone(), status.clone());
            spawn_local(async move {
                match editor.save_draft().await {
                    Ok(_) => status.success(format!("{} saved", heading)),
                    Err(e) => status.error(&e),
                }
            });
        }
    };

    let reset = {
        let (editor, status) = (editor.clone(), status.clone());
        Callback::new(move |_| {
            let (editor, status) = (editor.clone(), status.clone());
            spawn_local(async move {
                match editor.reset().await {
                    Ok(_) => status.success(format!("{} restored to defaults", heading)),
                    Err(e) => status.error(&e),
                }
                let _ = confirm_reset.try_set(false);
            });
        })
    };

    let fields = {
        let editor = editor.clone();
        move || {
            C::FIELDS
                .iter()
                .map(|spec| {
                    let key = spec.key;
                    let (read, write) = (editor.clone(), editor.clone());
                    view! {
                        <FieldInput
                            spec=*spec
                            value=Signal::derive(move || read.draft().map(|d| d.field(key)).unwrap_or_default())
                            on_change=Callback::new(move |value: String| write.edit(|d| d.set_field(key, value)))
                            disabled=busy
                        />
                    }
                })
                .collect_view()
        }
    };

    let discard = {
        let editor = editor.clone();
        move |_: leptos::ev::MouseEvent| editor.discard()
    };

    view! {
        <section class="config-form">
            {move || match editor.state() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorView message=message on_retry=retry /> }.into_any(),
                LoadState::Ready => view! {
                    <form class="admin-form" on:submit=save.clone()>
                        <div class="admin-list-header">
                            <h2>{heading}</h2>
                            <Show when=move || dirty.get()>
                                <span class="admin-tag unsaved">"Unsaved changes"</span>
                            </Show>
                        </div>
                        {fields()}
                        <div class="form-actions">
                            <button
                                type="button"
                                class="danger"
                                disabled=busy
                                on:click=move |_| confirm_reset.set(true)
                            >"Reset to defaults"</button>
                            <button
                                type="button"
                                disabled=move || busy.get() || !dirty.get()
                                on:click=discard.clone()
                            >"Discard"</button>
                            <button class="btn primary" type="submit" disabled=move || busy.get() || !dirty.get()>
                                {move || if busy.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                }.into_any(),
            }}

            <ConfirmModal
                open=confirm_reset
                title=format!("Reset {}?", heading)
                message="Every field goes back to the default values. This cannot be undone.".to_string()
                confirm_label="Reset"
                processing=busy
                on_confirm=reset
                on_cancel=Callback::new(move |_| confirm_reset.set(false))
            />
        </section>
    }
}

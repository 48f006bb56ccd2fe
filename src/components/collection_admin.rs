//! Collection Admin
//!
//! List editor shared by the ordered sections: add, edit, delete behind a
//! confirmation, and up/down reordering. The form is driven by the item's
//! `FIELDS` table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::collection::{CollectionStore, Direction};
use crate::components::{ConfirmModal, ErrorView, FieldInput, Loading};
use crate::config_editor::LoadState;
use crate::sections::ItemSchema;
use crate::status::StatusBanner;

/// Item draft being edited; `id` is `None` while adding
#[derive(Clone, PartialEq)]
struct Draft<T> {
    id: Option<String>,
    item: T,
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fetch the list and track the outcome for the retry view
fn load_items<T: ItemSchema>(store: CollectionStore<T>, state: RwSignal<LoadState>) {
    state.set(LoadState::Loading);
    spawn_local(async move {
        let next = match store.load().await {
            Ok(()) => LoadState::Ready,
            Err(e) => {
                log::error!("loading {} list failed: {}", T::NOUN, e);
                LoadState::Failed(e.to_string())
            }
        };
        let _ = state.try_set(next);
    });
}

#[component]
pub fn CollectionAdmin<T: ItemSchema>(store: CollectionStore<T>, status: StatusBanner) -> impl IntoView {
    let state = RwSignal::new(LoadState::Loading);
    let draft = RwSignal::new(Option::<Draft<T>>::None);
    let pending_delete = RwSignal::new(Option::<(String, String)>::None);

    load_items(store.clone(), state);

    let retry = {
        let store = store.clone();
        Callback::new(move |_| load_items(store.clone(), state))
    };

    let busy = {
        let store = store.clone();
        Signal::derive(move || store.is_busy())
    };

    // ========================
    // Actions
    // ========================

    let move_item = {
        let (store, status) = (store.clone(), status.clone());
        move |id: String, direction: Direction| {
            let (store, status) = (store.clone(), status.clone());
            spawn_local(async move {
                if let Err(e) = store.reorder(&id, direction).await {
                    status.error(&e);
                }
            });
        }
    };

    let submit = {
        let (store, status) = (store.clone(), status.clone());
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(Draft { id, item }) = draft.get_untracked() else {
                return;
            };
            let (store, status) = (store.clone(), status.clone());
            spawn_local(async move {
                let result = match id.as_deref() {
                    Some(id) => store.update(id, item).await,
                    None => store.add(item).await,
                };
                match result {
                    Ok(saved) => {
                        status.success(format!("Saved \"{}\"", saved.title()));
                        let _ = draft.try_set(None);
                    }
                    Err(e) => status.error(&e),
                }
            });
        }
    };

    let confirm_delete = {
        let (store, status) = (store.clone(), status.clone());
        Callback::new(move |_| {
            let Some((id, title)) = pending_delete.get_untracked() else {
                return;
            };
            let (store, status) = (store.clone(), status.clone());
            spawn_local(async move {
                match store.remove(&id).await {
                    Ok(()) => status.success(format!("Deleted \"{}\"", title)),
                    Err(e) => status.error(&e),
                }
                let _ = pending_delete.try_set(None);
            });
        })
    };

    // ========================
    // Views
    // ========================

    let rows = {
        let store = store.clone();
        move || {
            let items = store.items();
            let last = items.len().saturating_sub(1);
            items
                .into_iter()
                .enumerate()
                .map(|(pos, item)| {
                    let id = item.id().to_string();
                    let title = item.title().to_string();
                    let delete_target = (id.clone(), title.clone());
                    let (up_id, down_id, edit_item) = (id.clone(), id, item.clone());
                    let (move_up, move_down) = (move_item.clone(), move_item.clone());
                    view! {
                        <li class="admin-row" class:inactive=!item.is_active()>
                            <img class="admin-thumb" src=item.thumbnail().to_string() alt="" />
                            <div class="admin-row-info">
                                <span class="admin-row-title">{title}</span>
                                {(!item.is_active()).then(|| view! { <span class="admin-tag">"Hidden"</span> })}
                            </div>
                            <div class="admin-row-actions">
                                <button
                                    title="Move up"
                                    disabled=move || pos == 0 || busy.get()
                                    on:click=move |_| move_up(up_id.clone(), Direction::Up)
                                >"↑"</button>
                                <button
                                    title="Move down"
                                    disabled=move || pos == last || busy.get()
                                    on:click=move |_| move_down(down_id.clone(), Direction::Down)
                                >"↓"</button>
                                <button on:click=move |_| {
                                    draft.set(Some(Draft { id: Some(edit_item.id().to_string()), item: edit_item.clone() }))
                                }>"Edit"</button>
                                <button class="danger" on:click=move |_| pending_delete.set(Some(delete_target.clone()))>
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                })
                .collect_view()
        }
    };

    // re-render the form only when it opens, closes or switches target
    let form_mode = Memo::new(move |_| draft.with(|d| d.as_ref().map(|d| d.id.clone())));

    let form = move || {
        form_mode.get().map(|editing| {
            let is_edit = editing.is_some();
            let heading = if is_edit { format!("Edit {}", T::NOUN) } else { format!("New {}", T::NOUN) };
            let fields = T::FIELDS
                .iter()
                .map(|spec| {
                    let key = spec.key;
                    view! {
                        <FieldInput
                            spec=*spec
                            value=Signal::derive(move || {
                                draft.with(|d| d.as_ref().map(|d| d.item.field(key)).unwrap_or_default())
                            })
                            on_change=Callback::new(move |value: String| {
                                draft.update(|d| {
                                    if let Some(d) = d.as_mut() {
                                        d.item.set_field(key, value);
                                    }
                                })
                            })
                            disabled=busy
                        />
                    }
                })
                .collect_view();
            view! {
                <form class="admin-form" on:submit=submit.clone()>
                    <h3>{heading}</h3>
                    {fields}
                    <div class="form-actions">
                        <button type="button" disabled=busy on:click=move |_| draft.set(None)>"Cancel"</button>
                        <button class="btn primary" type="submit" disabled=busy>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            }
        })
    };

    let noun = capitalize(T::NOUN);

    view! {
        <section class="collection-admin">
            {move || match state.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorView message=message on_retry=retry /> }.into_any(),
                LoadState::Ready => {
                    let rows = rows.clone();
                    let noun = noun.clone();
                    view! {
                        <div class="admin-list-header">
                            <h2>{format!("{}s", noun)}</h2>
                            <button
                                class="btn"
                                on:click=move |_| draft.set(Some(Draft { id: None, item: T::blank() }))
                            >
                                {format!("Add {}", T::NOUN)}
                            </button>
                        </div>
                        {form.clone()}
                        <ul class="admin-list">{rows}</ul>
                    }.into_any()
                }
            }}

            <ConfirmModal
                open=Signal::derive(move || pending_delete.with(|p| p.is_some()))
                title=Signal::derive(move || format!("Delete {}?", T::NOUN))
                message=Signal::derive(move || {
                    pending_delete.with(|p| {
                        p.as_ref()
                            .map(|(_, title)| format!("\"{}\" will be removed from the storefront.", title))
                            .unwrap_or_default()
                    })
                })
                confirm_label="Delete"
                processing=busy
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_noun() {
        assert_eq!(capitalize("video"), "Video");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}

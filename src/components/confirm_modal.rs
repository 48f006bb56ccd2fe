//! Confirm Modal Component
//!
//! Blocks a destructive action (delete, reset) until the user confirms.

use leptos::html;
use leptos::prelude::*;

/// Escape / backdrop dismissal is allowed unless a request is running or
/// the host locked the modal (preview mode)
pub(crate) fn can_dismiss(processing: bool, locked: bool) -> bool {
    !processing && !locked
}

/// Modal confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `processing` - True while the confirmed action's request is in flight;
///   both buttons are disabled and a spinner replaces the confirm label
/// * `on_confirm` / `on_cancel` - Button callbacks
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into, default = "Confirm".to_string())] confirm_label: String,
    #[prop(into)] processing: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Div>::new();

    // focus the dialog so Escape reaches it
    Effect::new(move |_| {
        if open.get() {
            if let Some(el) = dialog_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let dismiss = move || {
        if can_dismiss(processing.get_untracked(), false) {
            on_cancel.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| dismiss()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    node_ref=dialog_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| {
                        if ev.key() == "Escape" {
                            dismiss();
                        }
                    }
                >
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <p class="modal-message">{move || message.get()}</p>
                    <div class="modal-actions">
                        <button
                            class="btn secondary"
                            disabled=move || processing.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn danger"
                            disabled=move || processing.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {
                                let confirm_label = confirm_label.clone();
                                move || if processing.get() {
                                    view! { <span class="spinner"></span>" Working..." }.into_any()
                                } else {
                                    confirm_label.clone().into_any()
                                }
                            }
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_rules() {
        assert!(can_dismiss(false, false));
        assert!(!can_dismiss(true, false));
        assert!(!can_dismiss(false, true));
        assert!(!can_dismiss(true, true));
    }
}

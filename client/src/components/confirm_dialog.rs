//! Destructive-action confirmation modal.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional)] busy: Option<RwSignal<bool>>,
) -> impl IntoView {
    let busy = move || busy.is_some_and(|b| b.get());
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">"This action cannot be undone. This will permanently delete it."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=busy on:click=move |_| on_confirm.run(())>
                        {move || if busy() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

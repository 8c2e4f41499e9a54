//! Transient notification stack.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::ui::Toast;

/// Renders `ctx.toasts`; clicking a toast dismisses it early.
#[component]
pub fn ToastHost(ctx: AppContext) -> impl IntoView {
    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || ctx.toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--error=toast.notice.is_error()
                            on:click=move |_| ctx.toasts.update(|t| t.dismiss(id))
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

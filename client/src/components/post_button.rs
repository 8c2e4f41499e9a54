//! Floating "ask" button on community pages.

use leptos::prelude::*;

#[component]
pub fn PostButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <button class="post-button" on:click=move |_| on_click.run(()) title="Ask a doubt">
            <span class="post-button__plus">"+"</span>
            <span class="post-button__label">"Ask a Doubt"</span>
        </button>
    }
}

//! Top bar: brand, search box, and the login/logout control.

use leptos::prelude::*;

use peerpoint::forum::Notice;
use peerpoint::forum::format::initials;

use crate::app::AppContext;

#[component]
pub fn Header(ctx: AppContext) -> impl IntoView {
    let name = move || ctx.auth.with(|a| a.display_name().unwrap_or_default().to_owned());
    let on_logout = move |_| {
        ctx.logout();
        ctx.notify(Notice::success("Logged out"));
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                <span class="header__logo">"P"</span>
                <span class="header__name">"PeerPoint"</span>
            </a>
            // Visual only; there is no search endpoint.
            <input class="header__search" type="search" placeholder="Search doubts, users, topics..." />
            <Show
                when=move || ctx.auth.with(|a| a.is_authenticated())
                fallback=|| view! { <a class="btn header__login" href="/login">"Login"</a> }
            >
                <span class="header__user">
                    <span class="avatar">{move || initials(&name())}</span>
                    <span class="header__user-name">{name}</span>
                </span>
                <button class="btn header__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}

//! Community list with an "All" entry and a static stats panel.

use leptos::prelude::*;

use peerpoint::forum::ALL_COMMUNITIES;
use peerpoint::types::Page;

use crate::util::community::{STATS, community_href, style_for};

/// Selecting an entry writes its name into `selected`. Each entry also links
/// to the community's own page.
#[component]
pub fn CommunitySidebar(#[prop(into)] communities: Signal<Vec<Page>>, selected: RwSignal<String>) -> impl IntoView {
    let entries = move || {
        std::iter::once(ALL_COMMUNITIES.to_owned())
            .chain(communities.get().into_iter().map(|p| p.name))
            .map(|name| {
                let style = style_for(&name);
                let is_selected = {
                    let name = name.clone();
                    move || selected.with(|s| *s == name)
                };
                let on_select = {
                    let name = name.clone();
                    move |_| selected.set(name.clone())
                };
                let page_link = (name != ALL_COMMUNITIES).then(|| {
                    let href = community_href(&name);
                    view! { <a class="sidebar__open" href=href title="Open community">"↗"</a> }
                });
                view! {
                    <li class="sidebar__entry">
                        <button class="sidebar__item" class:sidebar__item--active=is_selected on:click=on_select>
                            <span class=format!("sidebar__icon {}", style.color_class)>{style.icon}</span>
                            <span class="sidebar__label">{name}</span>
                        </button>
                        {page_link}
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar">
            <h2 class="sidebar__title">"Communities"</h2>
            <ul class="sidebar__list">{entries}</ul>
            <div class="sidebar__stats">
                <h3>"Your Stats"</h3>
                {STATS
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat">
                                <span class="stat__label">{*label}</span>
                                <span class="stat__value">{*value}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </aside>
    }
}

//! Home route: splash, community sidebar, and the "Latest Doubts" feed.

use leptos::prelude::*;

use peerpoint::forum::{ALL_COMMUNITIES, HomeFeed, Notice};
use peerpoint::types::Question;

use crate::app::AppContext;
use crate::components::community_sidebar::CommunitySidebar;
use crate::components::doubt_card::DoubtCard;
use crate::components::header::Header;
use crate::components::particle_background::ParticleBackground;
use crate::components::splash_screen::SplashScreen;
use crate::pages::reload_on_refresh;
use crate::util::generation::RequestGeneration;

#[component]
pub fn IndexPage(ctx: AppContext) -> impl IntoView {
    let show_splash = RwSignal::new(true);
    let feed = RwSignal::new(HomeFeed::default());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(ALL_COMMUNITIES.to_owned());

    let generation = StoredValue::new(RequestGeneration::default());

    let load = move || {
        let api = ctx.api();
        let Some(ticket) = generation.try_update_value(RequestGeneration::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = HomeFeed::load(&api).await;
            if !generation.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(fresh) => feed.set(fresh),
                Err(e) => {
                    leptos::logging::warn!("home feed load failed: {e}");
                    ctx.notify(Notice::error("Failed to load questions"));
                }
            }
            loading.set(false);
        });
    };
    load();
    reload_on_refresh(ctx, load);

    let communities = Signal::derive(move || feed.with(|f| f.communities.clone()));
    let visible = move || -> Vec<Question> { feed.with(|f| selected.with(|s| f.filtered(s).into_iter().cloned().collect())) };

    view! {
        <Show
            when=move || !show_splash.get()
            fallback=move || view! { <SplashScreen on_complete=Callback::new(move |()| show_splash.set(false)) /> }
        >
            <ParticleBackground />
            <Header ctx=ctx />
            <div class="layout">
                <CommunitySidebar communities=communities selected=selected />
                <section class="feed">
                    <h1 class="feed__title">"Latest Doubts"</h1>
                    <p class="feed__subtitle">{move || selected.with(|s| HomeFeed::subtitle(s))}</p>
                    {move || {
                        if loading.get() {
                            return view! { <p class="feed__loading">"Loading doubts..."</p> }.into_any();
                        }
                        let items = visible();
                        if items.is_empty() {
                            return view! { <p class="feed__empty">"No doubts found in this community"</p> }.into_any();
                        }
                        view! {
                            <div class="feed__list">
                                {items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, question)| view! { <DoubtCard question=question index=index /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }}
                </section>
            </div>
        </Show>
    }
}

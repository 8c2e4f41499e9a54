//! Community route (`/page/:subject`): header, question list, post dialog.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use peerpoint::forum::{CommunityFeed, Notice};

use crate::app::AppContext;
use crate::components::doubt_card::DoubtCard;
use crate::components::header::Header;
use crate::components::post_button::PostButton;
use crate::components::post_question_dialog::PostQuestionDialog;
use crate::pages::reload_on_refresh;
use crate::util::community::style_for;
use crate::util::generation::RequestGeneration;

#[component]
pub fn SubjectPage(ctx: AppContext) -> impl IntoView {
    let params = use_params_map();
    let subject = move || params.with(|p| p.get("subject").unwrap_or_default());

    let feed = RwSignal::new(None::<CommunityFeed>);
    let loading = RwSignal::new(true);
    let show_dialog = RwSignal::new(false);

    let generation = StoredValue::new(RequestGeneration::default());

    let fetch = move |name: String| {
        let api = ctx.api();
        let Some(ticket) = generation.try_update_value(RequestGeneration::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = CommunityFeed::load(&api, &name).await;
            if !generation.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(fresh) => feed.set(Some(fresh)),
                Err(e) => {
                    leptos::logging::warn!("community load failed for {name}: {e}");
                    feed.set(None);
                    ctx.notify(Notice::error("Failed to load page data"));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || {
        let name = subject();
        loading.set(true);
        fetch(name);
    });
    reload_on_refresh(ctx, move || fetch(params.with_untracked(|p| p.get("subject").unwrap_or_default())));

    let on_open = Callback::new(move |()| show_dialog.set(true));
    let on_close = Callback::new(move |()| show_dialog.set(false));

    let body = move || {
        if loading.get() {
            return view! { <p class="community__loading">"Loading..."</p> }.into_any();
        }
        let Some(current) = feed.get() else {
            return view! {
                <div class="community__missing">
                    <h2>"Page not found"</h2>
                    <a class="btn" href="/">"Back to All Communities"</a>
                </div>
            }
            .into_any();
        };

        let style = style_for(&current.page.name);
        let stats = current.stats_line();
        let empty_title = format!("No questions yet in {}", current.page.name);
        let questions = current.questions;
        view! {
            <div class="community">
                <a class="community__back" href="/">"← Back to All Communities"</a>
                <header class="community__header">
                    <span class=format!("community__icon {}", style.color_class)>{style.icon}</span>
                    <div>
                        <h1 class="community__name">{current.page.name}</h1>
                        <p class="community__description">{current.page.description}</p>
                        <p class="community__stats">{stats}</p>
                    </div>
                </header>
                {if questions.is_empty() {
                    view! {
                        <div class="community__empty">
                            <p class="community__empty-title">{empty_title}</p>
                            <p class="community__empty-hint">"Be the first to ask a question!"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="feed__list">
                            {questions
                                .into_iter()
                                .enumerate()
                                .map(|(index, question)| view! { <DoubtCard question=question index=index /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
                <PostButton on_click=on_open />
            </div>
        }
        .into_any()
    };

    view! {
        <Header ctx=ctx />
        {body}
        <Show when=move || show_dialog.get()>
            <PostQuestionDialog ctx=ctx feed=feed on_close=on_close />
        </Show>
    }
}

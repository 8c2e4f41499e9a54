//! Question card used by the home feed and community pages.
//!
//! DESIGN
//! ======
//! Upvotes are presentation only: a stable per-question count plus a local
//! toggle, never sent to the server.

use leptos::prelude::*;
use time::OffsetDateTime;

use peerpoint::forum::format::{is_hot, mock_upvotes, relative_time, reply_count_label, toggle_upvote};
use peerpoint::types::Question;

use crate::util::community::{community_href, style_for};

/// A clickable card linking to `/question/:id`. `index` is the card's position
/// in its list; the first two get a "Hot" badge.
#[component]
pub fn DoubtCard(question: Question, index: usize) -> impl IntoView {
    let upvoted = RwSignal::new(false);
    let votes = RwSignal::new(mock_upvotes(&question.id));
    let on_upvote = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let (next, count) = toggle_upvote(upvoted.get_untracked(), votes.get_untracked());
        upvoted.set(next);
        votes.set(count);
    };

    let href = format!("/question/{}", urlencoding::encode(&question.id));
    let tag_class = format!("doubt-card__tag {}", style_for(&question.page_name).color_class);
    let tag_href = community_href(&question.page_name);
    let posted = relative_time(&question.created_at, OffsetDateTime::now_utc());
    let replies = reply_count_label(usize::try_from(question.reply_count).unwrap_or(usize::MAX));

    view! {
        <article class="doubt-card">
            <div class="doubt-card__meta">
                <a class=tag_class href=tag_href>{question.page_name}</a>
                <span class="doubt-card__author">{question.user_name}</span>
                <span class="doubt-card__time">{posted}</span>
                {is_hot(index).then(|| view! { <span class="doubt-card__hot">"Hot"</span> })}
            </div>
            <a class="doubt-card__link" href=href>
                <h3 class="doubt-card__title">{question.title}</h3>
                <p class="doubt-card__body">{question.description}</p>
            </a>
            <div class="doubt-card__footer">
                <button
                    class="doubt-card__upvote"
                    class:doubt-card__upvote--active=move || upvoted.get()
                    on:click=on_upvote
                    aria-label="Upvote"
                >
                    "▲ "
                    {move || votes.get()}
                </button>
                <span class="doubt-card__replies">{replies}</span>
            </div>
        </article>
    }
}

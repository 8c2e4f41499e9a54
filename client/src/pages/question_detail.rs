//! Question route (`/question/:id`): the question, its replies, the reply
//! form, and author-only delete controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use time::OffsetDateTime;

use peerpoint::ForumError;
use peerpoint::forum::format::{initials, relative_time, reply_count_label};
use peerpoint::forum::{Notice, QuestionThread};

use crate::app::AppContext;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::header::Header;
use crate::pages::reload_on_refresh;
use crate::util::community::community_href;
use crate::util::generation::RequestGeneration;

/// What the open confirm dialog will delete.
#[derive(Clone, Debug, PartialEq, Eq)]
enum PendingDelete {
    Question,
    Reply(String),
}

#[component]
pub fn QuestionDetailPage(ctx: AppContext) -> impl IntoView {
    let params = use_params_map();
    let question_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let navigate = use_navigate();

    let thread = RwSignal::new(None::<QuestionThread>);
    let loading = RwSignal::new(true);
    let reply_text = RwSignal::new(String::new());
    let posting = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingDelete>);

    let generation = StoredValue::new(RequestGeneration::default());

    let fetch = move |id: String| {
        let api = ctx.api();
        let Some(ticket) = generation.try_update_value(RequestGeneration::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = QuestionThread::load(&api, &id).await;
            if !generation.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(fresh) => thread.set(Some(fresh)),
                Err(e) => {
                    leptos::logging::warn!("question load failed for {id}: {e}");
                    thread.set(None);
                    ctx.notify(Notice::error("Failed to load question"));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || {
        let id = question_id();
        loading.set(true);
        fetch(id);
    });
    reload_on_refresh(ctx, move || fetch(params.with_untracked(|p| p.get("id").unwrap_or_default())));

    let on_reply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if posting.get_untracked() {
            return;
        }
        let Some(mut current) = thread.get_untracked() else {
            ctx.notify(Notice::from_error(&ForumError::NotLoaded, "reply"));
            return;
        };
        let session = ctx.session();
        let bus = ctx.bus();
        let content = reply_text.get_untracked();
        posting.set(true);
        leptos::task::spawn_local(async move {
            match current.post_reply(&session, &bus, &content).await {
                Ok(_) => {
                    thread.set(Some(current));
                    reply_text.set(String::new());
                    ctx.notify(Notice::success("Reply posted successfully!"));
                }
                Err(e) => ctx.notify(Notice::from_error(&e, "reply")),
            }
            posting.set(false);
        });
    };

    let on_confirm = Callback::new(move |()| {
        let (Some(target), Some(mut current)) = (pending.get_untracked(), thread.get_untracked()) else {
            return;
        };
        let session = ctx.session();
        let bus = ctx.bus();
        let navigate = navigate.clone();
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match target {
                PendingDelete::Question => match current.delete_question(&session, &bus).await {
                    Ok(()) => {
                        ctx.notify(Notice::success("Question deleted successfully!"));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => ctx.notify(Notice::from_error(&e, "delete this question")),
                },
                PendingDelete::Reply(reply_id) => match current.delete_reply(&session, &bus, &reply_id).await {
                    Ok(()) => {
                        thread.set(Some(current));
                        ctx.notify(Notice::success("Reply deleted successfully!"));
                    }
                    Err(e) => ctx.notify(Notice::from_error(&e, "delete this reply")),
                },
            }
            deleting.set(false);
            pending.set(None);
        });
    });
    let on_cancel = Callback::new(move |()| pending.set(None));

    let body = move || {
        if loading.get() {
            return view! { <p class="question__loading">"Loading..."</p> }.into_any();
        }
        let Some(current) = thread.get() else {
            return view! {
                <div class="question__missing">
                    <h2>"Question not found"</h2>
                    <a class="btn" href="/">"Back to Home"</a>
                </div>
            }
            .into_any();
        };

        let now = OffsetDateTime::now_utc();
        let me = ctx.auth.with(|a| a.session.clone());
        let can_delete = current.can_delete_question(me.as_ref());
        let q = current.question.clone();
        let replies_heading = reply_count_label(current.replies.len());
        let replies = current
            .replies
            .iter()
            .map(|reply| {
                let mine = QuestionThread::can_delete_reply(reply, me.as_ref());
                let reply_id = reply.id.clone();
                view! {
                    <li class="reply">
                        <span class="avatar">{initials(&reply.user_name)}</span>
                        <div class="reply__body">
                            <div class="reply__meta">
                                <span class="reply__author">{reply.user_name.clone()}</span>
                                <span class="reply__time">{relative_time(&reply.created_at, now)}</span>
                                {mine.then(|| {
                                    view! {
                                        <button
                                            class="reply__delete"
                                            title="Delete reply"
                                            on:click=move |_| pending.set(Some(PendingDelete::Reply(reply_id.clone())))
                                        >
                                            "Delete"
                                        </button>
                                    }
                                })}
                            </div>
                            <p class="reply__content">{reply.content.clone()}</p>
                        </div>
                    </li>
                }
            })
            .collect::<Vec<_>>();
        let no_replies = current.replies.is_empty();

        view! {
            <article class="question">
                <a class="question__back" href=community_href(&q.page_name)>
                    {format!("← Back to {}", q.page_name)}
                </a>
                <header class="question__header">
                    <span class="avatar avatar--large">{initials(&q.user_name)}</span>
                    <div>
                        <span class="question__author">{q.user_name.clone()}</span>
                        <span class="question__time">{relative_time(&q.created_at, now)}</span>
                    </div>
                    {can_delete.then(|| {
                        view! {
                            <button
                                class="btn btn--danger question__delete"
                                on:click=move |_| pending.set(Some(PendingDelete::Question))
                            >
                                "Delete"
                            </button>
                        }
                    })}
                </header>
                <h1 class="question__title">{q.title}</h1>
                <p class="question__description">{q.description}</p>
            </article>
            <section class="replies">
                <h2 class="replies__title">{replies_heading}</h2>
                {if no_replies {
                    view! { <p class="replies__empty">"No replies yet. Be the first to answer!"</p> }.into_any()
                } else {
                    view! { <ul class="replies__list">{replies}</ul> }.into_any()
                }}
            </section>
        }
        .into_any()
    };

    let signed_in = move || ctx.auth.with(|a| a.is_authenticated());

    view! {
        <Header ctx=ctx />
        <div class="question-page">
            {body}
            <Show when=move || thread.with(Option::is_some)>
                <form class="reply-form" on:submit=on_reply>
                    <h3>"Your Answer"</h3>
                    <textarea
                        class="reply-form__input"
                        rows="5"
                        placeholder="Write your answer here..."
                        disabled=move || !signed_in()
                        prop:value=move || reply_text.get()
                        on:input=move |ev| reply_text.set(event_target_value(&ev))
                    ></textarea>
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <p class="reply-form__login">
                                    <a href="/login">"Please login to post a reply"</a>
                                </p>
                            }
                        }
                    >
                        <button class="btn btn--primary" type="submit" disabled=move || posting.get()>
                            {move || if posting.get() { "Posting..." } else { "Post Reply" }}
                        </button>
                    </Show>
                </form>
            </Show>
        </div>
        <Show when=move || pending.get().is_some()>
            <ConfirmDialog
                title=if pending.get_untracked() == Some(PendingDelete::Question) {
                    "Delete Question?"
                } else {
                    "Delete Reply?"
                }
                on_confirm=on_confirm
                on_cancel=on_cancel
                busy=deleting
            />
        </Show>
    }
}

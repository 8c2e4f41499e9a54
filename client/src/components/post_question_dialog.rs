//! Modal for posting a question into the current community.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use peerpoint::ForumError;
use peerpoint::forum::{CommunityFeed, Notice, QuestionDraft};

use crate::app::AppContext;

/// Signed-out submits close the dialog and go to `/login` without a request.
/// On success the page's `feed` is replaced with the reloaded one.
#[component]
pub fn PostQuestionDialog(ctx: AppContext, feed: RwSignal<Option<CommunityFeed>>, on_close: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let session = ctx.session();
        if !session.is_authenticated() {
            ctx.notify(Notice::from_error(&ForumError::LoginRequired, "post a question"));
            on_close.run(());
            navigate("/login", NavigateOptions::default());
            return;
        }
        let Some(mut current) = feed.get_untracked() else {
            ctx.notify(Notice::from_error(&ForumError::NotLoaded, "post a question"));
            return;
        };
        let draft = QuestionDraft::new(title.get_untracked(), description.get_untracked());
        if let Err(e) = draft.validate() {
            ctx.notify(Notice::from_error(&e, "post a question"));
            return;
        }
        busy.set(true);
        let bus = ctx.bus();
        leptos::task::spawn_local(async move {
            match current.post_question(&session, &bus, &draft).await {
                Ok(_) => {
                    feed.set(Some(current));
                    ctx.notify(Notice::success("Question posted successfully!"));
                    on_close.run(());
                }
                Err(e) => {
                    ctx.notify(Notice::from_error(&e, "post a question"));
                    busy.set(false);
                }
            }
        });
    };

    let community = move || feed.with(|f| f.as_ref().map(|f| f.page.name.clone()).unwrap_or_default());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Ask a Doubt"</h2>
                <p class="dialog__hint">{move || format!("Posting in {}", community())}</p>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="What's your doubt?"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__textarea"
                            rows="6"
                            placeholder="Explain what you've tried and where you're stuck..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Posting..." } else { "Post Question" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

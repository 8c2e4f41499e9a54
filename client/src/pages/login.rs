//! Login page with sign-in and registration forms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use peerpoint::forum::Notice;

use crate::app::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

#[component]
pub fn LoginPage(ctx: AppContext) -> impl IntoView {
    let mode = RwSignal::new(Mode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Already signed in, or just signed in: go home.
    Effect::new(move || {
        if ctx.auth.with(|a| a.is_authenticated()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current_mode = mode.get_untracked();
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let missing_name = current_mode == Mode::Register && name_value.is_empty();
        if missing_name || email_value.is_empty() || password_value.is_empty() {
            info.set("Please fill in all fields".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        let session = ctx.session();
        leptos::task::spawn_local(async move {
            let result = match current_mode {
                Mode::SignIn => session.login(&email_value, &password_value).await,
                Mode::Register => session.register(&name_value, &email_value, &password_value).await,
            };
            match result {
                Ok(auth) => {
                    ctx.sync_auth();
                    let greeting = match current_mode {
                        Mode::SignIn => format!("Welcome back, {}!", auth.name),
                        Mode::Register => format!("Welcome to PeerPoint, {}!", auth.name),
                    };
                    // The signed-in effect above navigates home.
                    ctx.notify(Notice::success(greeting));
                }
                Err(e) => {
                    info.set(e.message());
                    busy.set(false);
                }
            }
        });
    };

    let toggle = move |_| {
        mode.update(|m| {
            *m = match m {
                Mode::SignIn => Mode::Register,
                Mode::Register => Mode::SignIn,
            };
        });
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a class="login-card__brand" href="/">"PeerPoint"</a>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        Mode::SignIn => "Sign in to ask and answer doubts",
                        Mode::Register => "Create your student account",
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == Mode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@college.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || match (mode.get(), busy.get()) {
                            (Mode::SignIn, false) => "Sign In",
                            (Mode::SignIn, true) => "Signing in...",
                            (Mode::Register, false) => "Create Account",
                            (Mode::Register, true) => "Creating account...",
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-toggle" type="button" on:click=toggle>
                    {move || match mode.get() {
                        Mode::SignIn => "New here? Create an account",
                        Mode::Register => "Already have an account? Sign in",
                    }}
                </button>
            </div>
        </div>
    }
}

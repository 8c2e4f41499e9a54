//! Root component, routes, and the shared application context.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AppContext`] is the single bundle of shared state: the session store, the
//! refresh bus, and the reactive auth/toast mirrors. It is `Copy` and passed
//! to each page and component as a prop; nothing reads it from Leptos context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use peerpoint::forum::Notice;
use peerpoint::{ApiClient, ApiError, ClientConfig, RefreshBus, SessionStore};

use crate::components::toast::ToastHost;
use crate::pages::index::IndexPage;
use crate::pages::login::LoginPage;
use crate::pages::question_detail::QuestionDetailPage;
use crate::pages::subject::SubjectPage;
use crate::state::auth::AuthState;
use crate::state::ui::ToastState;
use crate::util::storage::BrowserStorage;

/// Shared handles for every view.
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<SessionStore<BrowserStorage>, LocalStorage>,
    bus: StoredValue<RefreshBus, LocalStorage>,
    pub auth: RwSignal<AuthState>,
    pub toasts: RwSignal<ToastState>,
}

impl AppContext {
    /// Restore any persisted session and wire up the shared handles.
    ///
    /// # Errors
    ///
    /// Fails if `config.base_url` is not an http(s) URL.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let session = SessionStore::restore(ApiClient::new(config)?, BrowserStorage);
        let auth = AuthState::new(session.session());
        Ok(Self {
            session: StoredValue::new_local(session),
            bus: StoredValue::new_local(RefreshBus::new()),
            auth: RwSignal::new(auth),
            toasts: RwSignal::new(ToastState::default()),
        })
    }

    /// The session store. Clones share state with the original.
    pub fn session(&self) -> SessionStore<BrowserStorage> {
        self.session.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.session.with_value(|s| s.api().clone())
    }

    pub fn bus(&self) -> RefreshBus {
        self.bus.get_value()
    }

    /// Copy the store's identity into the reactive mirror.
    pub fn sync_auth(&self) {
        self.auth.set(AuthState::new(self.session.with_value(|s| s.session())));
    }

    pub fn logout(&self) {
        self.session.with_value(|s| s.logout());
        self.sync_auth();
    }

    /// Show a toast and schedule its dismissal.
    pub fn notify(&self, notice: Notice) {
        if notice.is_error() {
            leptos::logging::warn!("{}", notice.message);
        }
        let toasts = self.toasts;
        let id = toasts.try_update(|t| t.push(notice)).unwrap_or_default();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::ui::TOAST_TTL_MS)).await;
            let _ = toasts.try_update(|t| t.dismiss(id));
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    }
}

/// API root baked in at build time, else the local default.
fn browser_config() -> ClientConfig {
    option_env!("PEERPOINT_API_BASE_URL").map_or_else(ClientConfig::default, ClientConfig::with_base_url)
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match AppContext::new(&browser_config()) {
        Ok(ctx) => view! {
            <Title text="PeerPoint" />
            <Shell ctx=ctx />
        }
        .into_any(),
        Err(e) => {
            leptos::logging::error!("client setup failed: {e}");
            view! { <p class="app-error">{e.message()}</p> }.into_any()
        }
    }
}

#[component]
fn Shell(ctx: AppContext) -> impl IntoView {
    view! {
        <Router>
            <ToastHost ctx=ctx />
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=move || view! { <IndexPage ctx=ctx /> } />
                    <Route path=path!("/login") view=move || view! { <LoginPage ctx=ctx /> } />
                    <Route path=path!("/page/:subject") view=move || view! { <SubjectPage ctx=ctx /> } />
                    <Route path=path!("/question/:id") view=move || view! { <QuestionDetailPage ctx=ctx /> } />
                </Routes>
            </main>
        </Router>
    }
}

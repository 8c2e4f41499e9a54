//! Animated loading screen shown before the home feed.

use leptos::prelude::*;

use crate::util::splash;

/// Counts up to 100% and then, after a short hold, runs `on_complete`.
#[component]
pub fn SplashScreen(on_complete: Callback<()>) -> impl IntoView {
    let progress = RwSignal::new(0_u8);

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(Duration::from_millis(splash::TICK_MS)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    return;
                }
                let next = splash::advance(progress.get_untracked());
                progress.set(next);
                if splash::is_full(next) {
                    break;
                }
            }
            gloo_timers::future::sleep(Duration::from_millis(splash::HOLD_MS)).await;
            if alive_task.load(Ordering::Relaxed) {
                on_complete.run(());
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    let _ = on_complete;

    view! {
        <div class="splash">
            <div class="splash__logo">"P"</div>
            <h1 class="splash__title">"PeerPoint"</h1>
            <p class="splash__tagline">"Ask doubts. Share answers. Learn together."</p>
            <div class="splash__track">
                <div class="splash__bar" style=move || splash::bar_width(progress.get())></div>
            </div>
            <span class="splash__percent">{move || format!("{}%", progress.get())}</span>
        </div>
    }
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading its view-model, reacting
//! to refresh signals) and delegates rendering details to `components`.

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::app::AppContext;

pub mod index;
pub mod login;
pub mod question_detail;
pub mod subject;

/// Run `reload` each time another view reports a change, until the calling
/// page is unmounted. Unmounting ends the task and drops its subscription.
pub(crate) fn reload_on_refresh(ctx: AppContext, reload: impl Fn() + 'static) {
    let (stop, stopped) = oneshot::channel::<()>();
    let changes = ctx.bus().subscribe();
    leptos::task::spawn_local(changes.run_until(stopped, reload));
    on_cleanup(move || {
        let _ = stop.send(());
    });
}

//! Landing Page
//!
//! Splash spinner, then a redirect based on the session flag.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::landing_target;

use super::view_lifetime;
use crate::context::{use_config, use_navigator, use_session};

#[component]
pub fn LandingPage() -> impl IntoView {
    let delay_ms = use_config().splash_delay_ms;
    let session = use_session();
    let navigator = use_navigator();
    let lifetime = view_lifetime();

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let redirected = lifetime.run(|| {
            navigator.redirect(landing_target(session.authenticated.get_untracked()));
        });
        if redirected.is_none() {
            log::debug!("landing left before splash delay elapsed");
        }
    });

    view! {
        <div class="splash">
            <div class="spinner"></div>
            <p class="muted">"Loading..."</p>
        </div>
    }
}

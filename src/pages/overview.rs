//! Overview Page
//!
//! Stat cards and charts derived from users, posts and todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::{format_rate, Overview};

use super::view_lifetime;
use crate::api;
use crate::components::{ActivityLineChart, PostsBarChart, StatCard};
use crate::context::use_config;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let config = use_config();
    let lifetime = view_lifetime();
    // None while loading
    let (overview, set_overview) = signal::<Option<Overview>>(None);

    spawn_local(async move {
        let result = api::load_overview_sources(&config).await;
        let applied = lifetime.run(|| {
            let derived = match result {
                Ok((users, posts, todos)) => {
                    log::info!(
                        "overview loaded: {} users, {} posts, {} todos",
                        users.len(),
                        posts.len(),
                        todos.len()
                    );
                    Overview::derive(&users, &posts, &todos, config.chart_limits)
                }
                Err(e) => {
                    log::warn!("failed to load overview: {}", e);
                    Overview::default()
                }
            };
            set_overview.set(Some(derived));
        });
        if applied.is_none() {
            log::debug!("overview response arrived after the page was left");
        }
    });

    let stat = move |f: fn(&Overview) -> String| {
        Signal::derive(move || overview.with(|o| o.as_ref().map(f).unwrap_or_default()))
    };

    view! {
        <section class="page">
            <header class="page-header">
                <h1>"Dashboard Overview"</h1>
                <p class="muted">"Welcome back! Here's what's happening with your data."</p>
            </header>
            <Show
                when=move || overview.with(Option::is_some)
                fallback=|| view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p class="muted">"Loading dashboard..."</p>
                    </div>
                }
            >
                <div class="stat-grid">
                    <StatCard title="Total Users" value=stat(|o| o.stats.users.to_string()) />
                    <StatCard title="Total Posts" value=stat(|o| o.stats.posts.to_string()) />
                    <StatCard title="Total Todos" value=stat(|o| o.stats.todos.to_string()) />
                    <StatCard
                        title="Completion Rate"
                        value=stat(|o| format_rate(o.completion_rate()))
                        hint="of todos completed"
                    />
                </div>
                <div class="chart-grid">
                    <ActivityLineChart data=Signal::derive(move || {
                        overview.with(|o| o.as_ref().map(|o| o.activity.clone()).unwrap_or_default())
                    }) />
                    <PostsBarChart data=Signal::derive(move || {
                        overview.with(|o| o.as_ref().map(|o| o.posts_by_user.clone()).unwrap_or_default())
                    }) />
                </div>
            </Show>
        </section>
    }
}

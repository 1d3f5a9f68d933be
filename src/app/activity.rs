use chrono::Utc;
use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::activity::recent_commits;
use crate::activity::{cached_commits, resolve_feed, time_ago, Commit, FeedError, FEED_URL};
use crate::diagnostics::LogObserver;

use super::use_i18n;

#[server(input = GetUrl)]
pub async fn get_activity_server() -> Result<Vec<Commit>, ServerFnError> {
    Ok(recent_commits(&LogObserver).await)
}

/// Latest pushed commits. Renders nothing at all when the feed is empty or unreachable.
#[component]
pub fn ActivityFeed() -> impl IntoView {
    let i18n = use_i18n();
    let commits = Resource::new(
        || (),
        |_| async move {
            if let Some(commits) = cached_commits(FEED_URL, Utc::now()) {
                return commits;
            }
            let fetched = get_activity_server()
                .await
                .map_err(|e| FeedError::Network(e.to_string()));
            let commits = resolve_feed(fetched, &LogObserver);
            // the server keeps its own copy
            #[cfg(feature = "hydrate")]
            if !commits.is_empty() {
                crate::activity::remember(FEED_URL, commits.clone(), Utc::now());
            }
            commits
        },
    );

    view! {
        <Suspense>
            {move || Suspend::new(async move {
                let commits = commits.await;
                (!commits.is_empty())
                    .then(|| {
                        view! {
                            <div class="mt-14 rounded-2xl border border-white/10 bg-white/[0.03] p-5">
                                <h2 class="mb-4 flex items-center gap-2 text-sm font-semibold uppercase tracking-widest text-emerald-300">
                                    <span class="h-2 w-2 animate-pulse rounded-full bg-emerald-400" />
                                    {move || i18n.t("github.title")}
                                </h2>
                                <ul class="max-h-96 space-y-3 overflow-y-auto text-sm">
                                    {commits
                                        .into_iter()
                                        .map(|commit| view! { <CommitRow commit /> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            })}
        </Suspense>
    }
}

#[component]
fn CommitRow(commit: Commit) -> impl IntoView {
    let i18n = use_i18n();
    let twitter = commit.twitter_share_url();
    let linkedin = commit.linkedin_share_url();
    let Commit {
        repo,
        message,
        date,
        url,
    } = commit;
    let link_class = "text-xs text-slate-500 transition-colors hover:text-cyan-300";
    view! {
        <li class="rounded-xl border border-white/5 bg-white/[0.02] p-3">
            <div class="mb-1 flex items-center gap-2">
                <span class="rounded-full bg-cyan-400/15 px-2 py-0.5 font-mono text-xs text-cyan-300">
                    {repo}
                </span>
                <span class="text-xs text-slate-500">
                    {move || time_ago(date, Utc::now(), i18n.lang())}
                </span>
            </div>
            <p class="mb-2 line-clamp-2 text-slate-300">{message}</p>
            <div class="flex items-center gap-3">
                <a href=url target="_blank" rel="noopener noreferrer" class=link_class>
                    {move || i18n.t("github.view")}
                </a>
                <a href=twitter target="_blank" rel="noopener noreferrer" class=link_class>
                    {move || i18n.t("github.share.twitter")}
                </a>
                <a href=linkedin target="_blank" rel="noopener noreferrer" class=link_class>
                    {move || i18n.t("github.share.linkedin")}
                </a>
            </div>
        </li>
    }
}

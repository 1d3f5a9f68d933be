use std::sync::LazyLock;

use std::fmt::Write;

use chrono::{DateTime, Datelike, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::{Degradation, Observer};
use crate::i18n::Language;

pub const FEED_URL: &str =
    "https://api.github.com/users/alperendemirdoger/events/public?per_page=30";
pub const FEED_LIMIT: usize = 15;
const CACHE_TTL_MINUTES: i64 = 10;

pub static GLOBAL_FEED_CACHE: LazyLock<DashMap<String, CachedFeed>> = LazyLock::new(DashMap::new);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("upstream answered {0}")]
    Status(u16),
    #[error("unexpected payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub repo: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    repo: RawRepo,
    created_at: DateTime<Utc>,
    #[serde(default)]
    payload: RawPayload,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawPayload {
    #[serde(default)]
    commits: Option<Vec<RawCommit>>,
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    message: String,
    sha: String,
}

/// Parse a public-events payload into at most [`FEED_LIMIT`] commits, newest event first.
pub fn parse_events(body: &str) -> Result<Vec<Commit>, FeedError> {
    let events = serde_json::from_str::<Vec<RawEvent>>(body)
        .map_err(|e| FeedError::Malformed(e.to_string()))?;
    Ok(flatten_push_events(events))
}

fn flatten_push_events(events: Vec<RawEvent>) -> Vec<Commit> {
    events
        .into_iter()
        .filter(|e| e.kind == "PushEvent")
        .flat_map(|event| {
            let RawEvent {
                repo,
                created_at,
                payload,
                ..
            } = event;
            let short = repo
                .name
                .split_once('/')
                .map(|(_, name)| name)
                .filter(|name| !name.is_empty())
                .unwrap_or(&repo.name)
                .to_string();
            payload
                .commits
                .unwrap_or_default()
                .into_iter()
                .map(move |c| Commit {
                    repo: short.clone(),
                    message: c.message.lines().next().unwrap_or_default().to_string(),
                    date: created_at,
                    url: format!("https://github.com/{}/commit/{}", repo.name, c.sha),
                })
        })
        .take(FEED_LIMIT)
        .collect()
}

impl Commit {
    /// Tweet intent carrying `repo: message` and the commit link.
    pub fn twitter_share_url(&self) -> String {
        format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode_component(&format!("{}: {}", self.repo, self.message)),
            encode_component(&self.url),
        )
    }

    pub fn linkedin_share_url(&self) -> String {
        format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode_component(&self.url)
        )
    }
}

/// Percent-encode a URL query component, leaving the same characters
/// untouched as JavaScript's `encodeURIComponent`.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'.'
            | b'_'
            | b'~'
            | b'!'
            | b'\''
            | b'('
            | b')'
            | b'*' => out.push(b as char),
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// Settle a fetch attempt: commits on success, an empty list (reported) otherwise.
pub fn resolve_feed(fetched: Result<Vec<Commit>, FeedError>, observer: &dyn Observer) -> Vec<Commit> {
    match fetched {
        Ok(commits) => commits,
        Err(e) => {
            observer.degraded(&Degradation::FeedUnavailable(&e));
            Vec::new()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CachedFeed {
    pub fetched_at: DateTime<Utc>,
    pub commits: Vec<Commit>,
}

impl CachedFeed {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < Duration::minutes(CACHE_TTL_MINUTES)
    }
}

pub fn cached_commits(url: &str, now: DateTime<Utc>) -> Option<Vec<Commit>> {
    let cache = &*GLOBAL_FEED_CACHE;
    cache
        .get(url)
        .filter(|c| c.is_fresh(now))
        .map(|c| c.commits.clone())
}

pub fn remember(url: &str, commits: Vec<Commit>, now: DateTime<Utc>) {
    let cache = &*GLOBAL_FEED_CACHE;
    cache.insert(
        url.to_string(),
        CachedFeed {
            fetched_at: now,
            commits,
        },
    );
}

#[cfg(feature = "ssr")]
async fn fetch_events(url: &str) -> Result<String, FeedError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("nova-sapiens/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| FeedError::Network(e.to_string()))?;
    let res = client
        .get(url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;
    if !res.status().is_success() {
        return Err(FeedError::Status(res.status().as_u16()));
    }
    res.text()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))
}

/// Recent commits from the public feed, cached for a few minutes. Never fails.
#[cfg(feature = "ssr")]
pub async fn recent_commits(observer: &dyn Observer) -> Vec<Commit> {
    if let Some(commits) = cached_commits(FEED_URL, Utc::now()) {
        return commits;
    }
    let fetched = fetch_events(FEED_URL)
        .await
        .and_then(|body| parse_events(&body));
    match &fetched {
        Ok(commits) => {
            tracing::info!(count = commits.len(), "activity feed refreshed");
            remember(FEED_URL, commits.clone(), Utc::now());
        }
        Err(e) => tracing::warn!(error = %e, "activity feed fetch failed"),
    }
    resolve_feed(fetched, observer)
}

const TR_MONTHS: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

/// Short relative time ("5 dk önce", "3h ago"); a day and month past one week.
pub fn time_ago(date: DateTime<Utc>, now: DateTime<Utc>, lang: Language) -> String {
    let mins = (now - date).num_minutes().max(0);
    let hours = mins / 60;
    let days = hours / 24;
    match lang {
        Language::Tr if mins < 60 => format!("{mins} dk önce"),
        Language::Tr if hours < 24 => format!("{hours} saat önce"),
        Language::Tr if days < 7 => format!("{days} gün önce"),
        Language::Tr => format!("{} {}", date.day(), TR_MONTHS[date.month0() as usize]),
        Language::En if mins < 60 => format!("{mins} min ago"),
        Language::En if hours < 24 => format!("{hours}h ago"),
        Language::En if days < 7 => format!("{days}d ago"),
        Language::En => date.format("%b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::Recorder;
    use chrono::TimeZone;

    const EVENTS: &str = r#"[
        {
            "type": "PushEvent",
            "repo": { "name": "alperendemirdoger/dopa-live" },
            "created_at": "2026-01-27T10:00:00Z",
            "payload": {
                "commits": [
                    { "sha": "abc123", "message": "feat: smart goals widget\n\nlong body" },
                    { "sha": "def456", "message": "fix: auth flow" }
                ]
            }
        },
        {
            "type": "WatchEvent",
            "repo": { "name": "someone/else" },
            "created_at": "2026-01-27T09:00:00Z",
            "payload": { "action": "started" }
        },
        {
            "type": "PushEvent",
            "repo": { "name": "standalone" },
            "created_at": "2026-01-26T09:00:00Z",
            "payload": { "commits": [ { "sha": "0f0f", "message": "init" } ] }
        },
        {
            "type": "PushEvent",
            "repo": { "name": "alperendemirdoger/empty" },
            "created_at": "2026-01-25T09:00:00Z",
            "payload": {}
        }
    ]"#;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_push_events() {
        let commits = parse_events(EVENTS).unwrap();
        assert_eq!(commits.len(), 3);
        assert_eq!(
            commits[0],
            Commit {
                repo: "dopa-live".to_string(),
                message: "feat: smart goals widget".to_string(),
                date: utc(2026, 1, 27, 10, 0),
                url: "https://github.com/alperendemirdoger/dopa-live/commit/abc123".to_string(),
            }
        );
        assert_eq!(commits[1].message, "fix: auth flow");
        assert_eq!(commits[2].repo, "standalone");
        assert_eq!(commits[2].url, "https://github.com/standalone/commit/0f0f");
    }

    #[test]
    fn test_feed_is_capped_after_flattening() {
        let commits = (0..8)
            .map(|i| format!(r#"{{ "sha": "s{i}", "message": "m{i}" }}"#))
            .collect::<Vec<_>>()
            .join(",");
        let event = format!(
            r#"{{ "type": "PushEvent", "repo": {{ "name": "a/b" }}, "created_at": "2026-01-01T00:00:00Z", "payload": {{ "commits": [{commits}] }} }}"#
        );
        let body = format!("[{event},{event},{event}]");
        let parsed = parse_events(&body).unwrap();
        assert_eq!(parsed.len(), FEED_LIMIT);
        assert_eq!(parsed[8].message, "m0");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component(""), "");
        assert_eq!(encode_component("abc-_.~!'()*"), "abc-_.~!'()*");
        assert_eq!(encode_component("a b&c=d/e"), "a%20b%26c%3Dd%2Fe");
        assert_eq!(encode_component("fix: ağ"), "fix%3A%20a%C4%9F");
    }

    #[test]
    fn test_share_urls() {
        let commit = &parse_events(EVENTS).unwrap()[1];
        assert_eq!(
            commit.twitter_share_url(),
            "https://twitter.com/intent/tweet?text=dopa-live%3A%20fix%3A%20auth%20flow\
             &url=https%3A%2F%2Fgithub.com%2Falperendemirdoger%2Fdopa-live%2Fcommit%2Fdef456"
        );
        assert_eq!(
            commit.linkedin_share_url(),
            "https://www.linkedin.com/sharing/share-offsite/?url=\
             https%3A%2F%2Fgithub.com%2Falperendemirdoger%2Fdopa-live%2Fcommit%2Fdef456"
        );
    }

    #[test]
    fn test_malformed_payload() {
        assert!(matches!(
            parse_events(r#"{"message": "API rate limit exceeded"}"#),
            Err(FeedError::Malformed(_))
        ));
    }

    #[test]
    fn test_failed_fetch_yields_empty_feed() {
        let recorder = Recorder::default();
        let commits = resolve_feed(
            Err(FeedError::Network("connection refused".to_string())),
            &recorder,
        );
        assert!(commits.is_empty());
        assert_eq!(recorder.kinds(), vec!["feed_unavailable"]);

        let commits = resolve_feed(parse_events("<html>"), &recorder);
        assert!(commits.is_empty());
        assert_eq!(recorder.kinds().len(), 2);
    }

    #[test]
    fn test_successful_fetch_passes_through() {
        let recorder = Recorder::default();
        let commits = resolve_feed(parse_events(EVENTS), &recorder);
        assert_eq!(commits.len(), 3);
        assert!(recorder.kinds().is_empty());
    }

    #[test]
    fn test_cache_expires() {
        let url = "test://cache-expires";
        let now = utc(2026, 1, 27, 12, 0);
        assert_eq!(cached_commits(url, now), None);

        let commits = parse_events(EVENTS).unwrap();
        remember(url, commits.clone(), now);
        assert_eq!(cached_commits(url, now + Duration::minutes(5)), Some(commits));
        assert_eq!(cached_commits(url, now + Duration::minutes(11)), None);
    }

    #[test]
    fn test_time_ago() {
        let now = utc(2026, 1, 27, 12, 0);
        assert_eq!(time_ago(utc(2026, 1, 27, 11, 55), now, Language::Tr), "5 dk önce");
        assert_eq!(time_ago(utc(2026, 1, 27, 11, 55), now, Language::En), "5 min ago");
        assert_eq!(time_ago(utc(2026, 1, 27, 9, 0), now, Language::Tr), "3 saat önce");
        assert_eq!(time_ago(utc(2026, 1, 27, 9, 0), now, Language::En), "3h ago");
        assert_eq!(time_ago(utc(2026, 1, 24, 12, 0), now, Language::Tr), "3 gün önce");
        assert_eq!(time_ago(utc(2026, 1, 24, 12, 0), now, Language::En), "3d ago");
        assert_eq!(time_ago(utc(2026, 1, 2, 12, 0), now, Language::Tr), "2 Oca");
        assert_eq!(time_ago(utc(2026, 1, 2, 12, 0), now, Language::En), "Jan 2");
        // clock skew
        assert_eq!(time_ago(utc(2026, 1, 27, 12, 5), now, Language::En), "0 min ago");
    }
}

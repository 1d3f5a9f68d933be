//! Hook for failures the site absorbs instead of surfacing.
//!
//! Missing translations, storage errors, content drift and feed outages never
//! reach the visitor. They are handed to an [`Observer`] so they still show up
//! somewhere an operator can see them.

use std::fmt;

use crate::activity::FeedError;
use crate::content::ContentError;
use crate::i18n::{Language, StorageError};

#[derive(Debug, Clone, Copy)]
pub enum Degradation<'a> {
    MissingKey { lang: Language, key: &'a str },
    StorageRead(&'a StorageError),
    StorageWrite(&'a StorageError),
    InvalidStoredLanguage(&'a str),
    ContentDrift(&'a ContentError),
    FeedUnavailable(&'a FeedError),
}

impl Degradation<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingKey { .. } => "missing_key",
            Self::StorageRead(_) => "storage_read",
            Self::StorageWrite(_) => "storage_write",
            Self::InvalidStoredLanguage(_) => "invalid_stored_language",
            Self::ContentDrift(_) => "content_drift",
            Self::FeedUnavailable(_) => "feed_unavailable",
        }
    }
}

impl fmt::Display for Degradation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { lang, key } => write!(f, "no {lang} text for key {key:?}"),
            Self::StorageRead(e) => write!(f, "language preference not restored: {e}"),
            Self::StorageWrite(e) => write!(f, "language preference not saved: {e}"),
            Self::InvalidStoredLanguage(code) => {
                write!(f, "ignoring stored language {code:?}")
            }
            Self::ContentDrift(e) => write!(f, "content drift: {e}"),
            Self::FeedUnavailable(e) => write!(f, "activity feed unavailable: {e}"),
        }
    }
}

pub trait Observer: Send + Sync {
    fn degraded(&self, event: &Degradation<'_>);
}

/// Default observer, writes through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn degraded(&self, event: &Degradation<'_>) {
        match event {
            Degradation::ContentDrift(_) => log::error!("{event}"),
            _ => log::warn!("{event}"),
        }
    }
}

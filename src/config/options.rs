// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::data::Chapter;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    /// Fail the run when any chapter could not be fetched.
    pub strict: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChapterSelector {
    All,
    Ids(Vec<Chapter>),
}

impl ChapterSelector {
    /// Sorted, duplicate-free list of chapters to visit.
    pub fn resolve(&self) -> Vec<Chapter> {
        match self {
            ChapterSelector::All => Chapter::all(),
            ChapterSelector::Ids(v) => {
                let mut v = v.clone();
                v.sort_unstable();
                v.dedup();
                v
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub chapters: ChapterSelector,
    /// URL template; `{chapter}` is replaced with the two-digit chapter.
    pub base_url: String,
    pub workers: usize,
    pub pause: Duration,
    pub timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            chapters: ChapterSelector::All,
            base_url: s!(BASE_URL),
            workers: WORKERS,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub codes_out: PathBuf,
    /// No chapters file is written when `None`.
    pub chapters_out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            codes_out: PathBuf::from(DEFAULT_CODES_FILE),
            chapters_out: None,
        }
    }
}

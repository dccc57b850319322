// src/error.rs
use std::{ io, path::PathBuf };

use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("{status} for url ({url})")]
    Http { status: StatusCode, url: String },

    #[error("{url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chapter {0} out of range (1..=99)")]
    InvalidChapter(u32),

    #[error("invalid chapter list: {0}")]
    InvalidChapterList(String),

    #[error("base URL has no {{chapter}} placeholder: {0}")]
    InvalidBaseUrl(String),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{failed} of {total} chapters failed")]
    ChaptersFailed { failed: usize, total: usize },
}

impl Error {
    /// True for errors the server answered with (4xx/5xx), as opposed to
    /// transport failures.
    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http { .. })
    }
}

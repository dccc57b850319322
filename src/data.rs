// src/data.rs
//! Row types shared by the scraper and the exporter.

use std::fmt;

use crate::error::{ Error, Result };

/// A tariff chapter, 01..=99. Displays zero-padded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chapter(u8);

impl Chapter {
    pub const FIRST: u32 = 1;
    pub const LAST: u32 = 99;

    pub fn new(n: u32) -> Result<Self> {
        if (Self::FIRST..=Self::LAST).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(Error::InvalidChapter(n))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Every chapter the site publishes, in order.
    pub fn all() -> Vec<Chapter> {
        (Self::FIRST..=Self::LAST).map(|n| Self(n as u8)).collect()
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// One harmonised code as it appears on a chapter page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodeRecord {
    pub chapter: Chapter,
    pub code: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    Failed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Failed => "failed",
        }
    }
}

/// Per-chapter summary row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterRecord {
    pub chapter: Chapter,
    pub title: String,
    pub codes: usize,
    pub status: Status,
}

/// What a single chapter page yielded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChapterPage {
    pub title: Option<String>,
    pub codes: Vec<CodeRecord>,
}

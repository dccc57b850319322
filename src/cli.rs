// src/cli.rs
use std::{ path::PathBuf, time::Duration };

use clap::{ ArgAction, Parser };
use tracing::Level;

use crate::config::consts::*;
use crate::config::options::{ AppOptions, ChapterSelector, ExportOptions, ScrapeOptions };
use crate::data::Chapter;
use crate::error::{ Error, Result };

#[derive(Parser, Debug)]
#[command(
    name = "gibraltar_tariff",
    version,
    about = "Export Gibraltar harmonised tariff codes to CSV."
)]
pub struct Cli {
    /// Output CSV for the codes
    #[arg(
        long = "codes-outfile",
        visible_alias = "outfile",
        value_name = "PATH",
        default_value = DEFAULT_CODES_FILE
    )]
    pub codes_outfile: PathBuf,

    /// Output CSV with one summary row per chapter
    #[arg(long = "chapters-outfile", value_name = "PATH")]
    pub chapters_outfile: Option<PathBuf>,

    /// Chapters to fetch, e.g. `1-5,12` (default: all, 01-99)
    #[arg(long, value_name = "LIST", value_parser = parse_chapter_list)]
    pub chapters: Option<ChapterList>,

    /// Page URL template; `{chapter}` becomes the two-digit chapter
    #[arg(long, value_name = "URL", env = "GIBRALTAR_TARIFF_URL", default_value = BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = WORKERS, value_parser = parse_workers)]
    pub workers: usize,

    /// Pause after each request, per worker
    #[arg(long, value_name = "MS", default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    #[arg(long, value_name = "SECS", default_value_t = TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Exit with an error if any chapter could not be fetched
    #[arg(long)]
    pub strict: bool,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterList(pub Vec<Chapter>);

impl Cli {
    pub fn options(&self) -> AppOptions {
        let chapters = match &self.chapters {
            Some(list) => ChapterSelector::Ids(list.0.clone()),
            None => ChapterSelector::All,
        };
        AppOptions {
            scrape: ScrapeOptions {
                chapters,
                base_url: self.base_url.clone(),
                workers: self.workers,
                pause: Duration::from_millis(self.pause_ms),
                timeout: Duration::from_secs(self.timeout_secs),
            },
            export: ExportOptions {
                codes_out: self.codes_outfile.clone(),
                chapters_out: self.chapters_outfile.clone(),
            },
            strict: self.strict,
        }
    }

    pub fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }
}

/// Parse `1-5,12,40-42` into sorted, unique chapters. Every value must be
/// within 01..=99.
pub fn parse_chapter_list(s: &str) -> Result<ChapterList> {
    let num = |part: &str| -> Result<u32> {
        let part = part.trim();
        part.parse::<u32>()
            .map_err(|_| Error::InvalidChapterList(format!("not a number: {part:?}")))
    };

    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let (a, b) = (num(a)?, num(b)?);
            if a > b { return Err(Error::InvalidChapterList(format!("invalid range: {part}"))); }
            for v in a..=b {
                out.push(Chapter::new(v)?);
            }
        } else {
            out.push(Chapter::new(num(part)?)?);
        }
    }
    if out.is_empty() {
        return Err(Error::InvalidChapterList(s!("no chapters given")));
    }
    out.sort_unstable();
    out.dedup();
    Ok(ChapterList(out))
}

fn parse_workers(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(s!("must be at least 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

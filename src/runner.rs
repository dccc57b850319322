// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::{ ChapterSource, HttpSource },
    error::{ Error, Result },
    file,
    progress::LogProgress,
    scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub codes: usize,
    pub chapters: usize,
    pub failed: usize,
}

/// Scrape the live site and export.
pub fn run(options: &AppOptions) -> Result<RunSummary> {
    let source = HttpSource::new(&options.scrape.base_url, options.scrape.timeout)?;
    run_with(&source, options)
}

/// Scrape `source` and export. Files are written even when some chapters
/// failed; `strict` turns any failure into an error afterwards.
pub fn run_with(source: &dyn ChapterSource, options: &AppOptions) -> Result<RunSummary> {
    let mut progress = LogProgress::default();
    let harvest = scrape::collect(source, &options.scrape, Some(&mut progress));

    let rows = harvest.codes();
    let codes = rows.len();
    logf!("Total codes collected: {codes}");

    let files_written = file::export(&options.export, &rows, &harvest)?;
    for path in &files_written {
        logf!("Wrote CSV to {}", path.display());
    }

    let chapters = harvest.outcomes.len();
    let failed = harvest.failed().count();
    if options.strict && failed > 0 {
        return Err(Error::ChaptersFailed { failed, total: chapters });
    }

    Ok(RunSummary { files_written, codes, chapters, failed })
}

// src/progress.rs
use crate::data::Chapter;
use crate::error::Error;

/// Progress reporting for a scrape. Frontends implement this to surface
/// status; every method defaults to a no-op.
pub trait Progress {
    /// Called at the start with the number of chapters queued.
    fn begin(&mut self, _total: usize) {}

    /// A chapter page was fetched and parsed.
    fn item_done(&mut self, _chapter: Chapter, _codes: usize) {}

    /// A chapter could not be fetched. The run carries on without it.
    fn item_failed(&mut self, _chapter: Chapter, _err: &Error) {}

    /// Called once every queued chapter has reported.
    fn finish(&mut self) {}
}

/// Writes one log line per chapter.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logd!("{total} chapters queued");
    }

    fn item_done(&mut self, chapter: Chapter, codes: usize) {
        self.done += 1;
        logf!("{}", done_line(chapter, codes));
    }

    fn item_failed(&mut self, chapter: Chapter, err: &Error) {
        self.failed += 1;
        loge!("{}", failed_line(chapter, err));
    }

    fn finish(&mut self) {
        if self.failed > 0 {
            logw!("{} of {} chapters failed", self.failed, self.total);
        } else {
            logd!("all {} chapters fetched", self.done);
        }
    }
}

/// Workers finish out of order, so each line names its chapter.
fn done_line(chapter: Chapter, codes: usize) -> String {
    format!("  -> chapter {chapter}: found {codes} codes")
}

fn failed_line(chapter: Chapter, err: &Error) -> String {
    let kind = if err.is_http() { "HTTP error" } else { "Request error" };
    format!("  !! {kind} for chapter {chapter}: {err}")
}

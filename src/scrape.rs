// src/scrape.rs
use std::{
    collections::HashSet, thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::{ consts::JITTER_MS, options::ScrapeOptions },
    core::ChapterSource,
    data::{ Chapter, ChapterPage, ChapterRecord, CodeRecord, Status },
    error::Result,
    progress::Progress,
    specs,
};

pub struct ChapterOutcome {
    pub chapter: Chapter,
    pub result: Result<ChapterPage>,
}

/// Everything a scrape produced, one outcome per chapter in chapter order.
pub struct Harvest {
    pub outcomes: Vec<ChapterOutcome>,
}

impl Harvest {
    /// All codes across chapters, duplicates removed, first occurrence kept.
    pub fn codes(&self) -> Vec<CodeRecord> {
        let mut seen: HashSet<&CodeRecord> = HashSet::new();
        self.pages()
            .flat_map(|page| page.codes.iter())
            .filter(|rec| seen.insert(*rec))
            .cloned()
            .collect()
    }

    /// One summary row per chapter, failed ones included.
    pub fn summary(&self) -> Vec<ChapterRecord> {
        self.outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(page) => ChapterRecord {
                    chapter: o.chapter,
                    title: page.title.clone().unwrap_or_default(),
                    codes: page.codes.len(),
                    status: Status::Ok,
                },
                Err(_) => ChapterRecord {
                    chapter: o.chapter,
                    title: s!(),
                    codes: 0,
                    status: Status::Failed,
                },
            })
            .collect()
    }

    pub fn failed(&self) -> impl Iterator<Item = &ChapterOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    fn pages(&self) -> impl Iterator<Item = &ChapterPage> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }
}

/// Fetch and parse every selected chapter with a small worker pool.
/// A chapter that fails is reported and recorded; it never stops the run.
pub fn collect(
    source: &dyn ChapterSource,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Harvest {
    let chapters = scrape.chapters.resolve();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(chapters.len());
    }

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<ChapterOutcome>();
    let workers = scrape.workers.min(chapters.len()).max(1);
    let mut outcomes = Vec::with_capacity(chapters.len());

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let chapters = &chapters;
            let counter = &counter;

            s.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    let Some(&chapter) = chapters.get(i) else { break };

                    logf!("Fetching chapter {chapter}...");
                    let result = source.fetch(chapter).map(|doc| specs::chapter::parse(&doc, chapter));
                    let wait = pause_after(result.is_ok(), scrape.pause, chapter);
                    if tx.send(ChapterOutcome { chapter, result }).is_err() {
                        break;
                    }
                    if !wait.is_zero() {
                        thread::sleep(wait); // be polite
                    }
                }
            });
        }
        drop(res_tx); // this thread is the sole receiver now

        for outcome in res_rx {
            if let Some(p) = progress.as_deref_mut() {
                match &outcome.result {
                    Ok(page) => p.item_done(outcome.chapter, page.codes.len()),
                    Err(e) => p.item_failed(outcome.chapter, e),
                }
            }
            outcomes.push(outcome);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    outcomes.sort_by_key(|o| o.chapter);
    Harvest { outcomes }
}

/// Wait before the next request. Only a fetched page earns the pause; a
/// failed chapter moves straight on.
fn pause_after(fetched: bool, base: Duration, chapter: Chapter) -> Duration {
    if !fetched || base.is_zero() {
        return Duration::ZERO;
    }
    let jitter = u64::from(chapter.number()) % JITTER_MS;
    base + Duration::from_millis(jitter)
}

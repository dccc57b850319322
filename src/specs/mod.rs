// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read one kind of page on the tariff site and
//! turn it into rows. Specs are pure: they take an already-fetched
//! document and never touch the network or the filesystem, so they can be
//! tested offline against captured HTML.
//!
//! ```text
//! runner → scrape::collect → ChapterSource::fetch → specs::chapter::parse
//! ```
pub mod chapter;

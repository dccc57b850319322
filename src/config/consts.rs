// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.hmcustoms.gov.gi/portal/services/tariff/print.jsf?c={chapter}";
pub const CHAPTER_PLACEHOLDER: &str = "{chapter}";
pub const TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("gibraltar_tariff/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_CODES_FILE: &str = "gibraltar_harmonised_codes.csv";
pub const DEFAULT_CHAPTERS_FILE: &str = "gibraltar_chapters.csv";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 300; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

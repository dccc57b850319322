// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use error::{ Error, Result };

// src/file.rs

use std::{
    fs::{ self, File },
    io::{ self, BufWriter, Write },
    path::{ Path, PathBuf },
};

use crate::config::consts::{ DEFAULT_CHAPTERS_FILE, DEFAULT_CODES_FILE };
use crate::config::options::ExportOptions;
use crate::data::{ ChapterRecord, CodeRecord };
use crate::error::{ Error, Result };
use crate::scrape::Harvest;

/// A CSV row type with a fixed header line.
pub trait Row {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl Row for CodeRecord {
    const HEADERS: &'static [&'static str] = &["chapter", "code", "description"];

    fn cells(&self) -> Vec<String> {
        vec![self.chapter.to_string(), self.code.clone(), self.description.clone()]
    }
}

impl Row for ChapterRecord {
    const HEADERS: &'static [&'static str] = &["chapter", "title", "codes", "status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.chapter.to_string(),
            self.title.clone(),
            self.codes.to_string(),
            s!(self.status.as_str()),
        ]
    }
}

/// Write `codes` to the codes file and, when configured, the chapter
/// summary of `harvest` to the chapters file. Returns the paths written,
/// codes first.
pub fn export(export: &ExportOptions, codes: &[CodeRecord], harvest: &Harvest) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2);

    let codes_path = resolve_out_path(&export.codes_out, DEFAULT_CODES_FILE)?;
    write_rows(&codes_path, codes)?;
    written.push(codes_path);

    if let Some(out) = &export.chapters_out {
        let chapters_path = resolve_out_path(out, DEFAULT_CHAPTERS_FILE)?;
        write_rows(&chapters_path, &harvest.summary())?;
        written.push(chapters_path);
    }

    Ok(written)
}

/// Create/truncate `path` and write the header plus every row.
/// The header is written even when `rows` is empty.
pub fn write_rows<T: Row>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;

    let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
    write_row(&mut out, T::HEADERS)?;
    for row in rows {
        write_row(&mut out, &row.cells())?;
    }
    out.flush()?;
    Ok(())
}

/* ---------------- Writing ---------------- */

const SEP: char = ',';
const TERMINATOR: &str = "\r\n";

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one CSV record: minimal quoting, CRLF terminated.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(TERMINATOR.as_bytes())
}

/// A path ending in a separator, or naming an existing directory, gets
/// `default_filename` appended.
pub fn resolve_out_path(p: &Path, default_filename: &str) -> Result<PathBuf> {
    if p.as_os_str().is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    if looks_like_dir_hint(p) || p.is_dir() {
        ensure_directory(p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p.to_path_buf())
    }
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

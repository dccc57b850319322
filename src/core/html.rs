// src/core/html.rs
// Flatten an HTML document into its visible text lines.
// Tolerant, not a full parser: every tag boundary ends a text run.

use super::sanitize::{ is_line_break, normalize_entities };

/// Elements whose content is never visible text.
const SKIP_CONTENT: &[&str] = &["script", "style", "template"];

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Case-insensitive `find`. Byte offsets are valid in `s` because only
/// ASCII is lowercased.
fn find_ci(s: &str, pat: &str) -> Option<usize> {
    to_lower(s).find(&to_lower(pat))
}

/// `<` only opens markup when followed by a name, `/`, `!` or `?`.
/// Anything else (`a < b`) is literal text.
fn opens_markup(tail: &str) -> bool {
    matches!(
        tail[1..].chars().next(),
        Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?'
    )
}

/// Lowercased element name of a tag body like `td class="x"` or `/td`.
fn tag_name(body: &str) -> String {
    let body = body.strip_prefix('/').unwrap_or(body);
    to_lower(
        &body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>(),
    )
}

/// Offset of the `>` closing the tag at the start of `tail`. A `>` inside a
/// quoted attribute value (`onclick="n>0"`) does not count.
fn tag_end(tail: &str) -> Option<usize> {
    let mut quote = None;
    let mut prev = ' ';
    for (i, c) in tail.char_indices().skip(1) {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '>' => return Some(i),
            None if (c == '"' || c == '\'') && prev == '=' => quote = Some(c),
            None => {}
        }
        if quote.is_none() && !c.is_whitespace() {
            prev = c;
        }
    }
    None
}

/// Every non-empty text line of `doc`, entity-decoded and trimmed, in
/// document order. Text inside `<script>`, `<style>`, `<template>` and
/// comments is dropped.
pub fn text_lines(doc: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut run = s!();
    let mut rest = doc;

    while let Some(lt) = rest.find('<') {
        run.push_str(&rest[..lt]);
        let tail = &rest[lt..];

        if tail.starts_with("<!--") {
            flush(&mut lines, &mut run);
            rest = tail.find("-->").map_or("", |end| &tail[end + 3..]);
            continue;
        }
        if !opens_markup(tail) {
            run.push('<');
            rest = &tail[1..];
            continue;
        }

        flush(&mut lines, &mut run);
        let Some(gt) = tag_end(tail) else {
            // unterminated tag swallows the rest
            return lines;
        };
        let body = &tail[1..gt];
        rest = &tail[gt + 1..];

        let name = tag_name(body);
        let closing = body.starts_with('/');
        let self_closing = body.ends_with('/');
        if !closing && !self_closing && SKIP_CONTENT.contains(&name.as_str()) {
            rest = skip_element(rest, &name);
        }
    }

    run.push_str(rest);
    flush(&mut lines, &mut run);
    lines
}

/// Jump past the matching `</name ...>`; an unclosed element runs to EOF.
fn skip_element<'a>(rest: &'a str, name: &str) -> &'a str {
    let close = format!("</{name}");
    match find_ci(rest, &close) {
        Some(i) => {
            let after = &rest[i..];
            after.find('>').map_or("", |g| &after[g + 1..])
        }
        None => "",
    }
}

fn flush(lines: &mut Vec<String>, run: &mut String) {
    if run.is_empty() {
        return;
    }
    let text = normalize_entities(run);
    for line in text.split(is_line_break) {
        let line = line.trim();
        if !line.is_empty() {
            lines.push(s!(line));
        }
    }
    run.clear();
}

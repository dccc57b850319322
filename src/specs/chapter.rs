// src/specs/chapter.rs
//! Spec for a chapter print page (`print.jsf?c=NN`).
//!
//! The page is a flat list of tariff lines. A line carries a harmonised
//! code such as `0101210000-00-00`, where `*` may stand in for any digit
//! (`0102292*00-2*-00`, `010129**00-**-00`), followed by its description.
//! The chapter heading (`Chapter 01 - Live animals`) sits near the top.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::{ html, sanitize::clean_description };
use crate::data::{ Chapter, ChapterPage, CodeRecord };

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9*]{10}-[0-9*]{2}-[0-9*]{2}\b").expect("code pattern compiles")
});

static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^chapter\s+(\d{1,2})\b(.*)$").expect("heading pattern compiles")
});

pub fn parse(doc: &str, chapter: Chapter) -> ChapterPage {
    let lines = html::text_lines(doc);
    ChapterPage {
        title: extract_title(&lines, chapter),
        codes: extract_codes(&lines, chapter),
    }
}

/// Every code on every line, described by the text that follows it.
/// Duplicate `(code, description)` pairs keep their first occurrence.
pub fn extract_codes<S: AsRef<str>>(lines: &[S], chapter: Chapter) -> Vec<CodeRecord> {
    let mut records = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        for m in CODE_PATTERN.find_iter(line) {
            let code = s!(m.as_str());
            let description = clean_description(&line[m.end()..]);

            if !seen.insert((code.clone(), description.clone())) {
                continue;
            }
            records.push(CodeRecord { chapter, code, description });
        }
    }

    records
}

/// Heading text for `chapter`, from `Chapter NN - Title` or from the line
/// after a bare `Chapter NN`.
pub fn extract_title<S: AsRef<str>>(lines: &[S], chapter: Chapter) -> Option<String> {
    let mut iter = lines.iter().map(|l| l.as_ref().trim());

    while let Some(line) = iter.next() {
        let Some(caps) = HEADING_PATTERN.captures(line) else { continue };
        if caps[1].parse::<u8>().ok() != Some(chapter.number()) {
            continue;
        }

        let title = clean_description(&caps[2]);
        if !title.is_empty() {
            return Some(title);
        }
        return iter
            .next()
            .filter(|next| !CODE_PATTERN.is_match(next))
            .map(clean_description)
            .filter(|t| !t.is_empty());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(n: u32) -> Chapter {
        Chapter::new(n).unwrap()
    }

    #[test]
    fn codes_with_wildcards_match() {
        let lines = [
            "0101210000-00-00 - Pure-bred breeding animals",
            "0102292*00-2*-00 Other",
            "010129**00-**-00: Other live bovine",
        ];
        let recs = extract_codes(&lines, ch(1));
        let codes: Vec<&str> = recs.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["0101210000-00-00", "0102292*00-2*-00", "010129**00-**-00"]);
        assert_eq!(recs[0].description, "Pure-bred breeding animals");
        assert_eq!(recs[2].description, "Other live bovine");
        assert!(recs.iter().all(|r| r.chapter == ch(1)));
    }

    #[test]
    fn near_misses_ignored() {
        let lines = [
            "010121000-00-00 nine digits",
            "0101210000-000-00 three in middle",
            "x0101210000-00-00 glued to a word",
            "Tel 200 12345",
        ];
        assert!(extract_codes(&lines, ch(1)).is_empty());
    }

    #[test]
    fn two_codes_on_one_line_both_kept() {
        let lines = ["0301100000-00-00 Ornamental 0301930000-00-00 Carp"];
        let recs = extract_codes(&lines, ch(3));
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].description, "Ornamental 0301930000-00-00 Carp");
        assert_eq!(recs[1].description, "Carp");
    }

    #[test]
    fn duplicates_collapse_in_order() {
        let lines = [
            "0201100000-00-00 Carcasses",
            "0201200000-00-00 Cuts",
            "0201100000-00-00 Carcasses",
            "0201100000-00-00 Carcasses, chilled",
        ];
        let recs = extract_codes(&lines, ch(2));
        let got: Vec<(&str, &str)> = recs
            .iter()
            .map(|r| (r.code.as_str(), r.description.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("0201100000-00-00", "Carcasses"),
                ("0201200000-00-00", "Cuts"),
                ("0201100000-00-00", "Carcasses, chilled"),
            ]
        );
    }

    #[test]
    fn code_with_no_description() {
        let recs = extract_codes(&["0401100000-00-00"], ch(4));
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].description, "");
    }

    #[test]
    fn title_inline_and_next_line() {
        let inline = ["HM Customs Gibraltar", "Chapter 01 - Live animals", "0101210000-00-00 Horses"];
        assert_eq!(extract_title(&inline, ch(1)).as_deref(), Some("Live animals"));

        let split = ["CHAPTER 7", "Edible vegetables", "0701100000-00-00 Seed"];
        assert_eq!(extract_title(&split, ch(7)).as_deref(), Some("Edible vegetables"));
    }

    #[test]
    fn title_ignores_other_chapters_and_codes() {
        let lines = ["See chapter 02", "Chapter 02: Meat", "Chapter 03"];
        assert_eq!(extract_title(&lines, ch(3)), None);
        assert_eq!(extract_title(&lines, ch(2)).as_deref(), Some("Meat"));

        let bare = ["Chapter 05", "0501000000-00-00 Human hair"];
        assert_eq!(extract_title(&bare, ch(5)), None);
    }

    #[test]
    fn parse_reads_html_page() {
        let doc = r#"
            <html><head><title>Tariff</title>
            <script>var sample = "0999999999-99-99";</script></head>
            <body>
              <h2>Chapter 01 &ndash; Live animals</h2>
              <table>
                <tr><td>0101210000-00-00</td><td>- Pure-bred breeding animals</td></tr>
                <tr><td>0101210000-00-00 &ndash; Pure-bred breeding animals</td></tr>
                <tr><td>0101290000-00-00 &ndash; Other</td></tr>
              </table>
            </body></html>
        "#;
        let page = parse(doc, ch(1));
        assert_eq!(page.title.as_deref(), Some("Live animals"));
        let got: Vec<(&str, &str)> = page
            .codes
            .iter()
            .map(|r| (r.code.as_str(), r.description.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("0101210000-00-00", ""),
                ("0101210000-00-00", "Pure-bred breeding animals"),
                ("0101290000-00-00", "Other"),
            ]
        );
    }
}

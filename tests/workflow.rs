// tests/workflow.rs
//
// Checks on the scheduled export workflow definition.
//
use std::collections::BTreeSet;

use serde_yaml::Value;

const WORKFLOW: &str = include_str!("../.github/workflows/export_gibraltar_tariff.yml");

fn doc() -> Value {
    serde_yaml::from_str(WORKFLOW).expect("workflow is valid YAML")
}

fn triggers(doc: &Value) -> &Value {
    // YAML 1.1 readers turn a bare `on` key into `true`
    doc.as_mapping()
        .expect("top-level map")
        .iter()
        .find(|(k, _)| k.as_str() == Some("on") || k.as_bool() == Some(true))
        .map(|(_, v)| v)
        .expect("workflow has triggers")
}

fn steps(doc: &Value) -> &Vec<Value> {
    doc["jobs"]["export"]["steps"].as_sequence().expect("steps list")
}

/// Values following `flag` in a shell command (backslash continuations allowed).
fn flag_value<'a>(cmd: &'a str, flag: &str) -> Option<&'a str> {
    let mut words = cmd.split_whitespace().filter(|w| *w != "\\");
    words.by_ref().find(|w| *w == flag)?;
    words.next()
}

#[test]
fn runs_sundays_at_0200_utc_and_on_dispatch() {
    let doc = doc();
    let on = triggers(&doc);
    assert!(on.get("workflow_dispatch").is_some());

    let cron = on["schedule"][0]["cron"].as_str().expect("cron string");
    let fields: Vec<&str> = cron.split_whitespace().collect();
    assert_eq!(fields.len(), 5, "five-field cron: {cron}");
    let (minute, hour, dom, month, dow) = (fields[0], fields[1], fields[2], fields[3], fields[4]);
    assert_eq!(minute.parse::<u32>().ok(), Some(0));
    assert_eq!(hour.parse::<u32>().ok(), Some(2));
    assert_eq!((dom, month), ("*", "*"));
    // 0 and 7 both mean Sunday
    assert!(matches!(dow, "0" | "7" | "SUN" | "sun"), "day of week {dow}");
}

#[test]
fn permissions_read_only() {
    let doc = doc();
    let perms = doc["permissions"].as_mapping().expect("permissions map");
    assert_eq!(perms.len(), 1);
    assert_eq!(doc["permissions"]["contents"].as_str(), Some("read"));
}

#[test]
fn artifact_bundles_exactly_the_exported_files() {
    let doc = doc();
    let steps = steps(&doc);

    let run = steps
        .iter()
        .filter_map(|s| s["run"].as_str())
        .find(|cmd| cmd.contains("--codes-outfile"))
        .expect("exporter run step");
    let produced: BTreeSet<&str> = ["--codes-outfile", "--chapters-outfile"]
        .iter()
        .map(|f| flag_value(run, f).expect("flag has a value"))
        .collect();
    assert_eq!(
        produced,
        BTreeSet::from(["data/gibraltar_harmonised_codes.csv", "data/gibraltar_chapters.csv"])
    );

    let upload = steps
        .iter()
        .find(|s| s["uses"].as_str().is_some_and(|u| u.starts_with("actions/upload-artifact")))
        .expect("upload step");
    assert_eq!(
        upload["with"]["name"].as_str(),
        Some("gibraltar-harmonised-codes-and-chapters")
    );
    let uploaded: BTreeSet<&str> = upload["with"]["path"]
        .as_str()
        .expect("path block")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(uploaded, produced);
}

#[test]
fn steps_in_pipeline_order() {
    let doc = doc();
    let steps = steps(&doc);
    let idx = |pred: &dyn Fn(&Value) -> bool| steps.iter().position(|s| pred(s)).expect("step present");

    let checkout = idx(&|s| s["uses"].as_str().is_some_and(|u| u.starts_with("actions/checkout")));
    let toolchain = idx(&|s| s["uses"].as_str().is_some_and(|u| u.contains("rust-toolchain")));
    let build = idx(&|s| s["run"].as_str().is_some_and(|r| r.contains("cargo build")));
    let export = idx(&|s| s["run"].as_str().is_some_and(|r| r.contains("--codes-outfile")));
    let upload = idx(&|s| s["uses"].as_str().is_some_and(|u| u.starts_with("actions/upload-artifact")));

    assert!(checkout < toolchain && toolchain < build && build < export && export < upload);
}

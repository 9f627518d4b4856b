//! End-to-end run of the cleaning pipeline over a small raw export.
use std::fs;

use tanqih::pipelines::{Pipeline, ReviewClean};
use tempfile::tempdir;

static MAPPING: &str = r#"{
    "tags_mapping": {
        "tag_1": ["Restaurant", "Riyadh"],
        "tag_2": ["Cafe", "Riyadh"],
        "tag_3": ["Museum", "Jeddah"]
    }
}"#;

fn write_raw_dataset(path: &std::path::Path) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    writer
        .write_record(["id", "date", "tags", "ratings", "title", "content", "language"])
        .unwrap();
    // bilingual row, unanimous city
    writer
        .write_record([
            "r0",
            "2022-03-14T09:26:53+0300",
            "[{'value': 'tag_1', 'sentiment': 'positive'}, {'value': 'tag_2', 'sentiment': 'neutral'}]",
            "{'normalized': 4.0, 'raw': 8.0}",
            "Nice restaurant",
            "More(Translated by Google) Great place (Original) مكان رائع",
            "eng",
        ])
        .unwrap();
    // missing ratings, must be dropped
    writer
        .write_record([
            "r1",
            "2022-03-15T10:00:00+0300",
            "[{'value': 'tag_1', 'sentiment': 'negative'}]",
            "",
            "No ratings here",
            "Meh",
            "eng",
        ])
        .unwrap();
    // ambiguous city, resolved by title substring
    writer
        .write_record([
            "r2",
            "2022-03-16T18:45:12+0300",
            "[{'value': 'tag_1', 'sentiment': 'positive'}, {'value': 'tag_3', 'sentiment': 'positive'}]",
            "{'normalized': 5.0, 'raw': 10.0}",
            "Visit to Jeddah Park",
            "Beautiful park",
            "eng",
        ])
        .unwrap();
    writer.flush().unwrap();
}

#[test]
fn full_pipeline() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("raw.csv");
    let mapping = dir.path().join("mappings.json");
    let dst = dir.path().join("clean.csv");

    write_raw_dataset(&src);
    fs::write(&mapping, MAPPING).unwrap();

    let pipeline = ReviewClean::new(src, mapping, dst.clone(), true);
    pipeline.run().unwrap();

    let mut reader = csv::Reader::from_path(&dst).unwrap();
    let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
    assert_eq!(
        headers,
        vec![
            "id",
            "content",
            "date",
            "language",
            "title",
            "normalized_rating",
            "raw_rating",
            "sentiment",
            "city",
            "type"
        ]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    // 3 raw rows - 1 dropped + 1 split copy
    assert_eq!(records.len(), 3);

    // r0 rewritten to its arabic variant in place
    assert_eq!(records[0].get(0), Some("r0"));
    assert_eq!(records[0].get(1), Some("مكان رائع"));
    assert_eq!(records[0].get(3), Some("ara"));
    assert_eq!(records[0].get(8), Some("Riyadh"));
    assert_eq!(records[0].get(7), Some("['positive', 'neutral']"));

    // r2 kept as-is, city reconciled through the title
    assert_eq!(records[1].get(0), Some("r2"));
    assert_eq!(records[1].get(3), Some("eng"));
    assert_eq!(records[1].get(8), Some("Jeddah"));
    assert_eq!(records[1].get(9), Some("['Restaurant', 'Museum']"));

    // english copy of r0 appended at the end
    assert_eq!(records[2].get(0), Some("r0"));
    assert_eq!(records[2].get(1), Some("Great place"));
    assert_eq!(records[2].get(3), Some("eng"));

    // per-language subsets written next to dst
    assert!(dir.path().join("eng.csv").exists());
    assert!(dir.path().join("ara.csv").exists());
}

#[test]
fn unmapped_tag_aborts_the_run() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("raw.csv");
    let mapping = dir.path().join("mappings.json");
    let dst = dir.path().join("clean.csv");

    write_raw_dataset(&src);
    // mapping missing tag_2 and tag_3
    fs::write(
        &mapping,
        r#"{"tags_mapping": {"tag_1": ["Restaurant", "Riyadh"]}}"#,
    )
    .unwrap();

    let pipeline = ReviewClean::new(src, mapping, dst.clone(), false);
    assert!(pipeline.run().is_err());
    assert!(!dst.exists());
}

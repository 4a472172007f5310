//! Offline ranking end to end: corpus file in, CSV / JSON / bundles out.

use scholarank_ingestion::corpus::load_corpus;
use scholarank_ranker::export::{write_bundles, write_rows, CSV_COLUMNS};
use scholarank_ranker::pipeline::topic_bundles;
use scholarank_ranker::{rank_papers, RankedPaper, ScoreConfig};

const CORPUS: &str = r#"{
  "data": [
    {"title": "A survey of sorting", "year": 1999, "citationCount": 5000, "url": "https://example.org/sort"},
    {"title": "Wearable sensing for emotion regulation", "abstract": "Ecological momentary assessment with `code` and https://x.y/z",
     "venue": "CHI", "year": 2024, "citationCount": 120, "doi": "10.1/wer", "authors": ["R. Picard"]},
    {"title": "Multimodal affect", "year": "2021", "citationCount": "n/a"},
    "not a paper",
    {"title": "Resilience in students", "year": 2024, "citationCount": 3}
  ]
}"#;

fn ranked() -> Vec<RankedPaper> {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corpus.json");
    std::fs::write(&input, CORPUS).unwrap();
    let papers = load_corpus(&input).unwrap();
    assert_eq!(papers.len(), 4);
    rank_papers(&papers, &ScoreConfig::default(), 2026)
}

#[test]
fn test_ranking_order_and_bounds() {
    let rows = ranked();
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Wearable sensing for emotion regulation",
            "Resilience in students",
            "A survey of sorting",
            "Multimodal affect",
        ]
    );
    for r in &rows {
        assert!(r.score <= 100);
        assert!(r.relevance <= 60 && r.impact <= 20 && r.recency <= 20);
    }
    // old but heavily cited: impact only
    assert_eq!((rows[2].impact, rows[2].recency, rows[2].relevance), (20, 0, 0));
    assert_eq!(rows[3].citations, None);
    assert_eq!(rows[0].url, "10.1/wer");
}

#[test]
fn test_csv_and_json_outputs() {
    let rows = ranked();
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("out").join("scored_papers.csv");
    write_rows(&csv_path, &rows).unwrap();
    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(header, CSV_COLUMNS.to_vec());
    let back: Vec<RankedPaper> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(back.len(), rows.len());
    assert_eq!(back[0].score, rows[0].score);
    assert_eq!(back[3].citations, None);

    let json_path = dir.path().join("out").join("scored_papers.json");
    write_rows(&json_path, &rows).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    let first = &value[0];
    assert_eq!(first["title"], "Wearable sensing for emotion regulation");
    assert_eq!(first["score"], rows[0].score);
    assert!(first.get("hits").is_none());
    assert!(value[3]["citations"].is_null());
}

#[test]
fn test_bundles_output() {
    let rows = ranked();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundles.json");
    write_bundles(&path, &topic_bundles(&rows)).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["resilience"][0]["title"], "Resilience in students");
    assert_eq!(value["wearable"][0]["url"], "10.1/wer");
}

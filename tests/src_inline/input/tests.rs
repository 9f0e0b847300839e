use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::chart::Planet;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("astrogenomics_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const REQUEST: &str = r#"{
    "sample_id": "subject-1",
    "chart": {
        "planets": {
            "sun": {"longitude": 125.0, "house": 10},
            "moon": {"longitude": 40.0},
            "mars": {"longitude": 215.0}
        },
        "house_cusps": [0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330]
    },
    "genotypes": {"rs429358": "ct", "rs6265": "CT", "rs0000001": "AA"}
}"#;

#[test]
fn test_parse_input() {
    let input = parse_input(REQUEST).unwrap();
    assert_eq!(input.sample_id, "subject-1");
    assert_eq!(input.chart.planets.len(), 3);
    assert_eq!(input.genotypes.len(), 3);
}

#[test]
fn test_resolved_chart_fills_missing_houses() {
    let input = parse_input(REQUEST).unwrap();
    let chart = input.resolved_chart();
    assert_eq!(chart.planets[&Planet::Sun].house, Some(10));
    assert_eq!(chart.planets[&Planet::Moon].house, Some(2));
    assert_eq!(chart.planets[&Planet::Mars].house, Some(8));
    assert_eq!(input.chart.planets[&Planet::Moon].house, None);
}

#[test]
fn test_profile_from_input() {
    let profile = parse_input(REQUEST).unwrap().profile();
    assert_eq!(profile.sample_id, "subject-1");
    assert_eq!(profile.total_snps_processed, 3);
    assert_eq!(profile.annotated_count(), 2);
    assert_eq!(
        profile.genotype("rs429358").map(|g| g.as_str()),
        Some("CT")
    );
}

#[test]
fn test_sample_id_defaults() {
    let input = parse_input(r#"{"chart": {"planets": {}}, "genotypes": {}}"#).unwrap();
    assert_eq!(input.sample_id, "unknown");
}

#[test]
fn test_rejects_out_of_range_house() {
    let err = parse_input(
        r#"{"chart": {"planets": {"sun": {"longitude": 1.0, "house": 13}}}, "genotypes": {}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidArgument(_)));
}

#[test]
fn test_rejects_malformed_json() {
    assert!(matches!(
        parse_input("{\"chart\": ").unwrap_err(),
        AnalysisError::Json(_)
    ));
    assert!(matches!(
        parse_input(r#"{"chart": {"planets": {"vulcan": {"longitude": 1.0}}}, "genotypes": {}}"#)
            .unwrap_err(),
        AnalysisError::Json(_)
    ));
}

#[test]
fn test_load_input_from_file() {
    let dir = make_temp_dir();
    let path = dir.join("request.json");
    fs::write(&path, REQUEST).unwrap();
    let input = load_input(&path).unwrap();
    assert_eq!(input.sample_id, "subject-1");

    let missing = load_input(&dir.join("absent.json")).unwrap_err();
    assert!(matches!(missing, AnalysisError::Io(_)));
    let _ = fs::remove_dir_all(&dir);
}

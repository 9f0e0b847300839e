use super::*;

#[test]
fn test_default_profile() {
    let p = AnalysisProfile::default_v1();
    assert_eq!(p.alpha, 0.05);
    assert_eq!(p.n_bootstrap, 1000);
    assert_eq!(p.n_permutations, 1000);
    assert_eq!(p.min_resampling_len, 5);
    assert_eq!(p.seed, 42);
    assert_eq!(p.top_n, 5);
    assert_eq!(p.sect, Sect::Day);
    assert_eq!(p.weights, MethodWeights::default());
    assert!(p.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let p: AnalysisProfile =
        serde_json::from_str(r#"{"seed": 7, "sect": "night", "weights": {"dignity": 1.0}}"#)
            .unwrap();
    assert_eq!(p.seed, 7);
    assert_eq!(p.sect, Sect::Night);
    assert_eq!(p.weights.dignity, 1.0);
    assert_eq!(p.weights.pathway, 0.35);
    assert_eq!(p.n_bootstrap, 1000);
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut p = AnalysisProfile::default_v1();
    p.alpha = 1.5;
    assert!(matches!(p.validate(), Err(AnalysisError::InvalidArgument(_))));

    let mut p = AnalysisProfile::default_v1();
    p.weights.pathway = -0.1;
    assert!(p.validate().is_err());

    let mut p = AnalysisProfile::default_v1();
    p.aspect_orb = f64::NAN;
    assert!(p.validate().is_err());
}

#[test]
fn test_validator_from_profile() {
    let mut p = AnalysisProfile::default_v1();
    p.n_bootstrap = 10;
    p.min_resampling_len = 8;
    let v = p.validator();
    assert_eq!(v.n_bootstrap, 10);
    assert_eq!(v.n_permutations, 1000);
    assert_eq!(v.min_resampling_len, 8);
    assert_eq!(v.alpha, 0.05);
}

#[test]
fn test_load_missing_file() {
    let err =
        AnalysisProfile::load(Path::new("/nonexistent/astrogenomics/profile.json")).unwrap_err();
    assert!(matches!(err, AnalysisError::Io(_)));
}

#[test]
fn test_load_roundtrip_file() {
    let dir = std::env::temp_dir().join(format!("astrogenomics_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("profile.json");
    std::fs::write(&path, r#"{"alpha": 0.01, "n_permutations": 250}"#).unwrap();
    let p = AnalysisProfile::load(&path).unwrap();
    assert_eq!(p.alpha, 0.01);
    assert_eq!(p.n_permutations, 250);
    let _ = std::fs::remove_dir_all(&dir);
}

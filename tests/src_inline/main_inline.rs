use super::*;

fn run_args(extra: &[&str]) -> RunArgs {
    let mut argv = vec!["astrogenomics", "run", "--input", "in.json", "--out", "out"];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Run(args) => args,
    }
}

#[test]
fn test_parse_run_defaults() {
    let args = run_args(&[]);
    assert_eq!(args.input, PathBuf::from("in.json"));
    assert_eq!(args.out, PathBuf::from("out"));
    assert!(args.profile.is_none());
    assert!(args.seed.is_none());
}

#[test]
fn test_missing_out_is_rejected() {
    assert!(Cli::try_parse_from(["astrogenomics", "run", "--input", "in.json"]).is_err());
}

#[test]
fn test_build_profile_applies_overrides() {
    let args = run_args(&["--seed", "7", "--alpha", "0.01", "--bootstrap", "200"]);
    let profile = build_profile(&args).unwrap();
    assert_eq!(profile.seed, 7);
    assert_eq!(profile.alpha, 0.01);
    assert_eq!(profile.n_bootstrap, 200);
    assert_eq!(profile.n_permutations, AnalysisProfile::default_v1().n_permutations);
}

#[test]
fn test_build_profile_rejects_bad_alpha() {
    let args = run_args(&["--alpha", "1.5"]);
    assert!(build_profile(&args).is_err());
}

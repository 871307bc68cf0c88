use std::fs;
use std::path::Path;

use copycheck::{
    run, CopycheckConfig, EngineConfig, Metric, NormalizeConfig, RunOptions, ALL_METRICS,
    DEFAULT_THRESHOLD, RESULTS_DIR,
};

fn seed_three_doc_corpus(dir: &Path) {
    fs::write(dir.join("a.py"), "x=1\nprint(x)").expect("a.py written");
    fs::write(dir.join("b.py"), "x=1\nprint(x)").expect("b.py written");
    fs::write(dir.join("c.py"), "def foo(): return 42").expect("c.py written");
}

fn default_options(dir: &Path, metrics: Vec<Metric>) -> RunOptions {
    RunOptions {
        corpus_dir: dir.to_path_buf(),
        ext_filter: Some("py".into()),
        metrics,
        threshold: DEFAULT_THRESHOLD,
        normalize: NormalizeConfig::default(),
        engine: EngineConfig::default(),
    }
}

fn report_lines(dir: &Path, file: &str) -> Vec<String> {
    let content = fs::read_to_string(dir.join(RESULTS_DIR).join(file)).expect("report readable");
    content.lines().map(str::to_string).collect()
}

#[test]
fn identical_documents_are_flagged_and_outsider_is_not() {
    let tmp = tempfile::tempdir().expect("tempdir");
    seed_three_doc_corpus(tmp.path());

    let summary = run(&default_options(tmp.path(), vec![Metric::Levenshtein]))
        .expect("run succeeds");
    assert!(summary.all_succeeded());

    let lines = report_lines(tmp.path(), "LevenshteinDist.csv");
    assert_eq!(lines[0], ",a.py,b.py,c.py,Plagiated");

    // a.py and b.py normalize to the same text, so each scores 100 against
    // the other and both are flagged; c.py stays below the threshold.
    let a: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(a[0], "a.py");
    assert_eq!(a[1], "", "self cell must be empty, not zero");
    assert_eq!(a[2], "100");
    assert_eq!(a[4], "True");

    let b: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(b[1], "100");
    assert_eq!(b[2], "", "self cell must be empty, not zero");
    assert_eq!(b[4], "True");

    let c: Vec<&str> = lines[3].split(',').collect();
    assert_eq!(c[0], "c.py");
    assert_eq!(c[3], "", "self cell must be empty, not zero");
    assert_eq!(c[4], "False");
    let c_vs_a: u8 = c[1].parse().expect("score parses");
    assert!(c_vs_a < 90, "outsider scores well below the threshold");
}

#[test]
fn all_selector_produces_all_three_artifacts() {
    let tmp = tempfile::tempdir().expect("tempdir");
    seed_three_doc_corpus(tmp.path());

    let summary =
        run(&default_options(tmp.path(), ALL_METRICS.to_vec())).expect("run succeeds");
    assert!(summary.all_succeeded());

    let results = tmp.path().join(RESULTS_DIR);
    for file in ["LevenshteinDist.csv", "JaroDist.csv", "SequenceMatcher.csv"] {
        assert!(results.join(file).is_file(), "missing {file}");
    }
}

#[test]
fn rows_and_columns_follow_sorted_name_order() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // Written out of order on purpose.
    fs::write(tmp.path().join("zeta.py"), "x=1").expect("file written");
    fs::write(tmp.path().join("alpha.py"), "x=2").expect("file written");
    fs::write(tmp.path().join("mid.py"), "x=3").expect("file written");

    run(&default_options(tmp.path(), vec![Metric::Jaro])).expect("run succeeds");

    let lines = report_lines(tmp.path(), "JaroDist.csv");
    assert_eq!(lines[0], ",alpha.py,mid.py,zeta.py,Plagiated");
    assert!(lines[1].starts_with("alpha.py,"));
    assert!(lines[2].starts_with("mid.py,"));
    assert!(lines[3].starts_with("zeta.py,"));
}

#[test]
fn extension_filter_limits_the_comparison() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("a.py"), "x=1\nprint(x)").expect("file written");
    fs::write(tmp.path().join("b.py"), "x=1\nprint(x)").expect("file written");
    fs::write(tmp.path().join("notes.txt"), "x=1\nprint(x)").expect("file written");

    run(&default_options(tmp.path(), vec![Metric::Levenshtein])).expect("run succeeds");

    let lines = report_lines(tmp.path(), "LevenshteinDist.csv");
    assert_eq!(lines[0], ",a.py,b.py,Plagiated");
    assert_eq!(lines.len(), 3);
}

#[test]
fn threshold_is_configurable() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // Different assignment targets, identical right-hand sides: the
    // normalizer strips the targets, so these compare as equal.
    fs::write(tmp.path().join("a.py"), "result = alpha + beta + gamma").expect("file written");
    fs::write(tmp.path().join("b.py"), "answer = alpha + beta + gamma").expect("file written");

    let mut opts = default_options(tmp.path(), vec![Metric::Levenshtein]);
    opts.threshold = 99;
    run(&opts).expect("run succeeds");
    let lines = report_lines(tmp.path(), "LevenshteinDist.csv");
    assert!(lines[1].ends_with("True"));

    // At 100 the strict comparison cannot be exceeded.
    opts.threshold = 100;
    run(&opts).expect("run succeeds");
    let lines = report_lines(tmp.path(), "LevenshteinDist.csv");
    assert!(lines[1].ends_with("False"));
}

#[test]
fn run_options_come_together_from_yaml_config() {
    let tmp = tempfile::tempdir().expect("tempdir");
    seed_three_doc_corpus(tmp.path());

    let config = CopycheckConfig::from_yaml("version: \"1.0\"\nmetric: seq\nthreshold: 80\n")
        .expect("config parses");
    let opts = RunOptions::from_config(tmp.path(), Some("py".into()), &config)
        .expect("options build");
    assert_eq!(opts.metrics, vec![Metric::SequenceBlocks]);
    assert_eq!(opts.threshold, 80);

    let summary = run(&opts).expect("run succeeds");
    assert!(summary.all_succeeded());
    assert!(tmp
        .path()
        .join(RESULTS_DIR)
        .join("SequenceMatcher.csv")
        .is_file());
}

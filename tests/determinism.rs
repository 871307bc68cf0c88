use std::fs;
use std::path::Path;

use copycheck::{
    run, EngineConfig, NormalizeConfig, RunOptions, ALL_METRICS, DEFAULT_THRESHOLD, RESULTS_DIR,
};

fn seed_corpus(dir: &Path) {
    fs::write(dir.join("a.py"), "x = 1 # first\nprint(x)\n").expect("a.py written");
    fs::write(dir.join("b.py"), "y = 1 # second\nprint(y)\n").expect("b.py written");
    fs::write(dir.join("c.py"), "def fib(n): return fib(n-1) + fib(n-2)").expect("c.py written");
}

fn options(dir: &Path, use_parallel: bool) -> RunOptions {
    RunOptions {
        corpus_dir: dir.to_path_buf(),
        ext_filter: Some("py".into()),
        metrics: ALL_METRICS.to_vec(),
        threshold: DEFAULT_THRESHOLD,
        normalize: NormalizeConfig::default(),
        engine: EngineConfig {
            use_parallel,
            ..Default::default()
        },
    }
}

fn read_reports(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut reports: Vec<(String, Vec<u8>)> = fs::read_dir(dir.join(RESULTS_DIR))
        .expect("results dir exists")
        .map(|entry| {
            let entry = entry.expect("entry readable");
            let name = entry.file_name().to_string_lossy().into_owned();
            let bytes = fs::read(entry.path()).expect("report readable");
            (name, bytes)
        })
        .collect();
    reports.sort_by(|a, b| a.0.cmp(&b.0));
    reports
}

#[test]
fn repeated_runs_produce_byte_identical_reports() {
    let tmp = tempfile::tempdir().expect("tempdir");
    seed_corpus(tmp.path());

    run(&options(tmp.path(), true)).expect("first run succeeds");
    let first = read_reports(tmp.path());

    run(&options(tmp.path(), true)).expect("second run succeeds");
    let second = read_reports(tmp.path());

    assert_eq!(first, second);
}

#[test]
fn parallel_and_serial_runs_agree_byte_for_byte() {
    let tmp_parallel = tempfile::tempdir().expect("tempdir");
    let tmp_serial = tempfile::tempdir().expect("tempdir");
    seed_corpus(tmp_parallel.path());
    seed_corpus(tmp_serial.path());

    run(&options(tmp_parallel.path(), true)).expect("parallel run succeeds");
    run(&options(tmp_serial.path(), false)).expect("serial run succeeds");

    assert_eq!(
        read_reports(tmp_parallel.path()),
        read_reports(tmp_serial.path()),
    );
}

#[test]
fn discovery_order_does_not_depend_on_write_order() {
    let tmp_forward = tempfile::tempdir().expect("tempdir");
    fs::write(tmp_forward.path().join("a.py"), "x=1").expect("file written");
    fs::write(tmp_forward.path().join("b.py"), "x=2").expect("file written");

    let tmp_reversed = tempfile::tempdir().expect("tempdir");
    fs::write(tmp_reversed.path().join("b.py"), "x=2").expect("file written");
    fs::write(tmp_reversed.path().join("a.py"), "x=1").expect("file written");

    run(&options(tmp_forward.path(), true)).expect("forward run succeeds");
    run(&options(tmp_reversed.path(), true)).expect("reversed run succeeds");

    assert_eq!(
        read_reports(tmp_forward.path()),
        read_reports(tmp_reversed.path()),
    );
}

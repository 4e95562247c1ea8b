//! Conformance tests that run YAML fixtures against muster
//!
//! Run with: cargo test -p muster-test --test conformance

use muster_test::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the fixtures directory relative to the workspace root
fn fixtures_dir() -> PathBuf {
    // The manifest dir is ext/test; the workspace root is two levels up
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .parent() // ext
        .and_then(Path::parent) // workspace root
        .expect("Could not find workspace root")
        .join("fixtures")
}

/// Load and run all fixtures in a directory
fn run_fixtures_in_dir(dir: &Path) {
    assert!(
        dir.exists(),
        "Fixtures directory does not exist: {}",
        dir.display()
    );

    let mut ran = 0;
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();

        if !path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            continue;
        }

        println!("Running fixture: {}", path.display());
        let fixtures = Fixture::from_path(&path).unwrap_or_else(|e| panic!("{e}"));

        for fixture in fixtures {
            println!("  Running: {}", fixture.name);
            fixture.run_and_assert();
            ran += 1;
        }
    }

    assert!(ran > 0, "no fixtures found in {}", dir.display());
}

#[test]
fn test_mappings() {
    run_fixtures_in_dir(&fixtures_dir().join("01_mappings"));
}

#[test]
fn test_collections() {
    run_fixtures_in_dir(&fixtures_dir().join("02_collections"));
}

#[test]
fn test_scalars() {
    run_fixtures_in_dir(&fixtures_dir().join("03_scalars"));
}

#[test]
fn test_greedy() {
    run_fixtures_in_dir(&fixtures_dir().join("04_greedy"));
}

#[test]
fn test_exact_multiset() {
    run_fixtures_in_dir(&fixtures_dir().join("05_exact_multiset"));
}

#[test]
fn test_api_payloads() {
    run_fixtures_in_dir(&fixtures_dir().join("06_api_payloads"));
}

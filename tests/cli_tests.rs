//! CLI tests against the local fixture catalog; none of these touch the network.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/monsters.json")
}

fn bestiary(cache: &TempDir, catalog: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("stl-bestiary").unwrap();
    cmd.env_remove("STL_BESTIARY_API_URL")
        .env_remove("STL_BESTIARY_CATALOG")
        .env_remove("STL_BESTIARY_CACHE_DIR")
        .arg("--catalog")
        .arg(catalog)
        .arg("--cache-dir")
        .arg(cache.path());
    cmd
}

#[test]
fn test_match_text_output() {
    let cache = TempDir::new().unwrap();
    bestiary(&cache, &fixture_catalog())
        .args(["match", "goblin archer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match (phrase)"))
        .stdout(predicate::str::contains("#1 Goblin Archer"))
        .stdout(predicate::str::contains(
            "Landing: https://minis.example.com/goblin-archer",
        ));
}

#[test]
fn test_match_json_respects_word_boundaries() {
    let cache = TempDir::new().unwrap();
    let output = bestiary(&cache, &fixture_catalog())
        .args(["--format", "json", "match", "Rat"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tier"], "word");
    let names: Vec<&str> = json["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Rat Swarm.stl"]);
}

#[test]
fn test_match_no_results() {
    let cache = TempDir::new().unwrap();
    bestiary(&cache, &fixture_catalog())
        .args(["match", "Tarrasque"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no STL matches"));
}

#[test]
fn test_match_closest_always_answers() {
    let cache = TempDir::new().unwrap();
    bestiary(&cache, &fixture_catalog())
        .args(["match", "Tarrasque", "--closest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("closest (nearest)"));
}

#[test]
fn test_match_tsv_header() {
    let cache = TempDir::new().unwrap();
    bestiary(&cache, &fixture_catalog())
        .args(["--format", "tsv", "match", "Giant Ape"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "query\ttier\tname\tdownload\tlanding\n",
        ))
        .stdout(predicate::str::contains("Giant Ape\tphrase\tCave Giant Ape Statue.stl"));
}

#[test]
fn test_catalog_list_filters() {
    let cache = TempDir::new().unwrap();
    bestiary(&cache, &fixture_catalog())
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adult Black Dragon\t"))
        .stdout(predicate::str::contains("Owlbear").not())
        .stdout(predicate::str::contains("Ochre Jelly").not());

    bestiary(&cache, &fixture_catalog())
        .args(["catalog", "list", "--show-shapeways", "--search", "owl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Owlbear"));
}

#[test]
fn test_snapshot_reused_when_catalog_disappears() {
    let cache = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let catalog = work.path().join("monsters.json");
    std::fs::copy(fixture_catalog(), &catalog).unwrap();

    bestiary(&cache, &catalog)
        .args(["match", "Giant"])
        .assert()
        .success();
    assert!(cache.path().join("stl_monsters_v1.json").exists());

    std::fs::remove_file(&catalog).unwrap();
    bestiary(&cache, &catalog)
        .args(["match", "Giant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cave Giant Ape Statue"));

    // A different schema version cannot see the old snapshot
    bestiary(&cache, &catalog)
        .args(["--schema-version", "v2", "match", "Giant"])
        .assert()
        .failure();
}

#[test]
fn test_refresh_reloads_catalog() {
    let cache = TempDir::new().unwrap();
    bestiary(&cache, &fixture_catalog())
        .args(["catalog", "refresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reloaded 8 catalog entries into snapshot stl_monsters_v1",
        ));
}

#[test]
fn test_refresh_fails_without_catalog() {
    let cache = TempDir::new().unwrap();
    let missing = cache.path().join("missing.json");
    bestiary(&cache, &missing)
        .args(["catalog", "refresh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

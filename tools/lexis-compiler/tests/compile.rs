use std::fs;
use std::path::Path;
use std::process::Command;

use lexis_protocol::AnchorTable;
use rkyv::AlignedVec;
use serde_json::Value;

const BIN: &str = env!("CARGO_BIN_EXE_lexis-compiler");

fn dictionary() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.json"))
}

#[test]
fn test_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    let status = Command::new(BIN)
        .arg("--input")
        .arg(dictionary())
        .arg("--output")
        .arg(&out)
        .args(["--open", "<b>", "--close", "</b>"])
        .status()
        .unwrap();
    assert!(status.success());

    let report: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let taite = &report["entries"][0];
    assert_eq!(taite["headword"], "taité");
    assert_eq!(taite["etymology"], "do tupi teté");
    assert_eq!(taite["category"], "interj, s, adj");
    assert_eq!(taite["registers"][0]["source"], "Magalhães");
    assert_eq!(taite["registers"][0]["form_lists"][1]["forms"][0], "taité");

    let supy = &taite["senses"][0]["examples"][1];
    assert_eq!(supy["spans"][0]["start"], 0);
    assert_eq!(supy["spans"][1]["start"], 17);
    assert_eq!(supy["spans"][1]["end"], 22);
    assert_eq!(supy["highlighted"], "<b>Teité</b> araã Supy, <b>teité</b> araã yandé!");

    let ete = &report["entries"][1];
    assert_eq!(ete["headword"], "eté [hist.]");
    assert_eq!(ete["senses"][0]["sources"], "Tastevin, 620; Amorim, 179; Stradelli, 364");
    assert_eq!(ete["senses"][0]["equivalent"], "reté<sup>1</sup> 1");
    assert_eq!(ete["category"], "adj, adv");
    assert_eq!(ete["senses"][0]["usage_note"], "atualmente ainda ocorre em alguns compostos");
    assert!(ete["senses"][1]["usage"].is_null());
    assert_eq!(ete["senses"][0]["examples"][0]["adapted"], true);
}

#[test]
fn test_rkyv_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("anchors.rkyv");

    let status = Command::new(BIN)
        .arg("-i")
        .arg(dictionary())
        .arg("-o")
        .arg(&out)
        .args(["--format", "rkyv"])
        .status()
        .unwrap();
    assert!(status.success());

    let mut bytes = AlignedVec::new();
    bytes.extend_from_slice(&fs::read(&out).unwrap());
    let table = rkyv::check_archived_root::<AnchorTable>(&bytes).unwrap();

    assert_eq!(table.version, AnchorTable::VERSION);
    // taité: 2 + 2 examples, eté: 1 + 1
    assert_eq!(table.records.len(), 6);
    let last = &table.records[5];
    assert_eq!(last.headword.as_str(), "eté");
    assert_eq!(last.sense, 3);
    assert_eq!(last.spans[0].start, 44);
}

#[test]
fn test_strict_rejects_dangling_references() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    // "reté" is referenced by "eté" but not defined in the bundled file
    let output = Command::new(BIN)
        .arg("--input")
        .arg(dictionary())
        .arg("--output")
        .arg(&out)
        .arg("--strict")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("refers to missing entry reté#1"), "{stderr}");
    assert!(!out.exists());
}

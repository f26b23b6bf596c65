#![cfg(feature = "cli")]

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn memgraph() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_memgraph"));
    cmd.env("MEMGRAPH_LOG", "off");
    cmd
}

fn documents_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "a", "summaryEmbedding": [1.0], "memoryEntries": [{{"id": "a1", "spaceId": "work"}}]}},
            {{"id": "b", "summaryEmbedding": [1.0], "memoryEntries": [{{"id": "b1", "spaceId": "home"}}]}},
            {{"id": "c", "summaryEmbedding": [1.0]}}
        ]"#
    )
    .unwrap();
    file
}

#[test]
fn cli_prints_edge_list_as_json() {
    let docs = documents_file();
    let output = memgraph().arg(docs.path()).output().unwrap();
    assert!(output.status.success());

    let built: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = built["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["edge-a-a1", "edge-b-b1", "doc-doc-a-b"]);
    assert_eq!(built["report"]["documents_in_view"], 2);
}

#[test]
fn cli_applies_config_file() {
    let docs = documents_file();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "version: \"1.0\"\nedges:\n  selected_space: work").unwrap();

    let output = memgraph()
        .arg(docs.path())
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let built: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(built["edges"].as_array().unwrap().len(), 1);
    assert_eq!(built["edges"][0]["id"], "edge-a-a1");
}

#[test]
fn cli_rejects_malformed_documents() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"id\": \"not-an-array\"}}").unwrap();

    let output = memgraph().arg(file.path()).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_requires_documents_argument() {
    let output = memgraph().output().unwrap();
    assert!(!output.status.success());
}

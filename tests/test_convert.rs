use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::predicate;
use serde_json::{json, Value};
use std::fs;

const TIMESTAMPED_LOG: &str = r#"0.000 clasp version 3.3.5
0.001 Reading from stdin
0.500 Solving...
1.000 Answer: 1
1.000 cycle(1,2) cycle(2,3) cycle(3,1)
1.000 Optimization: 16
2.500 Answer: 2
2.500 cycle(1,3) cycle(3,2) cycle(2,1)
2.500 Optimization: 11
3.000 OPTIMUM FOUND
"#;

const GRINGO_TEXT: &str = r#"node(1).
node(2).
node(3).
cost(1,2,3).
cost(2,1,3).
cost(2,3,5).
cost(3,2,5).
cost(3,1,8).
cost(1,3,3).
"#;

const PLAIN_LOG: &str = r#"clasp version 3.3.5
Reading from stdin
Solving...
Answer: 1
path(a,b) path(b,c)
SATISFIABLE
"#;

fn read_json(dir: &TempDir, name: &str) -> Value {
    serde_json::from_str(&fs::read_to_string(dir.child(name).path()).unwrap()).unwrap()
}

fn convert_cmd(dir: &TempDir, edge_pred: &str) -> Command {
    let mut cmd = Command::cargo_bin("aspgv").unwrap();
    cmd.arg("convert")
        .arg("-e")
        .arg(edge_pred)
        .arg("-c")
        .arg(dir.child("clasp.out").path())
        .arg("-d")
        .arg(dir.child("json/data.json").path())
        .arg("-t")
        .arg(dir.child("json/time.json").path())
        .arg("-s")
        .arg(dir.child("json/soln.json").path());
    cmd
}

#[test]
fn test_convert_with_costs() {
    let dir = TempDir::new().unwrap();
    dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
    dir.child("gringo.out").write_str(GRINGO_TEXT).unwrap();
    convert_cmd(&dir, "cycle")
        .arg("-o")
        .arg("cost")
        .arg("-g")
        .arg(dir.child("gringo.out").path())
        .arg("--directed")
        .assert()
        .success()
        .stdout(predicate::str::contains("conversion succeeded"));
    let graph = read_json(&dir, "json/data.json");
    let nodes = graph["nodes"].as_array().unwrap();
    assert_eq!(3, nodes.len());
    assert_eq!(json!("n1"), nodes[0]["label"]);
    assert_eq!(json!(true), nodes[0]["allowedToMoveX"]);
    assert_eq!(
        json!([
            {"id": "1", "from": "1", "to": "2", "width": 3, "label": "3"},
            {"id": "2", "from": "2", "to": "3", "width": 5, "label": "5"},
            {"id": "3", "from": "1", "to": "3", "width": 3, "label": "3"},
        ]),
        graph["edges"]
    );
    assert_eq!(
        json!({"1": [0.5, "16"], "2": [2.0, "11"]}),
        read_json(&dir, "json/time.json")
    );
    assert_eq!(
        json!({"1": [1, 2, 3], "2": [3, 2, 1]}),
        read_json(&dir, "json/soln.json")
    );
}

#[test]
fn test_convert_one_way_edges() {
    let dir = TempDir::new().unwrap();
    dir.child("clasp.out")
        .write_str("0.0 Solving...\n0.2 Answer: 1\n0.2 go(a,b) go(b,c)\n0.2 Optimization: 4\n")
        .unwrap();
    dir.child("gringo.out")
        .write_str("w(a,b,1).\nw(b,a,1).\nw(b,c,3).\n")
        .unwrap();
    convert_cmd(&dir, "go")
        .arg("--cost-pred")
        .arg("w")
        .arg("--gringo-out")
        .arg(dir.child("gringo.out").path())
        .arg("-i")
        .arg("--layout")
        .arg("circular")
        .assert()
        .success();
    assert_eq!(
        json!([
            {"id": "1", "from": "a", "to": "b", "width": 1, "label": "1"},
            {"id": "2", "from": "b", "to": "c", "width": 3, "label": "3", "style": "arrow"},
        ]),
        read_json(&dir, "json/data.json")["edges"]
    );
    assert_eq!(json!({"1": [1, 2]}), read_json(&dir, "json/soln.json"));
}

#[test]
fn test_convert_complete_graph_not_timestamped() {
    let dir = TempDir::new().unwrap();
    dir.child("clasp.out").write_str(PLAIN_LOG).unwrap();
    convert_cmd(&dir, "path")
        .arg("--not-timestamped")
        .arg("--not-opt")
        .assert()
        .success();
    let graph = read_json(&dir, "json/data.json");
    assert_eq!(3, graph["nodes"].as_array().unwrap().len());
    assert_eq!(3, graph["edges"].as_array().unwrap().len());
    assert_eq!(json!({"1": [4.0, "1"]}), read_json(&dir, "json/time.json"));
    assert_eq!(json!({"1": [1, 3]}), read_json(&dir, "json/soln.json"));
}

#[test]
fn test_convert_without_edges_writes_nothing() {
    let dir = TempDir::new().unwrap();
    dir.child("clasp.out")
        .write_str("Solving...\nAnswer: 1\n\nSATISFIABLE\n")
        .unwrap();
    convert_cmd(&dir, "path")
        .arg("--not-timestamped")
        .assert()
        .failure()
        .stdout(predicate::str::contains("an error occurred"));
    dir.child("json").assert(predicate::path::missing());
}

#[test]
fn test_convert_unknown_edge_writes_nothing() {
    let dir = TempDir::new().unwrap();
    dir.child("clasp.out")
        .write_str("0.1 Answer: 1\n0.1 cycle(1,4)\n0.1 Optimization: 3\n")
        .unwrap();
    dir.child("gringo.out").write_str(GRINGO_TEXT).unwrap();
    convert_cmd(&dir, "cycle")
        .arg("-o")
        .arg("cost")
        .arg("-g")
        .arg(dir.child("gringo.out").path())
        .assert()
        .failure();
    dir.child("json").assert(predicate::path::missing());
}

#[test]
fn test_convert_cost_pred_requires_gringo_out() {
    let dir = TempDir::new().unwrap();
    dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
    convert_cmd(&dir, "cycle")
        .arg("-o")
        .arg("cost")
        .assert()
        .failure();
    dir.child("json").assert(predicate::path::missing());
}

#[test]
fn test_convert_missing_output_arg() {
    let dir = TempDir::new().unwrap();
    dir.child("clasp.out").write_str(TIMESTAMPED_LOG).unwrap();
    let mut cmd = Command::cargo_bin("aspgv").unwrap();
    cmd.arg("convert")
        .arg("-e")
        .arg("cycle")
        .arg("-c")
        .arg(dir.child("clasp.out").path())
        .assert()
        .failure();
}

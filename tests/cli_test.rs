mod common;

use assert2::{check, let_assert};
use common::{INDEX_JSON, TempIndex};
use serde_json::Value;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rustdoc-search"))
        .args(args)
        .env_remove("RUSTDOC_SEARCH_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("NEXTEST")
        .env_remove("CARGO_TARGET_TMPDIR")
        .output()
        .expect("Failed to run rustdoc-search")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn search_prints_display_and_link() {
    let temp = TempIndex::new();
    let index = temp.write("index.json", INDEX_JSON);

    let output = run(&["search", index.to_str().unwrap(), "File::open"]);
    check!(output.status.success());
    check!(
        stdout(&output)
            == "std::fs::File::open\n    https://doc.rust-lang.org/stable/std/fs/struct.File.html#method.open\n"
    );
}

#[test]
fn search_json_respects_limit() {
    let temp = TempIndex::new();
    let index = temp.write("index.json", INDEX_JSON);

    let output = run(&["search", index.to_str().unwrap(), "o", "-n", "2", "--json"]);
    check!(output.status.success());
    let_assert!(Ok(Value::Array(results)) = serde_json::from_str::<Value>(&stdout(&output)));
    check!(results.len() == 2);
    check!(results.iter().all(|r| r["display"].is_string() && r["url"].is_string()));
}

#[test]
fn search_without_results() {
    let temp = TempIndex::new();
    let index = temp.write("index.json", INDEX_JSON);

    let output = run(&["search", index.to_str().unwrap(), "\"nothing\""]);
    check!(output.status.success());
    check!(stdout(&output).starts_with("No results"));
}

#[test]
fn config_file_changes_links() {
    let temp = TempIndex::new();
    let index = temp.write("index.json", INDEX_JSON);
    let config = temp.write("search.toml", "root_url = \"https://docs.example.org\"\n");

    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "search",
        index.to_str().unwrap(),
        "'file'",
        "--json",
    ]);
    check!(output.status.success());
    let_assert!(Ok(results) = serde_json::from_str::<Value>(&stdout(&output)));
    check!(results[0]["url"] == "https://docs.example.org/std/fs/struct.File.html");
}

#[test]
fn inspect_json() {
    let temp = TempIndex::new();
    let index = temp.write("index.json", INDEX_JSON);

    let output = run(&["inspect", index.to_str().unwrap(), "--json"]);
    check!(output.status.success());
    let_assert!(Ok(stats) = serde_json::from_str::<Value>(&stdout(&output)));
    check!(stats["records"] == 20);
    check!(stats["groups"] == serde_json::json!(["std", "core"]));
    check!(stats["kinds"][0] == serde_json::json!(["mod", 1]));
}

#[test]
fn missing_index_fails() {
    let temp = TempIndex::new();
    let missing = temp.path().join("missing.json");

    let output = run(&["search", missing.to_str().unwrap(), "open"]);
    check!(!output.status.success());
    check!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}

//! End-to-end generation tests against golden Go sources.

use confit_codegen::go::{append_functions, append_imports};
use confit_codegen::{CodegenError, FormattingBuilder, generate, generate_to_file};
use confit_schema::SchemaError;
use std::process::Command;

const GUIDEBOOK_SCHEMA: &[u8] = include_bytes!("../testdata/guidebook.confit.schema.json");
const GUIDEBOOK_VALUES: &[u8] = include_bytes!("../testdata/guidebook.confit.values.json");
const GUIDEBOOK_GOLDEN: &str = include_str!("../testdata/golden/guidebook.go");
const STARSHIP_SCHEMA: &[u8] = include_bytes!("../testdata/starship.confit.schema.json");
const STARSHIP_VALUES: &[u8] = include_bytes!("../testdata/starship.confit.values.json");
const STARSHIP_GOLDEN: &str = include_str!("../testdata/golden/starship.go");
const IMPORTS_GOLDEN: &str = include_str!("../testdata/golden/append-imports.frag");
const FUNCTIONS_GOLDEN: &str = include_str!("../testdata/golden/append-functions.frag");

fn normalize_lines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

fn generate_string(schema: &[u8]) -> Result<String, CodegenError> {
    let mut buf = Vec::new();
    generate(&mut buf, schema)?;
    Ok(String::from_utf8(buf).expect("generated source is UTF-8"))
}

#[test]
fn test_append_imports_golden() {
    let mut b = FormattingBuilder::new();
    append_imports(&mut b, "packagename").expect("append imports");
    assert_eq!(b.as_str(), normalize_lines(IMPORTS_GOLDEN));
}

#[test]
fn test_append_functions_golden() {
    let mut b = FormattingBuilder::new();
    append_functions(&mut b, "TypeName").expect("append functions");
    assert_eq!(b.as_str(), normalize_lines(FUNCTIONS_GOLDEN));
}

#[test]
fn test_generate_guidebook_golden() {
    let out = generate_string(GUIDEBOOK_SCHEMA).expect("generate failed");
    assert_eq!(out, normalize_lines(GUIDEBOOK_GOLDEN));
}

#[test]
fn test_generate_starship_golden() {
    let out = generate_string(STARSHIP_SCHEMA).expect("generate failed");
    assert_eq!(out, normalize_lines(STARSHIP_GOLDEN));
}

#[test]
fn test_generate_structs() {
    let out = generate_string(GUIDEBOOK_SCHEMA).expect("generate failed");

    let checks = [
        "type Guidebook struct {",
        "type Narration struct {",
        "Britishness  float64 `json:\"Britishness\"`",
        "func New() Guidebook { return Guidebook{} }",
        "func Load(path string) (Guidebook, error)",
    ];
    for substr in checks {
        assert!(out.contains(substr), "expected output to contain {substr:?}");
    }
}

#[test]
fn test_one_struct_per_object_and_loader_for_root_only() {
    let out = generate_string(STARSHIP_SCHEMA).expect("generate failed");

    assert_eq!(out.matches(" struct {").count(), 4);
    assert_eq!(out.matches("func New()").count(), 1);
    assert_eq!(out.matches("func Load(").count(), 1);
    for nested in ["Towels", "Engine", "Improbability"] {
        assert!(!out.contains(&format!("({nested}, error)")));
    }
}

#[test]
fn test_generate_is_idempotent() {
    let first = generate_string(STARSHIP_SCHEMA).expect("generate failed");
    let second = generate_string(STARSHIP_SCHEMA).expect("generate failed");
    assert_eq!(first, second);
}

#[test]
fn test_generate_runs_in_parallel() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let schema = if i % 2 == 0 {
                    GUIDEBOOK_SCHEMA
                } else {
                    STARSHIP_SCHEMA
                };
                generate_string(schema).expect("generate failed")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().expect("thread panicked");
        let golden = if i % 2 == 0 {
            GUIDEBOOK_GOLDEN
        } else {
            STARSHIP_GOLDEN
        };
        assert_eq!(out, normalize_lines(golden));
    }
}

#[test]
fn test_missing_suffix_writes_nothing() {
    let schema = br#"{ "title": "Guidebook", "type": "object", "properties": {} }"#;
    let mut buf = Vec::new();

    let err = generate(&mut buf, schema).expect_err("missing suffix must fail");
    assert!(matches!(
        err,
        CodegenError::Schema(SchemaError::InvalidRoot { .. })
    ));
    assert!(buf.is_empty());
}

#[test]
fn test_unsupported_kind_names_field() {
    let schema = br#"{
        "title": "GuidebookConfitSchema",
        "type": "object",
        "properties": { "Towel": { "type": "null" } }
    }"#;
    let mut buf = Vec::new();

    let err = generate(&mut buf, schema).expect_err("null kind must fail");
    match err {
        CodegenError::Schema(SchemaError::UnsupportedKind { field, kind }) => {
            assert_eq!(field, "Towel");
            assert_eq!(kind, "null");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(buf.is_empty());
}

#[test]
fn test_non_ascii_field_name_writes_nothing() {
    let schema = "{
        \"title\": \"StarshipConfitSchema\",
        \"type\": \"object\",
        \"properties\": { \"Speed\u{00B2}\": { \"type\": \"number\" } }
    }";
    let mut buf = Vec::new();

    let err = generate(&mut buf, schema.as_bytes()).expect_err("non-ASCII field must fail");
    assert!(matches!(
        err,
        CodegenError::Schema(SchemaError::InvalidIdentifier { .. })
    ));
    assert!(buf.is_empty());
}

#[test]
fn test_generate_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_path = dir.path().join("guidebook.confit.schema.json");
    let out_path = dir.path().join("guidebook.go");
    std::fs::write(&schema_path, GUIDEBOOK_SCHEMA).expect("write schema");

    generate_to_file(&schema_path, &out_path).expect("generate to file");

    let written = std::fs::read_to_string(&out_path).expect("read output");
    assert_eq!(written, normalize_lines(GUIDEBOOK_GOLDEN));
}

#[test]
fn test_values_files_match_schema_keys() {
    let values: serde_json::Value =
        serde_json::from_slice(GUIDEBOOK_VALUES).expect("guidebook values parse");
    let ir = confit_schema::resolve_schema(GUIDEBOOK_SCHEMA).expect("resolve");
    let object = values.as_object().expect("values root is an object");
    for field in &ir.root().expect("root type").fields {
        assert!(object.contains_key(&field.key), "missing key {}", field.key);
    }

    let values: serde_json::Value =
        serde_json::from_slice(STARSHIP_VALUES).expect("starship values parse");
    assert!(values.get("Crew").is_some());
}

fn go_available() -> bool {
    Command::new("go")
        .arg("version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

const MAIN_GO: &str = r#"package main

import (
	"fmt"

	"hhgttg/internal/confit/guidebook"
	"hhgttg/internal/confit/starship"
)

func main() {
	g, err := guidebook.Load("guidebook.confit.values.json")
	if err != nil {
		panic(err)
	}
	s, err := starship.Load("starship.confit.values.json")
	if err != nil {
		panic(err)
	}
	fmt.Println("THEME:", g.Display.Theme)
	fmt.Println("BRITISHNESS:", g.Narration.Britishness)
	fmt.Println("CREW:", s.Crew)
	fmt.Println("TOWEL:", s.Towels[0].Owner)
	fmt.Println("ZERO:", guidebook.New().Display.Theme == "")
}
"#;

#[test]
#[ignore = "requires a Go toolchain"]
fn test_generated_code_round_trips_values() {
    if !go_available() {
        eprintln!("skipping: `go` not found on PATH");
        return;
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    std::fs::write(root.join("go.mod"), "module hhgttg\n\ngo 1.21\n").expect("write go.mod");
    std::fs::write(root.join("main.go"), MAIN_GO).expect("write main.go");
    std::fs::write(root.join("guidebook.confit.values.json"), GUIDEBOOK_VALUES)
        .expect("write values");
    std::fs::write(root.join("starship.confit.values.json"), STARSHIP_VALUES)
        .expect("write values");

    for (package, schema) in [("guidebook", GUIDEBOOK_SCHEMA), ("starship", STARSHIP_SCHEMA)] {
        let package_dir = root.join("internal").join("confit").join(package);
        std::fs::create_dir_all(&package_dir).expect("create package dir");
        let source = generate_string(schema).expect("generate failed");
        std::fs::write(package_dir.join(format!("{package}.go")), source).expect("write source");
    }

    let output = Command::new("go")
        .args(["run", "."])
        .current_dir(root)
        .output()
        .expect("run go");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "go run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("THEME: panic-free-blue"), "got: {stdout}");
    assert!(stdout.contains("Ford Prefect"), "got: {stdout}");
    assert!(stdout.contains("ZERO: true"), "got: {stdout}");
}

//! End-to-end analysis of on-disk projects.

use ngv_config::AnalyzerOptions;
use ngv_graph::{ActionExport, NodeKind, ReferenceExport, Usage, decode};
use tempfile::TempDir;

use super::test_helpers::*;
use crate::{AnalysisError, analyze};

fn reference(file: &str, line: u32, usages: Vec<Usage>) -> ReferenceExport {
    ReferenceExport {
        file_path: file.to_string(),
        line,
        usages,
    }
}

fn find<'a>(actions: &'a [ActionExport], name: &str) -> &'a ActionExport {
    actions
        .iter()
        .find(|action| action.name == name)
        .unwrap_or_else(|| panic!("action {name} not exported"))
}

#[test]
fn analyzes_todo_feature() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_todo_project(&temp);

    let result = analyze(&options_for(&root)).expect("analysis succeeds");
    assert_eq!(result.files_parsed, 5);
    assert_eq!(result.files_skipped, 0);

    let names: Vec<&str> = result.actions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["TodoActionTypes.ADD", "TodoActionTypes.REMOVE", "[Todo] Saved"]
    );

    let add = find(&result.actions, "TodoActionTypes.ADD");
    assert_eq!(add.file_path, "src/app/todo.actions.ts");
    assert_eq!(add.line, 6);
    assert_eq!(
        add.references,
        vec![
            reference(
                "src/app/todo.component.ts",
                8,
                vec![
                    Usage::Instantiate,
                    Usage::Method {
                        name: "add".to_string()
                    }
                ]
            ),
            reference(
                "src/app/todo.effects.ts",
                8,
                vec![Usage::Effect {
                    name: "save$".to_string()
                }]
            ),
            reference("src/app/todo.reducer.ts", 5, vec![Usage::Reducer]),
        ]
    );

    let remove = find(&result.actions, "TodoActionTypes.REMOVE");
    assert_eq!(remove.line, 11);
    assert_eq!(remove.references.len(), 2);

    let saved = find(&result.actions, "[Todo] Saved");
    assert_eq!(
        saved.references,
        vec![
            reference(
                "src/app/todo.effects.ts",
                3,
                vec![Usage::Effect {
                    name: "save$".to_string()
                }]
            ),
            reference(
                "src/app/todo.effects.ts",
                9,
                vec![
                    Usage::Instantiate,
                    Usage::Effect {
                        name: "save$".to_string()
                    }
                ]
            ),
        ]
    );
}

#[test]
fn excluded_files_contribute_no_references() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_todo_project(&temp);

    let result = analyze(&options_for(&root)).unwrap();
    let all_files: Vec<&str> = result
        .actions
        .iter()
        .flat_map(|a| a.references.iter().map(|r| r.file_path.as_str()))
        .collect();
    assert!(!all_files.contains(&"src/app/todo.spec.ts"));

    let options = AnalyzerOptions {
        exclude: None,
        ..options_for(&root)
    };
    let result = analyze(&options).unwrap();
    let add = find(&result.actions, "TodoActionTypes.ADD");
    assert!(
        add.references
            .iter()
            .any(|r| r.file_path == "src/app/todo.spec.ts" && r.line == 5)
    );
}

#[test]
fn empty_ref_keeps_bare_references() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_todo_project(&temp);

    let options = AnalyzerOptions {
        empty_ref: true,
        ..options_for(&root)
    };
    let result = analyze(&options).unwrap();
    let add = find(&result.actions, "TodoActionTypes.ADD");

    // The type alias in the actions file names the class without any context.
    assert!(
        add.references
            .iter()
            .any(|r| r.file_path == "src/app/todo.actions.ts" && r.line == 24 && r.usages.is_empty())
    );
}

#[test]
fn actions_outside_actions_files_are_ignored() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("src/todo.actions.ts", "export class Add { readonly type = '[Todo] Add'; }"),
            ("src/other.ts", "export class Stray { readonly type = '[Other] Stray'; }"),
        ],
    );

    let result = analyze(&options_for(&root)).unwrap();
    let names: Vec<&str> = result.actions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["[Todo] Add"]);

    let everything = AnalyzerOptions {
        actions: None,
        ..options_for(&root)
    };
    assert_eq!(analyze(&everything).unwrap().actions.len(), 2);
}

#[test]
fn unparsable_files_are_skipped_with_a_warning() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_test_project(
        &temp,
        &[
            ("src/todo.actions.ts", "export class Add { readonly type = '[Todo] Add'; }"),
            ("src/broken.ts", "export class Broken {"),
        ],
    );

    let result = analyze(&options_for(&root)).unwrap();
    assert_eq!(result.files_parsed, 1);
    assert_eq!(result.files_skipped, 1);
    assert!(result.has_warnings());
    assert!(result.warnings[0].contains("broken.ts"));
    assert_eq!(result.actions.len(), 1);
}

#[test]
fn empty_folder_yields_no_actions() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let result = analyze(&AnalyzerOptions::for_folder(temp.path())).unwrap();
    assert!(result.actions.is_empty());
    assert_eq!(result.to_json().unwrap(), "[]");
}

#[test]
fn missing_folder_is_reported() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let err = analyze(&AnalyzerOptions::for_folder(temp.path().join("missing"))).unwrap_err();
    assert!(matches!(err, AnalysisError::FolderNotFound(_)));
}

#[test]
fn invalid_pattern_is_a_config_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let options = AnalyzerOptions {
        actions: Some("(".to_string()),
        ..AnalyzerOptions::for_folder(temp.path())
    };
    assert!(matches!(analyze(&options), Err(AnalysisError::Config(_))));
}

#[test]
fn exported_analysis_builds_a_graph() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = create_todo_project(&temp);
    let result = analyze(&options_for(&root)).unwrap();

    let graph = decode(result.actions, 1);
    let count = |kind: NodeKind| graph.nodes.iter().filter(|n| n.kind == kind).count();

    assert_eq!(count(NodeKind::Action), 3);
    assert_eq!(count(NodeKind::Reducer), 1);
    assert_eq!(count(NodeKind::Effect), 1);
    assert_eq!(count(NodeKind::Method), 2);
    // The effect both emits `[Todo] Saved` and is reached from its import.
    assert_eq!(graph.links.len(), 7);

    let reducer = graph
        .nodes
        .iter()
        .find(|n| n.kind == NodeKind::Reducer)
        .unwrap();
    assert_eq!(reducer.id, "Reducer::src/app/todo.reducer.ts");
    assert_eq!(reducer.name, "todo.reducer.ts");
}

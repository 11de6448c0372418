#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use upass_diagnostic::Diagnostic;

use super::*;
use crate::test_helpers::{three_node_manager, NoopPlugin, StampOne, UpperPlugin};

fn registry() -> PassRegistry {
    let mut registry = PassRegistry::new();
    let mut diags = Vec::<Diagnostic>::new();
    registry.register_plugin::<NoopPlugin>(&mut diags);
    registry.register_plugin::<UpperPlugin>(&mut diags);
    registry.register_plugin::<StampOne>(&mut diags);
    assert!(diags.is_empty());
    registry
}

#[test]
fn test_builder_keeps_order() {
    let pipeline = Pipeline::new().add("upper").add_all(&["noop", "upper"]);
    assert_eq!(pipeline.names(), &["upper", "noop", "upper"]);
    assert_eq!(pipeline.len(), 3);
    assert!(Pipeline::new().is_empty());
}

#[test]
fn test_runs_each_pass_in_order() {
    let registry = registry();
    let mut manager = three_node_manager();
    let runs = Pipeline::new()
        .add_all(&["upper", "fold_const", "noop"])
        .run(&registry, &mut manager, &DriverConfig::default())
        .unwrap();

    let names: Vec<&str> = runs.iter().map(|run| run.name.as_str()).collect();
    assert_eq!(names, vec!["upper", "fold_const", "noop"]);
    assert!(runs.iter().all(|run| run.stats.visited == 3));
    assert_eq!(manager.tree().dump(), "stmts \"one\"\n  assign \"X\"\n  plus\n");
}

#[test]
fn test_unknown_name_runs_nothing() {
    let registry = registry();
    let mut manager = three_node_manager();
    let before = manager.tree().dump();
    let err = Pipeline::new()
        .add("upper")
        .add("fold_constants")
        .run(&registry, &mut manager, &DriverConfig::default())
        .unwrap_err();

    assert_eq!(err, PipelineError::UnknownPass("fold_constants".to_owned()));
    assert_eq!(err.to_string(), "unknown upass `fold_constants`");
    assert_eq!(manager.tree().dump(), before);
}

#[test]
fn test_traversal_error_names_the_pass() {
    let registry = registry();
    let mut manager = three_node_manager();
    let err = Pipeline::new()
        .add("upper")
        .add("noop")
        .run(&registry, &mut manager, &DriverConfig::with_budget(1))
        .unwrap_err();

    assert_eq!(
        err,
        PipelineError::Traversal {
            pass: "upper".to_owned(),
            source: TraversalError::BudgetExceeded { budget: 1 },
        }
    );
    assert_eq!(
        err.to_string(),
        "upass `upper` failed: traversal exceeded its budget of 1 node visits"
    );
}

#[test]
fn test_empty_pipeline_is_a_no_op() {
    let registry = registry();
    let mut manager = three_node_manager();
    let runs = Pipeline::new()
        .run(&registry, &mut manager, &DriverConfig::default())
        .unwrap();
    assert!(runs.is_empty());
}

#[test]
fn test_resolve_reports_first_unknown() {
    let registry = registry();
    let pipeline = Pipeline::new().add_all(&["nope", "noop", "also_nope"]);
    assert_eq!(
        pipeline.resolve(&registry).unwrap_err(),
        PipelineError::UnknownPass("nope".to_owned())
    );
    let ok = Pipeline::new().add("noop");
    assert_eq!(ok.resolve(&registry).unwrap().len(), 1);
}

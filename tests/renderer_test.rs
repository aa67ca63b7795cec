//! Integration tests for the tree and DOT renderers

use std::collections::HashMap;

use dep_carousel::cli::ExpansionMode;
use dep_carousel::error::CarouselError;
use dep_carousel::graph::{DependencyGraph, GraphBuilder, GraphRenderer};
use dep_carousel::source::{DependencySource, DirectDependency};
use pretty_assertions::assert_eq;

struct StaticSource {
    packages: HashMap<String, Vec<(String, String)>>,
}

impl StaticSource {
    fn new(entries: &[(&str, &[(&str, &str)])]) -> Self {
        let packages = entries
            .iter()
            .map(|(name, deps)| {
                (
                    name.to_string(),
                    deps.iter()
                        .map(|(dep, constraint)| (dep.to_string(), constraint.to_string()))
                        .collect(),
                )
            })
            .collect();
        Self { packages }
    }
}

impl DependencySource for StaticSource {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<DirectDependency>, CarouselError> {
        Ok(self
            .packages
            .get(package)
            .map(|deps| {
                deps.iter()
                    .map(|(name, constraint)| DirectDependency {
                        name: name.clone(),
                        constraint: constraint.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn render_tree(graph: &DependencyGraph, start: &str) -> String {
    let mut out = Vec::new();
    GraphRenderer::new()
        .render_tree(graph, start, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn render_dot(graph: &DependencyGraph, start: &str, cycle_detected: bool) -> String {
    let mut out = Vec::new();
    GraphRenderer::new()
        .render_dot(graph, start, 3, cycle_detected, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_tree_connectors_and_constraint_labels() {
    let source = StaticSource::new(&[
        ("A", &[("B", "^1.0.0"), ("C", "*")]),
        ("C", &[("B", "~2.1.0")]),
    ]);
    let result = GraphBuilder::new(&source, 3, ExpansionMode::Tree).build("A", None);

    let rendered = render_tree(&result.graph, "A");
    let expected = "\
└── A
    ├── B (^1.0.0)
    └── C
        └── B (~2.1.0)
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_tree_vertical_bars_for_middle_children() {
    let source = StaticSource::new(&[
        ("root", &[("mid", "*"), ("tail", "*")]),
        ("mid", &[("leaf", "*")]),
    ]);
    let result = GraphBuilder::new(&source, 3, ExpansionMode::Tree).build("root", None);

    let rendered = render_tree(&result.graph, "root");
    let expected = "\
└── root
    ├── mid
    │   └── leaf
    └── tail
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_tree_repeats_shared_subtrees_per_occurrence() {
    let source = StaticSource::new(&[
        ("A", &[("B", "*"), ("C", "*")]),
        ("B", &[("D", "*")]),
        ("C", &[("B", "*")]),
    ]);
    let result = GraphBuilder::new(&source, 5, ExpansionMode::Tree).build("A", None);

    let rendered = render_tree(&result.graph, "A");

    // B's edge list was stored once per parent edge, so each occurrence
    // shows both copies
    let expected = "\
└── A
    ├── B
    │   ├── D
    │   └── D
    └── C
        └── B
            ├── D
            └── D
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_tree_names_match_reachable_nodes() {
    let source = StaticSource::new(&[
        ("A", &[("B", "*"), ("C", "*")]),
        ("B", &[]),
        ("C", &[("B", "*")]),
    ]);
    let result = GraphBuilder::new(&source, 3, ExpansionMode::Tree).build("A", None);

    let rendered = render_tree(&result.graph, "A");
    let mut rendered_names: Vec<&str> = rendered
        .lines()
        .map(|line| line.trim_start_matches([' ', '│', '├', '└', '─']))
        .collect();
    rendered_names.sort_unstable();

    // B is reachable through two parents and appears once per occurrence
    assert_eq!(rendered_names, vec!["A", "B", "B", "C"]);
}

#[test]
fn test_dot_document_structure() {
    let source = StaticSource::new(&[
        ("A", &[("B", "^1.0.0"), ("C", "*")]),
        ("C", &[("B", "~2.1.0")]),
    ]);
    let result = GraphBuilder::new(&source, 3, ExpansionMode::Tree).build("A", None);

    let dot = render_dot(&result.graph, "A", false);

    assert!(dot.starts_with("digraph dependency_graph {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("rankdir=TB;"));
    assert!(dot.contains("// packages: 3"));

    // Start node carries the distinct fill; other nodes are plain
    assert!(
        dot.contains(r##""A" [fillcolor="#FFF3E0", color="#F57C00", style="filled,bold"];"##)
    );
    assert!(dot.contains("    \"B\";\n"));
    assert!(dot.contains("    \"C\";\n"));

    // One edge declaration per recorded edge, constraint as label
    assert!(dot.contains(r#""A" -> "B" [label="^1.0.0"];"#));
    assert!(dot.contains(r#""A" -> "C" [label="*"];"#));
    assert!(dot.contains(r#""C" -> "B" [label="~2.1.0"];"#));
}

#[test]
fn test_dot_nodes_are_deduplicated_by_identity() {
    let source = StaticSource::new(&[
        ("A", &[("B", "*"), ("C", "*")]),
        ("B", &[("D", "*")]),
        ("C", &[("B", "*")]),
    ]);
    let result = GraphBuilder::new(&source, 5, ExpansionMode::Tree).build("A", None);

    let dot = render_dot(&result.graph, "A", false);

    // B appears in two expansion paths but is declared once
    assert_eq!(dot.matches("    \"B\";\n").count(), 1);
    assert!(dot.contains("// packages: 4"));
}

#[test]
fn test_dot_cycle_note_follows_cycle_flag() {
    let source = StaticSource::new(&[("A", &[("B", "*")]), ("B", &[("A", "*")])]);
    let result = GraphBuilder::new(&source, 5, ExpansionMode::Tree).build("A", None);

    let with_note = render_dot(&result.graph, "A", result.cycle_detected());
    assert!(with_note.contains("cyclic dependencies detected"));

    let without_note = render_dot(&result.graph, "A", false);
    assert!(!without_note.contains("cyclic dependencies detected"));
}

#[test]
fn test_dot_quotes_scoped_package_names() {
    let source = StaticSource::new(&[("@scope/app", &[("@scope/lib", "^2.0.0")])]);
    let result = GraphBuilder::new(&source, 3, ExpansionMode::Tree).build("@scope/app", None);

    let dot = render_dot(&result.graph, "@scope/app", false);
    assert!(dot.contains(r#""@scope/app" -> "@scope/lib" [label="^2.0.0"];"#));
}

use std::path::Path;

use skosgraph::{Config, GraphSession, parse_document};

fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("fixture read failed")
}

fn session_for(name: &str) -> GraphSession {
    let document = parse_document(&load_fixture(name)).expect("parse failed");
    GraphSession::new(&document, "fr", &Config::default())
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
    assert!(!svg.contains("NaN"), "{fixture}: NaN leaked into markup");
}

#[test]
fn renders_thesaurus_fixture() {
    let mut session = session_for("thesaurus.json");
    session.run_layout(300);
    let svg = session.render_svg();
    assert_valid_svg(&svg, "thesaurus.json");

    // Concept labels in the requested language.
    for label in ["animal", "chat", "chien"] {
        assert!(svg.contains(label), "missing concept label {label}");
    }
    // The Latin-only concept has no @fr entry and renders an empty label.
    assert!(!svg.contains("felis catus"));

    // Relation labels come from the display dictionary.
    assert!(svg.contains("Terme Spécifique"));
    assert!(svg.contains("Alignement Exact"));
    // skos__related is not in the allow-list.
    assert!(!svg.contains("Terme Associé"));

    // Thesaurus containers are never drawn.
    assert!(!svg.contains(">http://opentheso.example.org/th21<"));
    assert!(!svg.contains(">http://vocab.example.org/th9<"));
}

#[test]
fn filtering_invariants_hold() {
    let session = session_for("thesaurus.json");
    let model = session.model();

    // Exclusion invariant: no drawn node is a membership-edge target.
    for node in &model.nodes {
        assert!(
            model
                .membership
                .iter()
                .all(|edge| edge.target_uri != node.uri),
            "container rendered: {}",
            node.uri
        );
    }

    // Referential integrity: the dangling skos__narrower edge was dropped.
    assert_eq!(model.nodes.len(), 4);
    assert_eq!(model.links.len(), 3);
    for link in &model.links {
        assert!(link.source < model.nodes.len());
        assert!(link.target < model.nodes.len());
    }
}

#[test]
fn layout_separates_linked_nodes() {
    let mut session = session_for("thesaurus.json");
    session.run_layout(300);
    let positions = session.positions();
    let model = session.model();

    for link in &model.links {
        let a = positions[link.source];
        let b = positions[link.target];
        let distance = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
        assert!(
            distance > 60.0,
            "linked nodes overlap after layout: {distance}"
        );
        assert!(a.x.is_finite() && a.y.is_finite());
        assert!(b.x.is_finite() && b.y.is_finite());
    }
}

#[test]
fn no_relationships_still_renders_nodes() {
    let mut session = session_for("no_relationships.json");
    session.run_layout(300);
    assert!(session.model().links.is_empty());
    assert_eq!(session.model().nodes.len(), 2);

    let svg = session.render_svg();
    assert_valid_svg(&svg, "no_relationships.json");
    assert!(svg.contains("isolé"));
    assert!(svg.contains("seul"));
    assert!(!svg.contains("<path id=\"link-"));
}

#[test]
fn label_toggle_is_idempotent() {
    let mut session = session_for("thesaurus.json");
    session.run_layout(50);
    let hidden = session.render_svg();
    assert!(hidden.contains("class=\"hide-label\""));

    session.set_labels_hidden(false);
    assert!(!session.render_svg().contains("class=\"hide-label\""));

    session.set_labels_hidden(true);
    assert_eq!(session.render_svg(), hidden);
}

#[test]
fn layout_is_reproducible() {
    let mut first = session_for("thesaurus.json");
    let mut second = session_for("thesaurus.json");
    first.run_layout(300);
    second.run_layout(300);
    assert_eq!(first.render_svg(), second.render_svg());
}

#[test]
fn export_markup_is_serializable_verbatim() {
    let mut session = session_for("thesaurus.json");
    session.run_layout(50);
    let svg = session.render_svg();
    let dir = std::env::temp_dir().join("skosgraph-test-export");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("graph.svg");
    skosgraph::render::write_output_svg(&svg, Some(&path)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), svg);
}

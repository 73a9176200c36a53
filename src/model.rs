use crate::parser::RawDocument;
use std::collections::{HashMap, HashSet};

/// Relationship labels that become renderable links.
pub const LINK_RELATIONS: [&str; 2] = ["skos__narrower", "skos__exactMatch"];

/// Relationship label marking thesaurus membership. Never rendered as a
/// link; its targets are thesaurus containers and are not drawn at all.
pub const MEMBERSHIP_RELATION: &str = "skos__inScheme";

/// Classification label identifying concept nodes.
pub const CONCEPT_CLASS: &str = "skos__Concept";

/// Property carrying the language-tagged preferred labels of a concept.
pub const PREF_LABEL_PROPERTY: &str = "skos__prefLabel";

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub uri: String,
    /// Classification labels from the export, e.g. `skos__Concept`.
    pub classes: Vec<String>,
    /// `value@langTag` strings, in export order.
    pub pref_labels: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Link {
    pub source_id: String,
    pub target_id: String,
    /// Indices into [`GraphModel::nodes`], bound at build time.
    pub source: usize,
    pub target: usize,
    pub relation: String,
    /// Stable SVG element id anchoring the link's `<textPath>` label.
    pub element_id: String,
}

/// Edge from a member node to the thesaurus container it belongs to.
#[derive(Debug, Clone)]
pub struct MembershipEdge {
    pub source_uri: String,
    pub target_uri: String,
}

/// The filtered, renderable graph. Node and link sets are fixed after
/// [`GraphModel::build`]; only simulation bodies mutate afterwards.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub membership: Vec<MembershipEdge>,
}

impl GraphModel {
    /// Filters a raw export down to the renderable graph.
    ///
    /// Order of operations matters: membership targets are collected first
    /// so that thesaurus containers never enter the node set, then links are
    /// bound by id lookup, dropping any link whose endpoint was excluded or
    /// never existed.
    pub fn build(document: &RawDocument) -> Self {
        let membership: Vec<MembershipEdge> = document
            .thesaurus
            .iter()
            .filter(|rel| rel.kind == "relationship")
            .map(|rel| MembershipEdge {
                source_uri: rel.start.properties.uri.clone(),
                target_uri: rel.end.properties.uri.clone(),
            })
            .collect();

        // Thesaurus containers: targets of any membership-labelled edge,
        // wherever the export put it.
        let excluded: HashSet<&str> = document
            .relationships
            .iter()
            .chain(document.thesaurus.iter())
            .filter(|rel| rel.kind == "relationship" && rel.label == MEMBERSHIP_RELATION)
            .map(|rel| rel.end.properties.uri.as_str())
            .collect();

        let mut nodes = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for raw in &document.nodes {
            if raw.kind != "node" {
                continue;
            }
            if excluded.contains(raw.properties.uri.as_str()) {
                continue;
            }
            let id = raw.id.to_string();
            index.entry(id.clone()).or_insert_with(|| {
                nodes.push(Node {
                    id,
                    uri: raw.properties.uri.clone(),
                    classes: raw.labels.clone(),
                    pref_labels: raw.properties.string_values(PREF_LABEL_PROPERTY),
                });
                nodes.len() - 1
            });
        }

        let mut links = Vec::new();
        for raw in &document.relationships {
            if raw.kind != "relationship" {
                continue;
            }
            if !LINK_RELATIONS.contains(&raw.label.as_str()) {
                continue;
            }
            let source_id = raw.start.id.to_string();
            let target_id = raw.end.id.to_string();
            // Links whose endpoint was excluded or never exported are
            // dropped silently.
            let (Some(&source), Some(&target)) = (index.get(&source_id), index.get(&target_id))
            else {
                continue;
            };
            let element_id = format!("link-{}", links.len());
            links.push(Link {
                source_id,
                target_id,
                source,
                target,
                relation: raw.label.clone(),
                element_id,
            });
        }

        GraphModel {
            nodes,
            links,
            membership,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    fn fixture() -> RawDocument {
        parse_document(
            r#"{
                "nodes": [
                    {"type": "node", "id": 1, "labels": ["skos__Concept"],
                     "properties": {"uri": "http://ex.org/c1", "skos__prefLabel": ["un@fr"]}},
                    {"type": "node", "id": 2, "labels": ["skos__Concept"],
                     "properties": {"uri": "http://ex.org/c2", "skos__prefLabel": ["deux@fr"]}},
                    {"type": "node", "id": 3, "labels": ["skos__ConceptScheme"],
                     "properties": {"uri": "http://ex.org/theso1"}},
                    {"type": "comment", "id": 9, "labels": [], "properties": {"uri": "x"}}
                ],
                "relationships": [
                    {"type": "relationship", "label": "skos__narrower",
                     "start": {"id": 1, "properties": {"uri": "http://ex.org/c1"}},
                     "end": {"id": 2, "properties": {"uri": "http://ex.org/c2"}}},
                    {"type": "relationship", "label": "skos__related",
                     "start": {"id": 1, "properties": {"uri": "http://ex.org/c1"}},
                     "end": {"id": 2, "properties": {"uri": "http://ex.org/c2"}}},
                    {"type": "relationship", "label": "skos__exactMatch",
                     "start": {"id": 2, "properties": {"uri": "http://ex.org/c2"}},
                     "end": {"id": 7, "properties": {"uri": "http://ex.org/missing"}}},
                    {"type": "relationship", "label": "skos__inScheme",
                     "start": {"id": 1, "properties": {"uri": "http://ex.org/c1"}},
                     "end": {"id": 3, "properties": {"uri": "http://ex.org/theso1"}}}
                ],
                "thesaurus": [
                    {"type": "relationship", "label": "skos__inScheme",
                     "start": {"id": 1, "properties": {"uri": "http://ex.org/c1"}},
                     "end": {"id": 3, "properties": {"uri": "http://ex.org/theso1"}}},
                    {"type": "relationship", "label": "skos__inScheme",
                     "start": {"id": 2, "properties": {"uri": "http://ex.org/c2"}},
                     "end": {"id": 3, "properties": {"uri": "http://ex.org/theso1"}}}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn thesaurus_containers_are_excluded() {
        let model = GraphModel::build(&fixture());
        let container_uris: Vec<&str> = model
            .membership
            .iter()
            .map(|edge| edge.target_uri.as_str())
            .collect();
        for node in &model.nodes {
            assert!(
                !container_uris.contains(&node.uri.as_str()),
                "container drawn as node: {}",
                node.uri
            );
        }
        assert_eq!(model.nodes.len(), 2);
    }

    #[test]
    fn links_keep_referential_integrity() {
        let model = GraphModel::build(&fixture());
        // skos__related is not in the allow-list, the exactMatch link dangles.
        assert_eq!(model.links.len(), 1);
        for link in &model.links {
            assert!(link.source < model.nodes.len());
            assert!(link.target < model.nodes.len());
        }
        assert_eq!(model.links[0].relation, "skos__narrower");
        assert_eq!(model.links[0].element_id, "link-0");
    }

    #[test]
    fn membership_sources_stay_drawn() {
        let model = GraphModel::build(&fixture());
        assert!(model.nodes.iter().any(|n| n.uri == "http://ex.org/c1"));
        assert!(
            model
                .membership
                .iter()
                .any(|e| e.source_uri == "http://ex.org/c1")
        );
    }

    #[test]
    fn non_node_records_are_filtered() {
        let model = GraphModel::build(&fixture());
        assert!(model.nodes.iter().all(|n| n.uri != "x"));
    }

    #[test]
    fn empty_graph_is_valid() {
        let doc = parse_document(r#"{"nodes": [], "relationships": [], "thesaurus": []}"#).unwrap();
        let model = GraphModel::build(&doc);
        assert!(model.is_empty());
        assert!(model.links.is_empty());
    }

    #[test]
    fn document_without_relationships_keeps_nodes() {
        let doc = parse_document(
            r#"{"nodes": [{"type": "node", "id": 1, "labels": [], "properties": {"uri": "u1"}}],
                "relationships": [], "thesaurus": []}"#,
        )
        .unwrap();
        let model = GraphModel::build(&doc);
        assert_eq!(model.nodes.len(), 1);
        assert!(model.links.is_empty());
    }
}

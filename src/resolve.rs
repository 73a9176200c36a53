use crate::model::MembershipEdge;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Palette category for nodes without any thesaurus membership.
pub const NO_THESAURUS: &str = "no-thesaurus-associated";

static RELATION_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("skos__broader", "Terme Générique"),
        ("skos__narrower", "Terme Spécifique"),
        ("skos__exactMatch", "Alignement Exact"),
        ("skos__related", "Terme Associé"),
        ("ns0__isReplacedBy", "Est replacé par"),
        ("ns0__replaces", "Remplace"),
        ("ns2__memberOf", "Membre de"),
    ])
});

static RELATION_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("skos__broader", "#ED4E8F"),
        ("skos__narrower", "#ED4E8F"),
        ("skos__exactMatch", "#8A2BE2"),
        ("skos__related", "#7BC043"),
        ("ns0__isReplacedBy", "#35AB66"),
        ("ns0__replaces", "#35AB66"),
        ("ns2__memberOf", "#9ED5FA"),
    ])
});

/// Resolves the thesaurus a node belongs to, for coloring.
///
/// First membership edge in export order wins; nodes without one fall into
/// the [`NO_THESAURUS`] category, which gets its own stable palette slot.
pub fn resolve_home<'a>(membership: &'a [MembershipEdge], node_uri: &str) -> &'a str {
    membership
        .iter()
        .find(|edge| edge.source_uri == node_uri)
        .map(|edge| edge.target_uri.as_str())
        .unwrap_or(NO_THESAURUS)
}

/// Picks the first `value@tag` entry whose tag equals `language` exactly and
/// returns the bare value, or "" when nothing matches.
///
/// Untagged values never match: a tag is required. This silently drops
/// untagged fallback labels, which is the documented behavior.
pub fn resolve_label(values: &[String], language: &str) -> String {
    for value in values {
        let mut parts = value.split('@');
        let text = parts.next().unwrap_or("");
        if parts.next() == Some(language) {
            return text.to_string();
        }
    }
    String::new()
}

/// Human-readable display name for a relation label; unknown labels pass
/// through unchanged.
pub fn relation_display_name<'a>(label: &'a str) -> &'a str {
    RELATION_NAMES.get(label).copied().unwrap_or(label)
}

/// Stroke color for a relation label; unknown labels render black.
pub fn relation_color(label: &str) -> &'static str {
    RELATION_COLORS.get(label).copied().unwrap_or("#000000")
}

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while turning raw JSON into a [`RawDocument`].
///
/// Anything else that can go wrong downstream (dangling links, unknown
/// relation labels, missing language tags) is handled permissively and is
/// deliberately not represented here.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document is missing the `{0}` collection")]
    MissingCollection(&'static str),
}

/// Node identifiers in Neo4j-style exports are either integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl Default for RawId {
    fn default() -> Self {
        RawId::Text(String::new())
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{n}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// Property bag attached to nodes and relationship endpoints. `uri` is the
/// only field every record carries; the rest (language-tagged label arrays,
/// notations, dates) stays untyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProperties {
    #[serde(default)]
    pub uri: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RawProperties {
    /// Returns the string entries of an array-valued property, in order.
    /// Non-array and non-string values yield an empty list.
    pub fn string_values(&self, field: &str) -> Vec<String> {
        self.extra
            .get(field)
            .and_then(|value| value.as_array())
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: RawId,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: RawProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEndpoint {
    #[serde(default)]
    pub id: RawId,
    #[serde(default)]
    pub properties: RawProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRelationship {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub start: RawEndpoint,
    #[serde(default)]
    pub end: RawEndpoint,
}

/// The export as produced by the thesaurus backend: graph nodes, semantic
/// relationships, and thesaurus-membership relationships as three flat
/// ordered collections.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub nodes: Vec<RawNode>,
    pub relationships: Vec<RawRelationship>,
    pub thesaurus: Vec<RawRelationship>,
}

/// Parses a JSON export. All three collections must be present; records with
/// unexpected `type` tags are kept here and filtered out during model build.
pub fn parse_document(input: &str) -> Result<RawDocument, InputError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    for key in ["nodes", "relationships", "thesaurus"] {
        if value.get(key).is_none() {
            return Err(InputError::MissingCollection(key));
        }
    }
    Ok(serde_json::from_value(value)?)
}

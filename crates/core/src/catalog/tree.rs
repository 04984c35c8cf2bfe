//! The recursive catalog data model.
//!
//! The remote document is an arbitrarily nested JSON mapping. Each value is
//! classified exactly once, when the tree is built; navigation afterwards
//! only ever sees the closed set of [`CatalogNode`] variants.

use serde_json::Value;

use super::CatalogError;

/// A single link with an optional free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: String,
    pub description: Option<String>,
}

/// A node of the catalog tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogNode {
    /// Labelled children, in document order.
    Folder(Vec<(String, CatalogNode)>),
    /// A single link.
    Link(LinkEntry),
    /// Several links sharing one label.
    LinkList(Vec<LinkEntry>),
}

/// What a child is, for menu rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    Link,
    List(usize),
}

impl CatalogNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            CatalogNode::Folder(_) => NodeKind::Folder,
            CatalogNode::Link(_) => NodeKind::Link,
            CatalogNode::LinkList(links) => NodeKind::List(links.len()),
        }
    }

    /// True for nodes that resolve to links rather than further menus.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CatalogNode::Folder(_))
    }

    /// Labels and kinds of a folder's children, in document order. Empty
    /// for terminal nodes.
    pub fn entries(&self) -> Vec<(&str, NodeKind)> {
        match self {
            CatalogNode::Folder(children) => children
                .iter()
                .map(|(label, node)| (label.as_str(), node.kind()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Resolve a child by label.
    pub fn select(&self, label: &str) -> Result<&CatalogNode, CatalogError> {
        match self {
            CatalogNode::Folder(children) => children
                .iter()
                .find(|(l, _)| l == label)
                .map(|(_, node)| node)
                .ok_or_else(|| CatalogError::NotFound(label.to_string())),
            _ => Err(CatalogError::NotFound(label.to_string())),
        }
    }

    /// The links of a terminal node. A single [`CatalogNode::Link`] is
    /// viewed as a one-element list.
    pub fn links(&self) -> &[LinkEntry] {
        match self {
            CatalogNode::Link(entry) => std::slice::from_ref(entry),
            CatalogNode::LinkList(links) => links,
            CatalogNode::Folder(_) => &[],
        }
    }
}

/// An immutable catalog tree, rebuilt atomically from each fetched or
/// cached payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTree {
    root: CatalogNode,
}

impl CatalogTree {
    /// Build a tree from a raw JSON document. The document root must be a
    /// mapping of labels; values are classified recursively.
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let root = classify(value)?;
        match root {
            CatalogNode::Folder(_) => Ok(Self { root }),
            _ => Err(CatalogError::MalformedPayload(
                "catalog root must be a mapping of labels".to_string(),
            )),
        }
    }

    pub fn root(&self) -> &CatalogNode {
        &self.root
    }
}

/// Classify a raw value into exactly one node variant.
///
/// The order of the checks is significant: a mapping carrying a `url` key
/// is a link even if it would also parse as a folder, so the url check must
/// come first.
fn classify(value: &Value) -> Result<CatalogNode, CatalogError> {
    match value {
        Value::Object(map) => {
            if map.contains_key("url") {
                Ok(CatalogNode::Link(link_from_object(map)?))
            } else {
                let mut children = Vec::with_capacity(map.len());
                for (label, child) in map {
                    children.push((label.clone(), classify(child)?));
                }
                Ok(CatalogNode::Folder(children))
            }
        }
        Value::Array(items) => {
            let mut links = Vec::with_capacity(items.len());
            for item in items {
                links.push(link_from_value(item)?);
            }
            Ok(CatalogNode::LinkList(links))
        }
        Value::String(url) => Ok(CatalogNode::LinkList(vec![LinkEntry {
            url: url.clone(),
            description: None,
        }])),
        other => Err(CatalogError::MalformedPayload(format!(
            "expected mapping, sequence or string, got {}",
            json_type_name(other)
        ))),
    }
}

/// A list element: either a link-shaped mapping or a bare URL string.
fn link_from_value(value: &Value) -> Result<LinkEntry, CatalogError> {
    match value {
        Value::Object(map) if map.contains_key("url") => link_from_object(map),
        Value::String(url) => Ok(LinkEntry {
            url: url.clone(),
            description: None,
        }),
        other => Err(CatalogError::MalformedPayload(format!(
            "link list element must be a link mapping or a URL string, got {}",
            json_type_name(other)
        ))),
    }
}

fn link_from_object(map: &serde_json::Map<String, Value>) -> Result<LinkEntry, CatalogError> {
    let url = map
        .get("url")
        .and_then(Value::as_str)
        .ok_or_else(|| CatalogError::MalformedPayload("link url must be a string".to_string()))?;

    // The published documents use the Portuguese key; accept the plain
    // spellings as well.
    let description = ["descrição", "descricao", "description"]
        .iter()
        .find_map(|key| map.get(*key))
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(LinkEntry {
        url: url.to_string(),
        description,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> CatalogTree {
        CatalogTree::from_value(&json!({
            "Tools": {
                "Editor": {"url": "https://editor.example", "descrição": "code editor"},
                "Mirrors": [
                    "https://mirror-a.example",
                    {"url": "https://mirror-b.example", "descrição": "backup"}
                ],
            },
            "Docs": "https://docs.example",
        }))
        .unwrap()
    }

    #[test]
    fn test_mapping_with_url_is_a_link() {
        let tree = sample_tree();
        let tools = tree.root().select("Tools").unwrap();
        let editor = tools.select("Editor").unwrap();
        assert_eq!(editor.kind(), NodeKind::Link);
        assert_eq!(
            editor.links(),
            &[LinkEntry {
                url: "https://editor.example".to_string(),
                description: Some("code editor".to_string()),
            }]
        );
    }

    #[test]
    fn test_mapping_without_url_is_a_folder() {
        let tree = sample_tree();
        let tools = tree.root().select("Tools").unwrap();
        assert_eq!(tools.kind(), NodeKind::Folder);
        assert!(!tools.is_terminal());
    }

    #[test]
    fn test_sequence_is_a_link_list() {
        let tree = sample_tree();
        let mirrors = tree.root().select("Tools").unwrap().select("Mirrors").unwrap();
        assert_eq!(mirrors.kind(), NodeKind::List(2));
        assert!(mirrors.is_terminal());
        assert_eq!(mirrors.links()[0].url, "https://mirror-a.example");
        assert_eq!(mirrors.links()[1].description.as_deref(), Some("backup"));
    }

    #[test]
    fn test_bare_string_coerced_to_one_element_list() {
        let tree = sample_tree();
        let docs = tree.root().select("Docs").unwrap();
        assert_eq!(docs.kind(), NodeKind::List(1));
        assert_eq!(docs.links()[0].url, "https://docs.example");
    }

    #[test]
    fn test_url_key_takes_priority_over_folder_shape() {
        // A link mapping with extra keys must still classify as a link,
        // never as a folder of those keys.
        let tree = CatalogTree::from_value(&json!({
            "Entry": {"url": "https://x.example", "extra": {"nested": "https://y.example"}},
        }))
        .unwrap();
        assert_eq!(tree.root().select("Entry").unwrap().kind(), NodeKind::Link);
    }

    #[test]
    fn test_entries_preserve_document_order() {
        let tree = CatalogTree::from_value(&json!({
            "Zeta": "https://z.example",
            "Alpha": "https://a.example",
            "Mid": "https://m.example",
        }))
        .unwrap();
        let labels: Vec<&str> = tree.root().entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_select_unknown_label() {
        let tree = sample_tree();
        let result = tree.root().select("Missing");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_classification_is_total_over_valid_grammar() {
        // Every valid value lands in exactly one variant.
        let cases = [
            (json!({"a": "https://a"}), NodeKind::Folder),
            (json!({"url": "https://a"}), NodeKind::Link),
            (json!(["https://a", "https://b"]), NodeKind::List(2)),
            (json!("https://a"), NodeKind::List(1)),
        ];
        for (value, expected) in cases {
            let node = classify(&value).unwrap();
            assert_eq!(node.kind(), expected);
        }
    }

    #[test]
    fn test_scalar_payload_rejected() {
        assert!(matches!(
            classify(&json!(42)),
            Err(CatalogError::MalformedPayload(_))
        ));
        assert!(matches!(
            CatalogTree::from_value(&json!("https://not-a-mapping.example")),
            Err(CatalogError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_description_aliases() {
        let node = classify(&json!({"url": "https://a", "description": "plain"})).unwrap();
        assert_eq!(node.links()[0].description.as_deref(), Some("plain"));

        let node = classify(&json!({"url": "https://a", "descricao": "no accent"})).unwrap();
        assert_eq!(node.links()[0].description.as_deref(), Some("no accent"));
    }

    #[test]
    fn test_non_string_url_rejected() {
        assert!(matches!(
            classify(&json!({"url": 9000})),
            Err(CatalogError::MalformedPayload(_))
        ));
    }
}

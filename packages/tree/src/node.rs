//! Tree nodes: directories of named children, and text leaves.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::Error;

/// A node in the tree.
///
/// Leaves carry opaque text and can never be traversed; every lookup
/// matches on this enum rather than probing for children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    Leaf(String),
}

impl Node {
    /// Shorthand for a leaf node.
    pub fn leaf(text: impl Into<String>) -> Self {
        Node::Leaf(text.into())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Directory(_) => None,
            Node::Leaf(text) => Some(text),
        }
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

/// An ordered set of uniquely named children.
///
/// Iteration follows insertion order, which is the order entries were
/// declared in and the order `ls` prints them in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Node)>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child. Names must be unique among siblings.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Result<(), Error> {
        let name = name.into();
        if self.contains(&name) {
            return Err(Error::DuplicateName { name });
        }
        self.entries.push((name, node));
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert) for trees declared in code.
    pub fn with(mut self, name: impl Into<String>, node: impl Into<Node>) -> Result<Self, Error> {
        self.insert(name, node.into())?;
        Ok(self)
    }

    /// Look up a direct child by exact name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

/// Reads a JSON string as a leaf and a JSON object as a directory, keeping
/// the object's key order.
struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string (leaf) or an object (directory)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Leaf(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Leaf(v))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dir = Directory::new();
        while let Some((name, node)) = map.next_entry::<String, Node>()? {
            dir.insert(name, node).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(Node::Directory(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        Directory::new()
            .with("zeta", Node::leaf("last letter"))
            .unwrap()
            .with("alpha", Directory::new())
            .unwrap()
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let dir = sample();
        assert_eq!(dir.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = sample().with("zeta", Node::leaf("again")).unwrap_err();
        assert!(matches!(err, Error::DuplicateName { name } if name == "zeta"));
    }

    #[test]
    fn get_is_exact_match() {
        let dir = sample();
        assert!(dir.get("zeta").is_some());
        assert!(dir.get("Zeta").is_none());
        assert!(dir.get("zet").is_none());
    }

    #[test]
    fn variant_accessors() {
        let leaf = Node::leaf("text");
        assert_eq!(leaf.as_leaf(), Some("text"));
        assert!(leaf.as_directory().is_none());
        assert!(!leaf.is_directory());

        let dir: Node = sample().into();
        assert!(dir.is_directory());
        assert_eq!(dir.as_directory().map(Directory::len), Some(2));
        assert!(dir.as_leaf().is_none());
    }

    #[test]
    fn deserialize_preserves_key_order() {
        let node: Node = serde_json::from_str(r#"{"b": "x", "a": {"c": "y"}}"#).unwrap();
        let dir = node.as_directory().unwrap();
        assert_eq!(dir.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(dir.get("b"), Some(&Node::leaf("x")));
        assert!(dir.get("a").unwrap().is_directory());
    }

    #[test]
    fn deserialize_rejects_other_json_types() {
        assert!(serde_json::from_str::<Node>(r#"{"n": 42}"#).is_err());
        assert!(serde_json::from_str::<Node>(r#"{"list": ["a"]}"#).is_err());
        assert!(serde_json::from_str::<Node>("null").is_err());
    }

    #[test]
    fn deserialize_rejects_duplicate_keys() {
        let err = serde_json::from_str::<Node>(r#"{"a": "1", "a": "2"}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}

//! Arena of value nodes with identity.

use crate::error::{Error, Result};
use crate::value::{Map, Value};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// NodeId identifies a node inside one [`Graph`].
///
/// Two ids are the same node exactly when they are equal; this is the
/// identity that [`Graph::clone_cyclic`] preserves for back-references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the index of the node within its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// GraphNode is a single arena slot.
///
/// Containers refer to their children by id, so a child may be shared by
/// several parents or point back at an ancestor.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphNode {
    /// A value without children. Never a list or a map.
    Scalar(Value),
    List(Vec<NodeId>),
    Map(IndexMap<String, NodeId>),
}

impl GraphNode {
    fn children(&self) -> Vec<NodeId> {
        match self {
            GraphNode::Scalar(_) => Vec::new(),
            GraphNode::List(items) => items.clone(),
            GraphNode::Map(fields) => fields.values().copied().collect(),
        }
    }

    fn remap(&self, ids: &HashMap<NodeId, NodeId>) -> GraphNode {
        match self {
            GraphNode::Scalar(value) => GraphNode::Scalar(value.clone()),
            GraphNode::List(items) => GraphNode::List(items.iter().map(|id| ids[id]).collect()),
            GraphNode::Map(fields) => GraphNode::Map(
                fields
                    .iter()
                    .map(|(key, id)| (key.clone(), ids[id]))
                    .collect(),
            ),
        }
    }
}

/// Graph stores nodes that may share children or form cycles.
///
/// Tree-shaped [`Value`]s cannot hold a reference back to an ancestor, so
/// self-referential documents are built here and converted back with
/// [`Graph::to_value`] once they are acyclic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Returns the number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for `id`.
    pub fn node(&self, id: NodeId) -> Result<&GraphNode> {
        self.nodes.get(id.0).ok_or(Error::UnknownNode { node: id.0 })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut GraphNode> {
        self.nodes.get_mut(id.0).ok_or(Error::UnknownNode { node: id.0 })
    }

    fn alloc(&mut self, node: GraphNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Adds an empty map node.
    pub fn add_map(&mut self) -> NodeId {
        self.alloc(GraphNode::Map(IndexMap::new()))
    }

    /// Adds an empty list node.
    pub fn add_list(&mut self) -> NodeId {
        self.alloc(GraphNode::List(Vec::new()))
    }

    /// Copies a tree value into the arena and returns the id of its root.
    pub fn insert_value(&mut self, value: &Value) -> NodeId {
        match value {
            Value::List(items) => {
                let children = items.iter().map(|item| self.insert_value(item)).collect();
                self.alloc(GraphNode::List(children))
            }
            Value::Map(fields) => {
                let children = fields
                    .iter()
                    .map(|(key, item)| (key.clone(), self.insert_value(item)))
                    .collect();
                self.alloc(GraphNode::Map(children))
            }
            scalar => self.alloc(GraphNode::Scalar(scalar.clone())),
        }
    }

    /// Points `key` of the map `map` at `child`, which may be any node,
    /// including `map` itself or one of its ancestors.
    pub fn set_field(&mut self, map: NodeId, key: impl Into<String>, child: NodeId) -> Result<()> {
        self.node(child)?;
        match self.node_mut(map)? {
            GraphNode::Map(fields) => {
                fields.insert(key.into(), child);
                Ok(())
            }
            _ => Err(Error::not_a_container(map.0, "map")),
        }
    }

    /// Appends `child` to the list `list`.
    pub fn push(&mut self, list: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        match self.node_mut(list)? {
            GraphNode::List(items) => {
                items.push(child);
                Ok(())
            }
            _ => Err(Error::not_a_container(list.0, "list")),
        }
    }

    /// Returns the child stored under `key` of the map `map`.
    pub fn field(&self, map: NodeId, key: &str) -> Option<NodeId> {
        match self.nodes.get(map.0)? {
            GraphNode::Map(fields) => fields.get(key).copied(),
            _ => None,
        }
    }

    /// Returns the scalar value stored at `id`, if it is a scalar node.
    pub fn scalar(&self, id: NodeId) -> Option<&Value> {
        match self.nodes.get(id.0)? {
            GraphNode::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Deep-copies every node reachable from `root` into this arena.
    ///
    /// Each container is copied once: a child that refers to an already
    /// copied node (an ancestor on a cycle, or a shared child) is pointed
    /// at that node's copy. The returned root therefore keeps the same
    /// shape, cycles included, and shares no node with the original.
    pub fn clone_cyclic(&mut self, root: NodeId) -> Result<NodeId> {
        let copies = self.copy_reachable(root, self.nodes.len())?;
        let new_root = NodeId(self.nodes.len());
        self.nodes.extend(copies);
        Ok(new_root)
    }

    /// Copies everything reachable from `root` into a new arena, whose
    /// root is always the first node.
    pub fn export(&self, root: NodeId) -> Result<(Graph, NodeId)> {
        let nodes = self.copy_reachable(root, 0)?;
        Ok((Graph { nodes }, NodeId(0)))
    }

    /// Returns the copies of the nodes reachable from `root`, numbered from `base`.
    fn copy_reachable(&self, root: NodeId, base: usize) -> Result<Vec<GraphNode>> {
        self.node(root)?;
        // Copy ids are assigned on first discovery, before any child is
        // visited, so a back-edge resolves to the in-progress copy.
        let mut ids: HashMap<NodeId, NodeId> = HashMap::new();
        let mut order = Vec::new();
        let mut stack = vec![root];
        let mut back_edges = 0usize;
        while let Some(id) = stack.pop() {
            if ids.contains_key(&id) {
                back_edges += 1;
                continue;
            }
            ids.insert(id, NodeId(base + order.len()));
            order.push(id);
            let node = self.node(id)?;
            stack.extend(node.children().into_iter().rev());
        }
        tracing::debug!(
            nodes = order.len(),
            revisits = back_edges,
            "copied reachable nodes"
        );
        order
            .into_iter()
            .map(|id| self.node(id).map(|node| node.remap(&ids)))
            .collect()
    }

    /// Converts the subtree at `root` back into a tree value.
    ///
    /// Shared children are duplicated. Fails with [`Error::Cycle`] if a node
    /// is reachable from itself.
    pub fn to_value(&self, root: NodeId) -> Result<Value> {
        let mut on_path = HashSet::new();
        self.build_value(root, &mut on_path)
    }

    fn build_value(&self, id: NodeId, on_path: &mut HashSet<NodeId>) -> Result<Value> {
        if !on_path.insert(id) {
            return Err(Error::Cycle { node: id.0 });
        }
        let value = match self.node(id)? {
            GraphNode::Scalar(value) => value.clone(),
            GraphNode::List(items) => Value::List(
                items
                    .iter()
                    .map(|child| self.build_value(*child, on_path))
                    .collect::<Result<Vec<_>>>()?,
            ),
            GraphNode::Map(fields) => Value::Map(
                fields
                    .iter()
                    .map(|(key, child)| Ok((key.clone(), self.build_value(*child, on_path)?)))
                    .collect::<Result<Map>>()?,
            ),
        };
        on_path.remove(&id);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Builds `{a: 1, circularRef: <self>}`.
    fn self_cycle(graph: &mut Graph) -> NodeId {
        let root = graph.add_map();
        let one = graph.insert_value(&Value::Int(1));
        graph.set_field(root, "a", one).unwrap();
        graph.set_field(root, "circularRef", root).unwrap();
        root
    }

    #[test]
    fn test_value_roundtrip() {
        let value = Value::from(json!({"a": [1, {"b": null}], "c": "x"}));
        let mut graph = Graph::new();
        let root = graph.insert_value(&value);
        assert_eq!(graph.to_value(root).unwrap(), value);
    }

    #[test]
    fn test_clone_acyclic() {
        let value = Value::from(json!({"name": "Alice", "address": {"city": "New York"}}));
        let mut graph = Graph::new();
        let root = graph.insert_value(&value);
        let before = graph.len();

        let copy = graph.clone_cyclic(root).unwrap();
        assert_ne!(copy, root);
        assert_eq!(graph.len(), before * 2);
        assert_eq!(graph.to_value(copy).unwrap(), value);

        let original_address = graph.field(root, "address").unwrap();
        let copied_address = graph.field(copy, "address").unwrap();
        assert_ne!(original_address, copied_address);
    }

    #[test]
    fn test_clone_self_cycle() {
        let mut graph = Graph::new();
        let root = self_cycle(&mut graph);

        let copy = graph.clone_cyclic(root).unwrap();
        assert_ne!(copy, root);
        assert_eq!(graph.field(copy, "circularRef"), Some(copy));
        assert_eq!(graph.field(root, "circularRef"), Some(root));

        let a = graph.field(copy, "a").unwrap();
        assert_ne!(Some(a), graph.field(root, "a"));
        assert_eq!(graph.scalar(a), Some(&Value::Int(1)));
    }

    #[test]
    fn test_clone_mutual_cycle() {
        let mut graph = Graph::new();
        let left = graph.add_map();
        let right = graph.add_map();
        graph.set_field(left, "peer", right).unwrap();
        graph.set_field(right, "peer", left).unwrap();

        let copy = graph.clone_cyclic(left).unwrap();
        let copy_right = graph.field(copy, "peer").unwrap();
        assert_ne!(copy_right, right);
        assert_eq!(graph.field(copy_right, "peer"), Some(copy));
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn test_clone_keeps_sharing() {
        let mut graph = Graph::new();
        let shared = graph.insert_value(&Value::from(json!({"k": 1})));
        let list = graph.add_list();
        graph.push(list, shared).unwrap();
        graph.push(list, shared).unwrap();

        let (copy, copy_root) = graph.export(list).unwrap();
        assert_eq!(copy.len(), 3);
        match copy.node(copy_root).unwrap() {
            GraphNode::List(items) => assert_eq!(items[0], items[1]),
            other => panic!("expected list, got {:?}", other),
        }
        assert_eq!(copy.to_value(copy_root).unwrap(), Value::from(json!([{"k": 1}, {"k": 1}])));
    }

    #[test]
    fn test_to_value_rejects_cycles() {
        let mut graph = Graph::new();
        let root = self_cycle(&mut graph);
        assert_eq!(graph.to_value(root).unwrap_err(), Error::Cycle { node: root.index() });

        let copy = graph.clone_cyclic(root).unwrap();
        assert!(graph.to_value(copy).is_err());
    }

    #[test]
    fn test_container_errors() {
        let mut graph = Graph::new();
        let scalar = graph.insert_value(&Value::from("x"));
        let list = graph.add_list();
        assert_eq!(
            graph.set_field(scalar, "k", list).unwrap_err(),
            Error::not_a_container(scalar.index(), "map")
        );
        assert_eq!(
            graph.push(scalar, list).unwrap_err(),
            Error::not_a_container(scalar.index(), "list")
        );
        assert_eq!(
            graph.clone_cyclic(NodeId(99)).unwrap_err(),
            Error::UnknownNode { node: 99 }
        );
    }
}

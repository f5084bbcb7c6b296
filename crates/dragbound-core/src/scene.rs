//! In-memory element tree.
//!
//! A [`Scene`] stands in for a rendered document: every node has a tag,
//! optional id and classes, a rendered rectangle and optional inline
//! `top`/`left` offsets. [`SceneElement`] handles implement the element
//! capabilities so the drag computations can run without a browser.
//!
//! Scenes are written as a nested JSON tree:
//!
//! ```json
//! { "tag": "body", "rect": { "x": 0, "y": 0, "width": 800, "height": 600 },
//!   "children": [
//!     { "tag": "div", "id": "dialog", "rect": { "x": 100, "y": 100, "width": 300, "height": 200 },
//!       "style": { "top": "10px", "left": "20px" } }
//!   ] }
//! ```

use crate::element::{ElementGeometry, OffsetSide, QueryDescendants};
use crate::error::{SceneError, SelectorError};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index of a node inside its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A node description, including its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Rendered bounding rectangle in viewport coordinates.
    #[serde(with = "rect_xywh")]
    pub rect: Rect,
    /// Inline offset styles, e.g. `top: "10px"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<OffsetSide, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create a node with the given tag and rendered rectangle.
    pub fn new(tag: impl Into<String>, rect: Rect) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            rect,
            style: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an inline offset style.
    pub fn with_offset(mut self, side: OffsetSide, value: impl Into<String>) -> Self {
        self.style.insert(side, value.into());
        self
    }

    /// Add a child subtree.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
struct SceneEntry {
    /// Node data; `children` is always empty here.
    node: SceneNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena of nodes with a single root.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<SceneEntry>,
}

impl Scene {
    /// Build a scene from a root node and its subtree.
    pub fn new(root: SceneNode) -> Self {
        let mut scene = Self { nodes: Vec::new() };
        scene.insert(None, root);
        scene
    }

    /// Parse a scene from its nested JSON form.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let root: SceneNode = serde_json::from_str(json)?;
        Ok(Self::new(root))
    }

    /// Serialize the scene back to its nested JSON form.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(&self.subtree(self.root()))?)
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A scene always has its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a subtree under `parent`, returning the new node's id.
    pub fn append(&mut self, parent: NodeId, node: SceneNode) -> NodeId {
        self.insert(Some(parent), node)
    }

    fn insert(&mut self, parent: Option<NodeId>, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        let children = std::mem::take(&mut node.children);
        self.nodes.push(SceneEntry {
            node,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        for child in children {
            self.insert(Some(id), child);
        }
        id
    }

    /// Node data, without children.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0).map(|entry| &entry.node)
    }

    /// Mutable node data, e.g. to move an element after a drag step.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0).map(|entry| &mut entry.node)
    }

    /// Parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|entry| entry.parent)
    }

    /// Find the first node (document order) with the given element id.
    pub fn find_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|entry| entry.node.id.as_deref() == Some(element_id))
            .map(NodeId)
    }

    /// Like [`Scene::find_by_id`], but reports a missing id as an error.
    pub fn require_id(&self, element_id: &str) -> Result<NodeId, SceneError> {
        self.find_by_id(element_id)
            .ok_or_else(|| SceneError::UnknownNode(element_id.to_string()))
    }

    /// Element handle for a node.
    pub fn element(&self, id: NodeId) -> SceneElement<'_> {
        SceneElement { scene: self, id }
    }

    /// Element handle for the node with the given element id.
    pub fn element_by_id(&self, element_id: &str) -> Option<SceneElement<'_>> {
        self.find_by_id(element_id).map(|id| self.element(id))
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(id.0) {
            Some(entry) => entry.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    /// Move a node and its whole subtree by `(dx, dy)`.
    pub fn translate(&mut self, id: NodeId, dx: f64, dy: f64) {
        let offset = kurbo::Vec2::new(dx, dy);
        let mut ids = self.descendants(id);
        ids.push(id);
        for node in ids {
            let entry = &mut self.nodes[node.0];
            entry.node.rect = entry.node.rect + offset;
        }
    }

    fn subtree(&self, id: NodeId) -> SceneNode {
        let entry = &self.nodes[id.0];
        let mut node = entry.node.clone();
        node.children = entry.children.iter().map(|&child| self.subtree(child)).collect();
        node
    }
}

/// Handle to a node of a [`Scene`]. Equality is node identity.
#[derive(Debug, Clone, Copy)]
pub struct SceneElement<'a> {
    scene: &'a Scene,
    id: NodeId,
}

impl SceneElement<'_> {
    /// The node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn entry(&self) -> Option<&SceneEntry> {
        self.scene.nodes.get(self.id.0)
    }
}

impl PartialEq for SceneElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.scene, other.scene) && self.id == other.id
    }
}

impl Eq for SceneElement<'_> {}

impl ElementGeometry for SceneElement<'_> {
    fn bounding_rect(&self) -> Rect {
        self.entry().map(|entry| entry.node.rect).unwrap_or(Rect::ZERO)
    }

    fn inline_offset(&self, side: OffsetSide) -> Option<String> {
        self.entry().and_then(|entry| entry.node.style.get(&side).cloned())
    }
}

impl<'a> QueryDescendants for SceneElement<'a> {
    type Element = SceneElement<'a>;

    fn query_descendants(&self, selector: &str) -> Result<Vec<Self::Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .scene
            .descendants(self.id)
            .into_iter()
            .filter(|&id| selector.matches(&self.scene.nodes[id.0].node))
            .map(|id| self.scene.element(id))
            .collect())
    }
}

/// Comma-separated list of compound selectors (`tag.class#id`, `*`).
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selector {
    groups: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
}

impl Selector {
    fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let groups = input
            .split(',')
            .map(|group| Compound::parse(group.trim()).ok_or_else(|| SelectorError::Unsupported(input.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { groups })
    }

    fn matches(&self, node: &SceneNode) -> bool {
        self.groups.iter().any(|compound| compound.matches(node))
    }
}

impl Compound {
    fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }
        let mut compound = Compound::default();
        let mut rest = input;

        if let Some(after) = rest.strip_prefix('*') {
            rest = after;
        } else {
            let len = ident_len(rest);
            if len > 0 {
                compound.tag = Some(rest[..len].to_ascii_lowercase());
                rest = &rest[len..];
            }
        }

        while let Some(marker) = rest.chars().next() {
            let name_start = marker.len_utf8();
            let len = ident_len(&rest[name_start..]);
            if len == 0 {
                return None;
            }
            let name = rest[name_start..name_start + len].to_string();
            match marker {
                '.' => compound.classes.push(name),
                '#' => compound.ids.push(name),
                _ => return None,
            }
            rest = &rest[name_start + len..];
        }
        Some(compound)
    }

    fn matches(&self, node: &SceneNode) -> bool {
        self.tag
            .as_deref()
            .is_none_or(|tag| node.tag.eq_ignore_ascii_case(tag))
            && self.ids.iter().all(|id| node.id.as_deref() == Some(id.as_str()))
            && self.classes.iter().all(|class| node.classes.contains(class))
    }
}

fn ident_len(input: &str) -> usize {
    input
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '-' || *c == '_'))
        .map(|(index, _)| index)
        .unwrap_or(input.len())
}

/// Serde form of a rectangle as `{ x, y, width, height }`.
mod rect_xywh {
    use kurbo::Rect;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xywh {
        x: f64,
        y: f64,
        #[serde(default)]
        width: f64,
        #[serde(default)]
        height: f64,
    }

    pub fn serialize<S: Serializer>(rect: &Rect, serializer: S) -> Result<S::Ok, S::Error> {
        Xywh {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rect, D::Error> {
        let r = Xywh::deserialize(deserializer)?;
        Ok(Rect::new(r.x, r.y, r.x + r.width, r.y + r.height))
    }
}

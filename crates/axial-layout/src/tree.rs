//! In-memory scene tree.
//!
//! A minimal host for the axis layout: nodes carry the geometry the solver
//! reads and writes, optional layout options for their parent's layout,
//! and optionally a layout of their own for their children.

use axial_core::{LayoutError, NodeBehavior, NodeId};
use glam::Vec2;
use indexmap::IndexMap;

use crate::axis_layout::{AxisLayout, LayoutSummary};
use crate::host::LayoutHost;
use crate::options::LayoutOptions;

/// A node in the scene tree.
#[derive(Debug)]
pub struct SceneNode {
    /// Unique ID, assigned when the node is added to a tree
    pub id: NodeId,
    /// Optional name for debugging
    pub name: Option<String>,
    /// Unscaled size of the node's content
    pub content_size: Vec2,
    /// Anchor as a fraction of the content size
    pub anchor_point: Vec2,
    /// Position of the anchor in the parent's space
    pub position: Vec2,
    /// Uniform scale
    pub scale: f32,
    /// Options read by the parent's layout
    pub options: Option<LayoutOptions>,
    /// Layout applied to this node's children
    pub layout: Option<AxisLayout>,
    /// Hooks for quirky node kinds
    pub behavior: Option<Box<dyn NodeBehavior>>,
    /// Parent node ID (None for roots)
    pub parent: Option<NodeId>,
    /// Child node IDs in order
    pub children: Vec<NodeId>,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNode {
    /// Create a node with zero size, a centered anchor, and unit scale.
    pub fn new() -> Self {
        Self {
            id: NodeId(0),
            name: None,
            content_size: Vec2::ZERO,
            anchor_point: Vec2::splat(0.5),
            position: Vec2::ZERO,
            scale: 1.0,
            options: None,
            layout: None,
            behavior: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the content size.
    pub fn with_content_size(mut self, size: Vec2) -> Self {
        self.content_size = size;
        self
    }

    /// Set the anchor point.
    pub fn with_anchor_point(mut self, anchor: Vec2) -> Self {
        self.anchor_point = anchor;
        self
    }

    /// Set the scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Attach layout options.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Attach a layout for this node's children.
    pub fn with_layout(mut self, layout: AxisLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Attach a behavior.
    pub fn with_behavior(mut self, behavior: impl NodeBehavior + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Content size multiplied by scale.
    pub fn scaled_content_size(&self) -> Vec2 {
        self.content_size * self.scale
    }
}

/// An arena of scene nodes.
#[derive(Debug, Default)]
pub struct SceneTree {
    nodes: IndexMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
    next_id: u64,
}

impl SceneTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }

    /// Add a root node.
    pub fn add_root(&mut self, mut node: SceneNode) -> NodeId {
        let id = self.next_id();
        node.id = id;
        node.parent = None;
        self.nodes.insert(id, node);
        self.roots.push(id);
        id
    }

    /// Append a child to `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        mut node: SceneNode,
    ) -> Result<NodeId, LayoutError> {
        if !self.nodes.contains_key(&parent) {
            return Err(LayoutError::UnknownNode { id: parent });
        }
        let id = self.next_id();
        node.id = id;
        node.parent = Some(parent);
        self.nodes.insert(id, node);
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.push(id);
        }
        Ok(id)
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Get the root nodes.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, LayoutError> {
        self.nodes.get_mut(&id).ok_or(LayoutError::UnknownNode { id })
    }

    /// Attach (or with `None`, detach) layout options.
    pub fn set_layout_options(
        &mut self,
        id: NodeId,
        options: Option<LayoutOptions>,
    ) -> Result<(), LayoutError> {
        self.node_mut(id)?.options = options;
        Ok(())
    }

    /// Attach (or with `None`, detach) a layout for a node's children.
    pub fn set_layout(
        &mut self,
        id: NodeId,
        layout: Option<AxisLayout>,
    ) -> Result<(), LayoutError> {
        self.node_mut(id)?.layout = layout;
        Ok(())
    }

    /// Re-run the layout attached to `id`, if any.
    pub fn update_layout(&mut self, id: NodeId) -> Result<Option<LayoutSummary>, LayoutError> {
        let layout = self.get(id).ok_or(LayoutError::UnknownNode { id })?.layout;
        Ok(layout.map(|layout| layout.apply(self, id)))
    }
}

impl LayoutHost for SceneTree {
    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.get(node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn content_size(&self, node: NodeId) -> Vec2 {
        self.get(node).map_or(Vec2::ZERO, |n| n.content_size)
    }

    fn anchor_point(&self, node: NodeId) -> Vec2 {
        self.get(node).map_or(Vec2::ZERO, |n| n.anchor_point)
    }

    fn scale(&self, node: NodeId) -> f32 {
        self.get(node).map_or(1.0, |n| n.scale)
    }

    fn layout_options(&self, node: NodeId) -> Option<LayoutOptions> {
        self.get(node).and_then(|n| n.options)
    }

    fn measured_size_override(&self, node: NodeId) -> Option<Vec2> {
        self.get(node)
            .and_then(|n| n.behavior.as_ref())
            .and_then(|behavior| behavior.measured_size())
    }

    fn set_position(&mut self, node: NodeId, position: Vec2) {
        if let Some(n) = self.get_mut(node) {
            n.position = position;
        }
    }

    fn set_scale(&mut self, node: NodeId, scale: f32) {
        if let Some(n) = self.get_mut(node) {
            n.scale = scale;
        }
    }

    fn set_content_size(&mut self, node: NodeId, size: Vec2) {
        if let Some(n) = self.get_mut(node) {
            n.content_size = size;
        }
    }

    fn scale_committed(&mut self, node: NodeId, scale: f32) {
        if let Some(behavior) = self.get_mut(node).and_then(|n| n.behavior.as_mut()) {
            behavior.scale_committed(scale);
        }
    }
}

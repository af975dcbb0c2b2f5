use glam::{Mat4, Quat, Vec3};
use tracing::debug;

use crate::material::Material;
use crate::picking::PickShape;
use crate::terrain::Mesh;

/// Index of a node in a [SceneGraph]. Ids are never reused within a session,
/// so a stale id after [SceneGraph::remove_subtree] simply resolves to
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Pure transform anchor, composite parents.
    Group,
    TerrainSurface,
    TerrainWireframe,
    HoloGrid,
    MarkerIndicator,
    MarkerBeam,
    MarkerRing,
}

/// Rigid local transform. The scene never scales nodes, which keeps ray
/// distances identical in local and world space during picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}

#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub transform: Transform,
    pub shape: PickShape,
    pub material: Option<Material>,
    pub mesh: Option<Mesh>,
    /// Angular rate about +Y in rad/s, applied by the animation pass.
    pub spin_rate: f32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    alive: bool,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            transform: Transform::identity(),
            shape: PickShape::None,
            material: None,
            mesh: None,
            spin_rate: 0.0,
            parent,
            children: Vec::new(),
            alive: true,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Append-only node arena with parent/child composition.
///
/// Single-threaded by design: mutation happens between frames on the render
/// thread, never during a traversal.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, parent));
        if let Some(parent) = parent {
            if let Some(p) = self.get_mut(parent) {
                p.children.push(id);
            }
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize).filter(|n| n.alive)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize).filter(|n| n.alive)
    }

    /// Removes a node and everything under it. Detaches from the parent so
    /// later traversals never see the subtree.
    pub fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        if let Some(parent) = node.parent {
            if let Some(p) = self.get_mut(parent) {
                p.children.retain(|c| *c != id);
            }
        }
        let mut stack = vec![id];
        let mut removed = 0usize;
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0 as usize) {
                if !node.alive {
                    continue;
                }
                node.alive = false;
                removed += 1;
                stack.extend(node.children.drain(..));
            }
        }
        debug!(id = id.0, removed, "removed scene subtree");
    }

    /// World matrix of a node, composed from the parent chain.
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(node) = self.get(id) else { break };
            matrix = node.transform.matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    /// Live nodes in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.alive)
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut Node)> {
        self.nodes
            .iter_mut()
            .enumerate()
            .filter(|(_, n)| n.alive)
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Importer hand-off types and the flattened node hierarchy
//!
//! The asset importer supplies a recursive [`RawNode`] tree, per-mesh bone
//! lists and per-clip keyframe tracks. Matrices arrive in the importer's
//! row-major layout ([`RowMatrix`]) and are converted once into the engine's
//! column-major [`Mat4`] when the skeleton and [`NodeTree`] are built.

use glam::{Mat4, Quat, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 4x4 matrix in the importer's row-major layout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowMatrix(pub [[f32; 4]; 4]);

impl RowMatrix {
    /// Identity matrix
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Convert to the engine layout. Storage transpose only, the transform
    /// itself is unchanged.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.0).transpose()
    }
}

impl Default for RowMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for RowMatrix {
    fn from(m: Mat4) -> Self {
        Self(m.transpose().to_cols_array_2d())
    }
}

impl From<RowMatrix> for Mat4 {
    fn from(m: RowMatrix) -> Self {
        m.to_mat4()
    }
}

/// Node of the importer's scene graph
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawNode {
    pub name: String,
    /// Local bind transform relative to the parent node
    pub transform: RowMatrix,
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Create a leaf node
    pub fn new(name: impl Into<String>, transform: impl Into<RowMatrix>) -> Self {
        Self {
            name: name.into(),
            transform: transform.into(),
            children: Vec::new(),
        }
    }

    /// Append a child and return self
    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Bone reference as stored on a mesh
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawBone {
    pub name: String,
    /// Maps a mesh-space vertex into bone-local space at rest
    pub offset_matrix: RowMatrix,
}

impl RawBone {
    pub fn new(name: impl Into<String>, offset_matrix: impl Into<RowMatrix>) -> Self {
        Self {
            name: name.into(),
            offset_matrix: offset_matrix.into(),
        }
    }
}

/// Mesh with its bone references
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawMesh {
    pub name: String,
    pub bones: Vec<RawBone>,
}

impl RawMesh {
    pub fn new(name: impl Into<String>, bones: Vec<RawBone>) -> Self {
        Self {
            name: name.into(),
            bones,
        }
    }
}

/// Time-stamped translation or scale sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawVectorKey {
    pub time: f64,
    pub value: [f32; 3],
}

impl RawVectorKey {
    pub fn new(time: f64, value: Vec3) -> Self {
        Self {
            time,
            value: value.to_array(),
        }
    }
}

/// Time-stamped rotation sample, value stored as `[x, y, z, w]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawQuatKey {
    pub time: f64,
    pub value: [f32; 4],
}

impl RawQuatKey {
    pub fn new(time: f64, value: Quat) -> Self {
        Self {
            time,
            value: value.to_array(),
        }
    }
}

/// Keyframe tracks of one node in one clip
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawNodeTrack {
    pub node_name: String,
    pub position_keys: Vec<RawVectorKey>,
    pub rotation_keys: Vec<RawQuatKey>,
    pub scaling_keys: Vec<RawVectorKey>,
}

impl RawNodeTrack {
    /// Whether at least one of the three tracks has keys
    pub fn has_keys(&self) -> bool {
        !self.position_keys.is_empty()
            || !self.rotation_keys.is_empty()
            || !self.scaling_keys.is_empty()
    }
}

/// One animation clip as delivered by the importer
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawAnimation {
    pub name: String,
    /// Duration in ticks
    pub duration: f64,
    /// Source tick rate, may be zero or negative in malformed files
    pub ticks_per_second: f64,
    pub channels: Vec<RawNodeTrack>,
}

/// Everything the importer hands over for one model
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawScene {
    pub root: RawNode,
    pub meshes: Vec<RawMesh>,
    pub animations: Vec<RawAnimation>,
}

/// Index of a node inside a [`NodeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Flattened scene node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneNode {
    pub name: String,
    /// Local bind transform in engine layout
    pub transform: Mat4,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Read-only arena of scene nodes in pre-order.
///
/// A parent always has a lower index than its children; the root is
/// `NodeId(0)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeTree {
    nodes: Vec<SceneNode>,
}

impl NodeTree {
    /// Flatten an importer tree
    pub fn from_raw(root: &RawNode) -> Self {
        let mut nodes: Vec<SceneNode> = Vec::new();
        let mut stack: Vec<(&RawNode, Option<NodeId>)> = vec![(root, None)];

        while let Some((raw, parent)) = stack.pop() {
            let id = NodeId(nodes.len());
            nodes.push(SceneNode {
                name: raw.name.clone(),
                transform: raw.transform.to_mat4(),
                parent,
                children: Vec::with_capacity(raw.children.len()),
            });
            if let Some(parent) = parent {
                nodes[parent.0].children.push(id);
            }
            // Reverse push keeps sibling order on pop
            for child in raw.children.iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pre-order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// First node with the given name in pre-order
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Bind transform of the root node
    pub fn root_transform(&self) -> Mat4 {
        self.nodes.first().map_or(Mat4::IDENTITY, |n| n.transform)
    }
}

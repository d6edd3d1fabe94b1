use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Position and orientation of a node. Rotation is Euler angles in radians,
/// applied per axis the way the host engine interprets them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }
}

/// Tessellation parameters for the supported primitive shapes. The host
/// engine owns the actual vertex generation; these are its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

/// Surface response of a mesh or line. `Flat` ignores lights entirely;
/// `Lambert` reacts to them; `Phong` adds a specular highlight color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    Flat { color: [f32; 3] },
    Lambert { color: [f32; 3] },
    Phong { color: [f32; 3], specular: [f32; 3] },
}

/// Light sources the samples place into the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Directional {
        color: [f32; 3],
        intensity: f32,
        direction: Vec3,
    },
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
}

/// What a node contributes to the scene. Mesh, points and line entries are
/// renderable; lights and the axes marker are organizational.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    Mesh {
        shape: Shape,
        appearance: Appearance,
    },
    Points {
        shape: Shape,
        color: [f32; 3],
        size: f32,
    },
    Line {
        shape: Shape,
        appearance: Appearance,
    },
    Light(Light),
    Axes {
        size: f32,
    },
}

/// A single scene entry: its kind, where it sits, and the per-frame
/// rotation step applied while the activate flag is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub transform: Transform,
    pub spin: Vec3,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            transform: Transform::IDENTITY,
            spin: Vec3::ZERO,
        }
    }

    pub fn axes(size: f32) -> Self {
        Self::new(NodeKind::Axes { size })
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_spin(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn is_renderable(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Mesh { .. } | NodeKind::Points { .. } | NodeKind::Line { .. }
        )
    }

    pub fn is_light(&self) -> bool {
        matches!(self.kind, NodeKind::Light(_))
    }

    pub fn is_helper(&self) -> bool {
        matches!(self.kind, NodeKind::Axes { .. })
    }
}

/// Handle to a node inside its graph. Only `SceneGraph::add` hands these
/// out, so lookups through one are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Flat collection of nodes composed and submitted together. The graph
/// owns its nodes exclusively; `add` takes them by value, so a node lives
/// in at most one graph.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn renderable_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_renderable()).count()
    }

    pub fn light_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_light()).count()
    }

    pub fn helper_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_helper()).count()
    }

    /// Advance every spinning node by its per-frame step. Angles are left
    /// unbounded; f32 wraparound is the only limit.
    pub fn advance_spin(&mut self) {
        for node in &mut self.nodes {
            node.transform.rotation += node.spin;
        }
    }
}

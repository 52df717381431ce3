//! Narrow capability traits over the engine that receives the generated blocks.
//! The generator calls nothing else on the host.

use std::fmt;

use meadow_geom::Vec3;

/// Vertex attribute channels a block mesh needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshAttribute {
    Position,
    Normal,
    Color,
    TextureCoordinate,
}

impl MeshAttribute {
    /// Channels acquired for every block, in acquisition order.
    pub const REQUIRED: [MeshAttribute; 4] = [
        MeshAttribute::Position,
        MeshAttribute::Color,
        MeshAttribute::TextureCoordinate,
        MeshAttribute::Normal,
    ];

    /// Floats per vertex in this channel.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            MeshAttribute::Position | MeshAttribute::Normal => 3,
            MeshAttribute::Color => 4,
            MeshAttribute::TextureCoordinate => 2,
        }
    }
}

impl fmt::Display for MeshAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeshAttribute::Position => "position",
            MeshAttribute::Normal => "normal",
            MeshAttribute::Color => "color",
            MeshAttribute::TextureCoordinate => "texcoord",
        };
        f.write_str(s)
    }
}

/// A mesh created by a [`MeshHost`], not yet attached to the scene.
pub trait MeshResource {
    /// Writable view of a channel, sized `vertex_count * kind.components()`,
    /// or `None` if the mesh does not expose that channel.
    fn attribute(&mut self, kind: MeshAttribute) -> Option<&mut [f32]>;

    /// Uploads written attributes. No writes follow.
    fn finalize(&mut self);
}

pub trait MeshHost {
    type Mesh: MeshResource;

    fn create_mesh(&mut self, vertex_count: usize, indices: &[u32]) -> Self::Mesh;
}

/// Scene graph operations on an opaque node handle.
pub trait SceneHost<M> {
    type Node;
    type Material;

    fn create_child(&mut self) -> Self::Node;
    fn set_local_position(&mut self, node: &Self::Node, position: Vec3);
    fn attach_mesh(&mut self, node: &Self::Node, mesh: M, material: &Self::Material);
}

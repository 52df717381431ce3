//! In-memory host: keeps created nodes and meshes in plain vectors. Used by the
//! CLI and by tests that need to inspect what the generator produced.

use hashbrown::HashMap;
use meadow_geom::Vec3;

use crate::host::{MeshAttribute, MeshHost, MeshResource, SceneHost};

pub type NodeId = usize;

#[derive(Clone, Debug)]
pub struct HeadlessMesh {
    pub vertex_count: usize,
    pub indices: Vec<u32>,
    channels: HashMap<MeshAttribute, Vec<f32>>,
    pub finalized: bool,
}

impl HeadlessMesh {
    fn new(vertex_count: usize, indices: &[u32], kinds: &[MeshAttribute]) -> Self {
        let channels = kinds
            .iter()
            .map(|&k| (k, vec![0.0; vertex_count * k.components()]))
            .collect();
        Self {
            vertex_count,
            indices: indices.to_vec(),
            channels,
            finalized: false,
        }
    }

    /// Uploaded data for `kind`, if the mesh has that channel.
    pub fn data(&self, kind: MeshAttribute) -> Option<&[f32]> {
        self.channels.get(&kind).map(Vec::as_slice)
    }
}

impl MeshResource for HeadlessMesh {
    fn attribute(&mut self, kind: MeshAttribute) -> Option<&mut [f32]> {
        self.channels.get_mut(&kind).map(Vec::as_mut_slice)
    }

    fn finalize(&mut self) {
        self.finalized = true;
    }
}

#[derive(Clone, Debug, Default)]
pub struct HeadlessNode {
    pub position: Vec3,
    pub mesh: Option<HeadlessMesh>,
    pub material: Option<String>,
}

/// Children of a single root placed at `origin`.
#[derive(Clone, Debug)]
pub struct HeadlessScene {
    pub origin: Vec3,
    nodes: Vec<HeadlessNode>,
    channels: Vec<MeshAttribute>,
    // (meshes created with full channels, channels afterwards)
    degrade: Option<(usize, Vec<MeshAttribute>)>,
    meshes_created: usize,
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl HeadlessScene {
    pub fn new(origin: Vec3) -> Self {
        Self {
            origin,
            nodes: Vec::new(),
            channels: MeshAttribute::REQUIRED.to_vec(),
            degrade: None,
            meshes_created: 0,
        }
    }

    /// Restricts the channels every created mesh exposes.
    pub fn with_channels(mut self, kinds: &[MeshAttribute]) -> Self {
        self.channels = kinds.to_vec();
        self
    }

    /// The first `after` meshes get the normal channels; later ones only `kinds`.
    pub fn with_channels_after(mut self, after: usize, kinds: &[MeshAttribute]) -> Self {
        self.degrade = Some((after, kinds.to_vec()));
        self
    }

    pub fn nodes(&self) -> &[HeadlessNode] {
        &self.nodes
    }

    pub fn meshes_created(&self) -> usize {
        self.meshes_created
    }

    /// Nodes that carry a mesh.
    pub fn blocks(&self) -> impl Iterator<Item = (&HeadlessNode, &HeadlessMesh)> {
        self.nodes
            .iter()
            .filter_map(|n| n.mesh.as_ref().map(|m| (n, m)))
    }

    pub fn total_vertices(&self) -> usize {
        self.blocks().map(|(_, m)| m.vertex_count).sum()
    }

    pub fn total_indices(&self) -> usize {
        self.blocks().map(|(_, m)| m.indices.len()).sum()
    }
}

impl MeshHost for HeadlessScene {
    type Mesh = HeadlessMesh;

    fn create_mesh(&mut self, vertex_count: usize, indices: &[u32]) -> HeadlessMesh {
        let kinds = match &self.degrade {
            Some((after, kinds)) if self.meshes_created >= *after => kinds.as_slice(),
            _ => self.channels.as_slice(),
        };
        let mesh = HeadlessMesh::new(vertex_count, indices, kinds);
        self.meshes_created += 1;
        mesh
    }
}

impl SceneHost<HeadlessMesh> for HeadlessScene {
    type Node = NodeId;
    type Material = String;

    fn create_child(&mut self) -> NodeId {
        self.nodes.push(HeadlessNode::default());
        self.nodes.len() - 1
    }

    fn set_local_position(&mut self, node: &NodeId, position: Vec3) {
        if let Some(n) = self.nodes.get_mut(*node) {
            n.position = position;
        }
    }

    fn attach_mesh(&mut self, node: &NodeId, mesh: HeadlessMesh, material: &String) {
        if let Some(n) = self.nodes.get_mut(*node) {
            n.mesh = Some(mesh);
            n.material = Some(material.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_mesh_exposes_sized_channels() {
        let mut scene = HeadlessScene::default();
        let mut mesh = scene.create_mesh(6, &[0, 1, 2, 3, 5, 4]);
        assert_eq!(mesh.attribute(MeshAttribute::Position).map(|s| s.len()), Some(18));
        assert_eq!(mesh.attribute(MeshAttribute::Color).map(|s| s.len()), Some(24));
        assert_eq!(mesh.attribute(MeshAttribute::TextureCoordinate).map(|s| s.len()), Some(12));
        assert!(!mesh.finalized);
        mesh.finalize();
        assert!(mesh.finalized);
    }

    #[test]
    fn degraded_meshes_lose_channels() {
        let mut scene =
            HeadlessScene::default().with_channels_after(1, &[MeshAttribute::Position]);
        let mut first = scene.create_mesh(3, &[0, 1, 2]);
        let mut second = scene.create_mesh(3, &[0, 1, 2]);
        assert!(first.attribute(MeshAttribute::Normal).is_some());
        assert!(second.attribute(MeshAttribute::Normal).is_none());
        assert!(second.attribute(MeshAttribute::Position).is_some());
        assert_eq!(scene.meshes_created(), 2);
    }

    #[test]
    fn attach_places_mesh_on_node() {
        let mut scene = HeadlessScene::new(Vec3::new(0.0, 1.0, 0.0));
        let node = scene.create_child();
        scene.set_local_position(&node, Vec3::new(2.0, 0.0, 3.0));
        let mut mesh = scene.create_mesh(3, &[0, 1, 2]);
        if let Some(pos) = mesh.attribute(MeshAttribute::Position) {
            pos.copy_from_slice(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        }
        scene.attach_mesh(&node, mesh, &"grass".to_string());
        assert_eq!(scene.blocks().count(), 1);
        assert_eq!(scene.nodes()[0].material.as_deref(), Some("grass"));
        assert_eq!(scene.nodes()[0].position, Vec3::new(2.0, 0.0, 3.0));
        assert_eq!(scene.total_vertices(), 3);
        assert_eq!(scene.total_indices(), 3);
    }
}

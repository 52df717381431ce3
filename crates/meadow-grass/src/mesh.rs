use meadow_geom::{Aabb, Vec3};

use crate::blade::{Blade, color_ramp};
use crate::constants::{INDICES_PER_BLADE, VERTICES_PER_BLADE};
use crate::host::MeshAttribute;

/// CPU-side scratch buffers for one block. Dropped once uploaded.
#[derive(Default, Clone, Debug)]
pub struct BlockMeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub col: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
    /// Bounds of every emitted vertex, block-local; `None` until a blade is added.
    pub bbox: Option<Aabb>,
}

impl BlockMeshBuild {
    /// Empty buffers with room for `blades` blades.
    pub fn with_blades(blades: usize) -> Self {
        let verts = blades * VERTICES_PER_BLADE;
        Self {
            pos: Vec::with_capacity(verts * 3),
            norm: Vec::with_capacity(verts * 3),
            col: Vec::with_capacity(verts * 4),
            uv: Vec::with_capacity(verts * 2),
            idx: Vec::with_capacity(blades * INDICES_PER_BLADE),
            bbox: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    /// Appends a blade as a front triangle `(bl, br, tip)` with normal `n` and a
    /// back triangle over duplicated positions with `-n` and reversed winding,
    /// so it renders from both sides with backface culling on.
    pub fn add_blade(&mut self, blade: &Blade) {
        let corners = blade.corners();
        let n = Blade::face_normal(&corners);
        let base = self.vertex_count() as u32;

        self.push_triangle(&corners, n);
        self.idx.extend_from_slice(&[base, base + 1, base + 2]);

        self.push_triangle(&corners, -n);
        self.idx.extend_from_slice(&[base + 3, base + 5, base + 4]);

        let bb = self.bbox.get_or_insert(Aabb::from_point(corners[0]));
        for p in corners {
            bb.include(p);
        }
    }

    fn push_triangle(&mut self, corners: &[Vec3; 3], n: Vec3) {
        let base_color = color_ramp(0.0);
        let tip_color = color_ramp(1.0);
        for p in corners {
            self.pos.extend_from_slice(&p.to_array());
            self.norm.extend_from_slice(&n.to_array());
        }
        self.col.extend_from_slice(&base_color);
        self.col.extend_from_slice(&base_color);
        self.col.extend_from_slice(&tip_color);
        // Unused, present for vertex format compatibility
        self.uv.extend_from_slice(&[0.0; 6]);
    }

    /// The buffer backing a given attribute channel.
    pub fn channel(&self, kind: MeshAttribute) -> &[f32] {
        match kind {
            MeshAttribute::Position => &self.pos,
            MeshAttribute::Normal => &self.norm,
            MeshAttribute::Color => &self.col,
            MeshAttribute::TextureCoordinate => &self.uv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blade() -> Blade {
        Blade {
            lx: 0.5,
            lz: -0.5,
            base_y: 0.0,
            height: 0.8,
            yaw: 1.0,
            bend: 0.1,
            half_width: 0.04,
        }
    }

    #[test]
    fn blade_emits_six_vertices_and_indices() {
        let mut mb = BlockMeshBuild::with_blades(2);
        mb.add_blade(&blade());
        mb.add_blade(&blade());
        assert_eq!(mb.vertex_count(), 12);
        assert_eq!(mb.norm.len(), 36);
        assert_eq!(mb.col.len(), 48);
        assert_eq!(mb.uv.len(), 24);
        assert_eq!(mb.idx, vec![0, 1, 2, 3, 5, 4, 6, 7, 8, 9, 11, 10]);
        assert!(mb.uv.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn back_face_mirrors_front() {
        let mut mb = BlockMeshBuild::default();
        mb.add_blade(&blade());
        assert_eq!(mb.pos[0..9], mb.pos[9..18]);
        for i in 0..9 {
            assert_eq!(mb.norm[9 + i], -mb.norm[i]);
        }
        assert_eq!(mb.col[0..12], mb.col[12..24]);
    }

    #[test]
    fn bbox_covers_blade() {
        let mut mb = BlockMeshBuild::default();
        assert!(mb.bbox.is_none());
        mb.add_blade(&blade());
        let bb = mb.bbox.unwrap();
        for v in mb.pos.chunks_exact(3) {
            let p = Vec3::new(v[0], v[1], v[2]);
            assert_eq!(bb.min.min(p), bb.min);
            assert_eq!(bb.max.max(p), bb.max);
        }
        assert_eq!(bb.max.y, 0.8);
    }
}

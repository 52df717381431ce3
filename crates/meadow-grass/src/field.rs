use meadow_geom::{Aabb, Vec3};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::blade::Blade;
use crate::config::GrassConfig;
use crate::error::{BlockFault, GenerationError, GenerationOutcome, GenerationWarning, SkipReason};
use crate::grid::{GridCell, GridPlan};
use crate::host::{MeshAttribute, MeshHost, MeshResource, SceneHost};
use crate::mesh::BlockMeshBuild;
use crate::random::RandomSource;
use crate::terrain::{FlatGround, HeightSampler};

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationReport {
    pub grid_count: u32,
    pub actual_radius: f32,
    /// Candidate cells before masking (`grid_count^2`).
    pub cells_considered: usize,
    pub cells_masked: usize,
    pub blocks_built: usize,
    pub vertices_per_block: usize,
    /// Union of all blade vertices relative to the field root; `None` when no
    /// block holds a blade.
    pub bounds: Option<Aabb>,
    pub warnings: Vec<GenerationWarning>,
}

/// A block whose mesh was uploaded and attached.
#[derive(Clone, Debug)]
pub struct BuiltBlock<N> {
    pub node: N,
    /// Vertex bounds relative to the field root.
    pub bounds: Option<Aabb>,
}

/// A grass field rooted at `origin`, generated into a host scene.
#[derive(Clone, Debug)]
pub struct GrassField<T = FlatGround> {
    pub config: GrassConfig,
    /// World position of the field root; only used for height lookups.
    pub origin: Vec3,
    terrain: T,
}

impl GrassField<FlatGround> {
    pub fn new(config: GrassConfig) -> Self {
        Self {
            config,
            origin: Vec3::ZERO,
            terrain: FlatGround,
        }
    }
}

impl<T: HeightSampler> GrassField<T> {
    pub fn with_terrain<U: HeightSampler>(self, terrain: U) -> GrassField<U> {
        GrassField {
            config: self.config,
            origin: self.origin,
            terrain,
        }
    }

    pub fn at(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn plan(&self) -> GridPlan {
        GridPlan::new(self.config.radius, self.config.block_side)
    }

    /// Generates every block, seeding from `config.seed` when set and from the
    /// thread generator otherwise.
    pub fn generate<H>(
        &self,
        host: &mut H,
        material: Option<&<H as SceneHost<<H as MeshHost>::Mesh>>::Material>,
    ) -> Result<GenerationOutcome, GenerationError>
    where
        H: MeshHost + SceneHost<<H as MeshHost>::Mesh>,
    {
        match self.config.seed {
            Some(seed) => {
                let mut rng = SmallRng::seed_from_u64(seed);
                self.generate_with(host, material, &mut rng)
            }
            None => {
                let mut rng = rand::thread_rng();
                self.generate_with(host, material, &mut rng)
            }
        }
    }

    /// Generates every block with an explicit random source.
    ///
    /// Without a material nothing is planned and the run reports `Skipped`.
    /// A mesh missing any required channel, or exposing one of the wrong
    /// length, aborts the run; blocks built before it stay in the host.
    pub fn generate_with<H, R>(
        &self,
        host: &mut H,
        material: Option<&<H as SceneHost<<H as MeshHost>::Mesh>>::Material>,
        rng: &mut R,
    ) -> Result<GenerationOutcome, GenerationError>
    where
        H: MeshHost + SceneHost<<H as MeshHost>::Mesh>,
        R: RandomSource + ?Sized,
    {
        let cfg = &self.config;
        let Some(material) = material else {
            log::warn!("grass: {}; skipping creation", SkipReason::NoMaterial);
            return Ok(GenerationOutcome::Skipped(SkipReason::NoMaterial));
        };

        let plan = self.plan();
        log::info!(
            "grass: radius={:.3}, block_side={:.3}, grid_count={}, actual_radius={:.3}",
            cfg.radius,
            cfg.block_side,
            plan.grid_count,
            plan.actual_radius
        );

        let mut warnings = Vec::new();
        if cfg.exceeds_vertex_ceiling() {
            let w = GenerationWarning::VertexCeilingExceeded {
                verts_per_block: cfg.verts_per_block(),
                ceiling: cfg.vertex_ceiling,
            };
            log::warn!("grass: {}", w);
            warnings.push(w);
        }

        let mask = cfg.use_circular_mask.then_some(cfg.radius);
        let mut blocks_built = 0usize;
        let mut bounds: Option<Aabb> = None;
        for cell in plan.surviving_cells(mask) {
            match build_block(host, cfg, &cell, self.origin, &self.terrain, rng, material) {
                Ok(block) => {
                    blocks_built += 1;
                    if let Some(bb) = block.bounds {
                        bounds = Some(bounds.map_or(bb, |acc| acc.union(bb)));
                    }
                }
                Err(fault) => {
                    let err = fault.at(cell, blocks_built);
                    log::error!("grass: {}", err);
                    return Err(err);
                }
            }
        }

        let cells_considered = plan.cell_count();
        log::info!(
            "grass: created {} blocks (grid_count={}, block_side={}, blades_per_block={})",
            blocks_built,
            plan.grid_count,
            cfg.block_side,
            cfg.blades_per_block
        );
        Ok(GenerationOutcome::Built(GenerationReport {
            grid_count: plan.grid_count,
            actual_radius: plan.actual_radius,
            cells_considered,
            cells_masked: cells_considered - blocks_built,
            blocks_built,
            vertices_per_block: cfg.verts_per_block(),
            bounds,
            warnings,
        }))
    }
}

/// Builds one block: samples `blades_per_block` blades into fresh buffers,
/// uploads them into a new host mesh and attaches it to a child node placed at
/// the cell center.
///
/// Fails if the mesh cannot expose all of [`MeshAttribute::REQUIRED`], or if a
/// channel's length differs from `vertex_count * components`. Nothing is
/// written and no node is created in either case.
pub fn build_block<H, R, T>(
    host: &mut H,
    cfg: &GrassConfig,
    cell: &GridCell,
    origin: Vec3,
    terrain: &T,
    rng: &mut R,
    material: &<H as SceneHost<<H as MeshHost>::Mesh>>::Material,
) -> Result<BuiltBlock<<H as SceneHost<<H as MeshHost>::Mesh>>::Node>, BlockFault>
where
    H: MeshHost + SceneHost<<H as MeshHost>::Mesh>,
    R: RandomSource + ?Sized,
    T: HeightSampler + ?Sized,
{
    let blades = cfg.blades_per_block as usize;
    let mut mb = BlockMeshBuild::with_blades(blades);
    for _ in 0..blades {
        let blade = Blade::sample(rng, cfg, cell, origin, terrain);
        mb.add_blade(&blade);
    }

    let mut mesh = host.create_mesh(mb.vertex_count(), &mb.idx);
    let missing: Vec<MeshAttribute> = MeshAttribute::REQUIRED
        .into_iter()
        .filter(|&k| mesh.attribute(k).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(BlockFault::MissingAttributes(missing));
    }
    for kind in MeshAttribute::REQUIRED {
        let expected = mb.channel(kind).len();
        let actual = mesh.attribute(kind).map_or(0, |dst| dst.len());
        if actual != expected {
            return Err(BlockFault::ChannelSizeMismatch {
                kind,
                expected,
                actual,
            });
        }
    }
    for kind in MeshAttribute::REQUIRED {
        if let Some(dst) = mesh.attribute(kind) {
            dst.copy_from_slice(mb.channel(kind));
        }
    }
    mesh.finalize();
    log::debug!(
        "grass: block ({}, {}) at ({:.2}, {:.2}) with {} vertices",
        cell.ix,
        cell.iz,
        cell.cx,
        cell.cz,
        mb.vertex_count()
    );
    let center = Vec3::xz(cell.cx, cell.cz);
    let bounds = mb.bbox.map(|bb| bb.translated(center));
    // Scratch buffers are not kept past upload
    drop(mb);

    let node = host.create_child();
    host.set_local_position(&node, center);
    host.attach_mesh(&node, mesh, material);
    Ok(BuiltBlock { node, bounds })
}

//! Procedural grass: tiles a disc of ground into square blocks and builds one
//! double-sided blade mesh per block through host-provided scene and mesh traits.
#![forbid(unsafe_code)]

pub mod blade;
pub mod config;
mod constants;
pub mod error;
pub mod field;
pub mod grid;
pub mod headless;
pub mod host;
pub mod mesh;
pub mod random;
pub mod terrain;

pub use blade::{Blade, color_ramp};
pub use config::GrassConfig;
pub use constants::{
    BASE_COLOR, DEFAULT_VERTEX_CEILING, INDICES_PER_BLADE, MIN_RADIUS, TIP_COLOR,
    VERTICES_PER_BLADE,
};
pub use error::{
    BlockFault, ConfigError, GenerationError, GenerationOutcome, GenerationWarning, SkipReason,
};
pub use field::{BuiltBlock, GenerationReport, GrassField, build_block};
pub use grid::{GridCell, GridPlan};
pub use headless::{HeadlessMesh, HeadlessNode, HeadlessScene, NodeId};
pub use host::{MeshAttribute, MeshHost, MeshResource, SceneHost};
pub use mesh::BlockMeshBuild;
pub use random::RandomSource;
pub use terrain::{FlatGround, HeightSampler};

use std::fmt;
use std::io;

use crate::field::GenerationReport;
use crate::grid::GridCell;
use crate::host::MeshAttribute;

/// Result of a generation run that did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationOutcome {
    /// A prerequisite was missing; nothing was planned or built.
    Skipped(SkipReason),
    Built(GenerationReport),
}

impl GenerationOutcome {
    pub fn report(&self) -> Option<&GenerationReport> {
        match self {
            GenerationOutcome::Built(r) => Some(r),
            GenerationOutcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, GenerationOutcome::Skipped(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoMaterial,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoMaterial => write!(f, "no material assigned"),
        }
    }
}

/// Advisory conditions; generation proceeds regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationWarning {
    VertexCeilingExceeded { verts_per_block: usize, ceiling: usize },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::VertexCeilingExceeded {
                verts_per_block,
                ceiling,
            } => write!(
                f,
                "{} vertices per block exceeds the {} vertex limit; reduce blades_per_block",
                verts_per_block, ceiling
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GenerationError {
    /// A created mesh could not expose every required attribute channel.
    /// Blocks built before `cell` stay attached.
    MissingAttributes {
        cell: GridCell,
        missing: Vec<MeshAttribute>,
        blocks_built: usize,
    },
    /// A channel exists but cannot hold exactly the block's data.
    ChannelSizeMismatch {
        cell: GridCell,
        kind: MeshAttribute,
        expected: usize,
        actual: usize,
        blocks_built: usize,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::MissingAttributes {
                cell,
                missing,
                blocks_built,
            } => {
                write!(f, "block ({}, {}) mesh is missing attributes [", cell.ix, cell.iz)?;
                for (i, kind) in missing.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", kind)?;
                }
                write!(f, "] after {} block(s) were built", blocks_built)
            }
            GenerationError::ChannelSizeMismatch {
                cell,
                kind,
                expected,
                actual,
                blocks_built,
            } => write!(
                f,
                "block ({}, {}) {} channel holds {} floats, expected {}, after {} block(s) were built",
                cell.ix, cell.iz, kind, actual, expected, blocks_built
            ),
        }
    }
}

impl GenerationError {
    /// Blocks that were attached before the run aborted.
    pub fn blocks_built(&self) -> usize {
        match self {
            GenerationError::MissingAttributes { blocks_built, .. }
            | GenerationError::ChannelSizeMismatch { blocks_built, .. } => *blocks_built,
        }
    }
}

/// Why a single block's mesh could not be filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockFault {
    MissingAttributes(Vec<MeshAttribute>),
    ChannelSizeMismatch {
        kind: MeshAttribute,
        expected: usize,
        actual: usize,
    },
}

impl BlockFault {
    /// Lifts a block fault into the run-level error for `cell`.
    pub fn at(self, cell: GridCell, blocks_built: usize) -> GenerationError {
        match self {
            BlockFault::MissingAttributes(missing) => GenerationError::MissingAttributes {
                cell,
                missing,
                blocks_built,
            },
            BlockFault::ChannelSizeMismatch {
                kind,
                expected,
                actual,
            } => GenerationError::ChannelSizeMismatch {
                cell,
                kind,
                expected,
                actual,
                blocks_built,
            },
        }
    }
}

impl std::error::Error for GenerationError {}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config read error: {}", e),
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config value `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

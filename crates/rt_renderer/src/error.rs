//! Render errors.

use std::io;

use thiserror::Error;

use crate::runner::Strategy;

/// A render configuration that was rejected before any pixel was allocated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown anti-aliasing mode '{0}' (expected none, ssaa2x or ssaa4x)")]
    InvalidAntiAliasing(String),

    #[error("unknown runner '{0}' (expected single, mt or realtime)")]
    InvalidStrategy(String),

    #[error("unknown shading mode '{0}' (expected shaded, normals or distances)")]
    InvalidShading(String),

    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("invalid worker count {0}")]
    InvalidWorkerCount(usize),
}

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0} rendering is not implemented")]
    Unimplemented(Strategy),

    #[error("failed to spawn render worker {index}")]
    WorkerSpawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("render worker {index} panicked")]
    WorkerPanicked { index: usize },
}

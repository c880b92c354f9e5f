// src/error.rs
use thiserror::Error;

/// Gründe, aus denen eine Masseneingabe abgelehnt wird.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassError {
    #[error("not a valid number")]
    NotANumber,

    #[error("must be positive (> 0)")]
    NotPositive,

    #[error("exceeds maximum supported magnitude (1e50)")]
    ExceedsMaximum,
}

/// Gemeinsamer Fehlertyp für Validierung, Feldberechnung und Oberflächenaufbau.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisualizationError {
    #[error("Invalid mass: {0}")]
    InvalidMass(#[from] MassError),

    #[error("Failed to build surface: {reason}")]
    RenderFailure { reason: String },
}

pub type VisualizationResult<T> = Result<T, VisualizationError>;

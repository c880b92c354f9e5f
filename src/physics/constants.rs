// src/physics/constants.rs

/// Gravitationskonstante in m³/(kg·s²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Wird auf den Radius addiert, damit im Ursprung nicht durch Null geteilt wird.
pub const RADIUS_EPSILON: f64 = 1e-10;

/// Wird vor dem Logarithmus addiert, damit nie ln(0) entsteht.
pub const LOG_EPSILON: f64 = 1e-10;

/// Größte akzeptierte Masse (inklusive).
pub const MAX_MASS_KG: f64 = 1e50;

/// Bezugsmasse für den Betonungsfaktor m / 1e30.
pub const EMPHASIS_REFERENCE_MASS_KG: f64 = 1e30;

/// Masse der Standardansicht.
pub const EARTH_MASS_KG: f64 = 5.972e24;

// Festes Gitter
pub const GRID_RESOLUTION: usize = 100;
pub const GRID_MIN_KM: f64 = -50.0;
pub const GRID_MAX_KM: f64 = 50.0;

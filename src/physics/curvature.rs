// src/physics/curvature.rs
use super::constants::{
    EMPHASIS_REFERENCE_MASS_KG, GRAVITATIONAL_CONSTANT, LOG_EPSILON, RADIUS_EPSILON,
};
use super::mass::Mass;
use crate::math::grid::{CoordinateGrid, fixed_grid};
use crate::math::utils::min_max;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Krümmungsfeld über dem festen Gitter: X, Y und die skalierten Z-Werte,
/// alle in derselben Form (Zeile = y, Spalte = x).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvatureField {
    pub x: DMatrix<f64>,
    pub y: DMatrix<f64>,
    pub z: DMatrix<f64>,
}

/// Abstand jeder Stützstelle zum Ursprung, plus Epsilon gegen Division durch Null.
pub fn radial_distance(grid: &CoordinateGrid) -> DMatrix<f64> {
    grid.x
        .zip_map(&grid.y, |x, y| (x * x + y * y).sqrt() + RADIUS_EPSILON)
}

/// Newtonsches Potential -(G·m)/R.
pub fn potential(radius: &DMatrix<f64>, mass: Mass) -> DMatrix<f64> {
    let gm = GRAVITATIONAL_CONSTANT * mass.kilograms();
    radius.map(|r| -gm / r)
}

/// ln(|Z| + ε). Das Vorzeichen geht dabei verloren.
pub fn log_magnitude(potential: &DMatrix<f64>) -> DMatrix<f64> {
    potential.map(|z| (z.abs() + LOG_EPSILON).ln())
}

/// Verschiebt das Minimum auf 0 und skaliert das Maximum auf 1.
/// Ist das verschobene Maximum 0 (konstantes Feld), bleibt das Feld unskaliert.
pub fn normalize(values: &DMatrix<f64>) -> DMatrix<f64> {
    let Some((min, _)) = min_max(values.iter().copied()) else {
        return values.clone();
    };
    let mut shifted = values.map(|v| v - min);
    let max = min_max(shifted.iter().copied()).map_or(0.0, |(_, hi)| hi);
    if max > 0.0 {
        shifted.iter_mut().for_each(|v| *v /= max);
    }
    shifted
}

/// Nicht-physikalischer Betonungsfaktor m / 1e30.
pub fn emphasis_factor(mass: Mass) -> f64 {
    mass.kilograms() / EMPHASIS_REFERENCE_MASS_KG
}

/// Das logarithmische, normalisierte Feld vor der Massenbetonung.
pub fn normalized_log_field(mass: Mass) -> DMatrix<f64> {
    let radius = radial_distance(fixed_grid());
    normalize(&log_magnitude(&potential(&radius, mass)))
}

/// Berechnet das vollständige Krümmungsfeld für eine validierte Masse.
///
/// Reine Funktion: gleiche Masse liefert bitgleiche Ergebnisse.
pub fn compute_curvature(mass: Mass) -> CurvatureField {
    let grid = fixed_grid();
    let emphasis = emphasis_factor(mass);
    let z = normalized_log_field(mass).map(|v| v * emphasis);

    CurvatureField {
        x: grid.x.clone(),
        y: grid.y.clone(),
        z,
    }
}

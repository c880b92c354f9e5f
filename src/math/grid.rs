// src/math/grid.rs
use crate::physics::constants::{GRID_MAX_KM, GRID_MIN_KM, GRID_RESOLUTION};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Beschreibung eines quadratischen Abtastgitters: `resolution` gleichmäßig
/// verteilte Stützstellen pro Achse über [min, max] (beide Enden inklusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub resolution: usize,
    pub min: f64,
    pub max: f64,
}

impl GridSpec {
    /// Das feste Gitter der Visualisierung: 100 × 100 über [-50, 50] km.
    pub const FIXED: GridSpec = GridSpec {
        resolution: GRID_RESOLUTION,
        min: GRID_MIN_KM,
        max: GRID_MAX_KM,
    };

    pub fn axis(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.resolution)
    }
}

/// X- und Y-Koordinaten eines Gitters als gleich große Matrizen.
/// Zeile `i` entspricht `y[i]`, Spalte `j` entspricht `x[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateGrid {
    pub x: DMatrix<f64>,
    pub y: DMatrix<f64>,
}

/// `num` gleichmäßig verteilte Werte über [start, stop].
/// Der letzte Wert ist exakt `stop`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| i as f64 * step + start).collect();
            if let Some(last) = values.last_mut() {
                *last = stop;
            }
            values
        }
    }
}

/// Kartesisches Produkt zweier Achsen in "xy"-Indizierung.
pub fn meshgrid(x: &[f64], y: &[f64]) -> CoordinateGrid {
    CoordinateGrid {
        x: DMatrix::from_fn(y.len(), x.len(), |_, j| x[j]),
        y: DMatrix::from_fn(y.len(), x.len(), |i, _| y[i]),
    }
}

/// Das feste Gitter hängt nicht von der Masse ab und wird nur einmal gebaut.
pub fn fixed_grid() -> &'static CoordinateGrid {
    static GRID: OnceLock<CoordinateGrid> = OnceLock::new();
    GRID.get_or_init(|| {
        let axis = GridSpec::FIXED.axis();
        meshgrid(&axis, &axis)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let values = linspace(-50.0, 50.0, 100);
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], -50.0);
        assert_eq!(values[99], 50.0);
        for pair in values.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 100.0 / 99.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_meshgrid_xy_indexing() {
        let grid = meshgrid(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(grid.x.shape(), (2, 3));
        assert_eq!(grid.y.shape(), (2, 3));
        assert_eq!(grid.x[(1, 2)], 3.0);
        assert_eq!(grid.y[(1, 2)], 20.0);
        assert_eq!(grid.x[(0, 0)], grid.x[(1, 0)]);
        assert_eq!(grid.y[(0, 0)], grid.y[(0, 2)]);
    }

    #[test]
    fn test_fixed_grid_is_cached() {
        let a = fixed_grid();
        let b = fixed_grid();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.x.shape(), (100, 100));
        let axis = GridSpec::FIXED.axis();
        assert_eq!(a, &meshgrid(&axis, &axis));
    }
}

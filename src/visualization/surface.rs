// src/visualization/surface.rs
use super::colormap::ColorScale;
use crate::error::{VisualizationError, VisualizationResult};
use crate::math::scalar_field::ScalarField2D;
use crate::math::utils::min_max;
use crate::physics::constants::{GRID_MAX_KM, GRID_MIN_KM};
use crate::physics::curvature::CurvatureField;
use crate::physics::mass::Mass;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

pub const SURFACE_OPACITY: f32 = 0.8;
pub const Z_AXIS_RANGE: [f64; 2] = [-1.0, 1.0];
pub const CAMERA_EYE: [f64; 3] = [1.2, 1.2, 0.8];
pub const CURVATURE_AXIS_TITLE: &str = "Krümmung (log)";

/// Beschriftung und fester Anzeigebereich einer Achse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub title: String,
    pub range: [f64; 2],
}

impl AxisSpec {
    fn new(title: &str, range: [f64; 2]) -> Self {
        Self {
            title: title.to_string(),
            range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBarSpec {
    pub title: String,
    pub thickness: f32,
    /// Länge relativ zur Plothöhe.
    pub length: f32,
}

/// Kameraposition in normierten Szenenkoordinaten (Z zeigt nach oben).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub eye: [f64; 3],
    pub center: [f64; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectMode {
    /// Alle drei Achsen gleich lang dargestellt.
    Cube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: Margin {
                left: 0,
                right: 0,
                top: 50,
                bottom: 0,
            },
        }
    }
}

/// Vollständige, darstellbare Beschreibung einer Krümmungsoberfläche.
///
/// Reines Wertobjekt: Geometrie plus Styling, Achsen, Kamera und Titel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDescription {
    pub x: DMatrix<f64>,
    pub y: DMatrix<f64>,
    pub z: DMatrix<f64>,
    pub mass: Mass,
    pub color_scale: ColorScale,
    pub opacity: f32,
    pub color_bar: ColorBarSpec,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub z_axis: AxisSpec,
    pub camera: CameraSpec,
    pub aspect_mode: AspectMode,
    pub title: String,
    pub layout: SurfaceLayout,
}

impl SurfaceDescription {
    pub fn rows(&self) -> usize {
        self.z.nrows()
    }

    pub fn cols(&self) -> usize {
        self.z.ncols()
    }

    /// Tatsächlicher Wertebereich der Z-Daten, auf den die Farbskala abgebildet wird.
    pub fn color_range(&self) -> (f64, f64) {
        min_max(self.z.iter().copied()).unwrap_or((0.0, 0.0))
    }
}

impl ScalarField2D for SurfaceDescription {
    fn get_value(&self, x_idx: usize, y_idx: usize) -> f64 {
        self.z.get((y_idx, x_idx)).copied().unwrap_or(0.0)
    }

    fn cell_to_world(&self, x_idx: usize, y_idx: usize) -> (f64, f64) {
        (
            self.x.get((y_idx, x_idx)).copied().unwrap_or(0.0),
            self.y.get((y_idx, x_idx)).copied().unwrap_or(0.0),
        )
    }
}

/// Titel mit der Masse in wissenschaftlicher Notation, z.B. `5.97e24 kg`.
pub fn surface_title(mass: Mass) -> String {
    format!("Deformation der Raumzeit\nMasse: {mass}")
}

fn check_geometry(field: &CurvatureField) -> VisualizationResult<()> {
    let shape = field.z.shape();
    if shape.0 == 0 || shape.1 == 0 {
        return Err(VisualizationError::RenderFailure {
            reason: "surface geometry is empty".to_string(),
        });
    }
    if field.x.shape() != shape || field.y.shape() != shape {
        return Err(VisualizationError::RenderFailure {
            reason: format!(
                "geometry shapes differ: x {:?}, y {:?}, z {:?}",
                field.x.shape(),
                field.y.shape(),
                shape
            ),
        });
    }
    let finite = field
        .x
        .iter()
        .chain(field.y.iter())
        .chain(field.z.iter())
        .all(|v| v.is_finite());
    if !finite {
        return Err(VisualizationError::RenderFailure {
            reason: "surface geometry contains non-finite values".to_string(),
        });
    }
    Ok(())
}

/// Verpackt ein Krümmungsfeld in eine darstellbare Oberfläche.
///
/// Die Geometrie wird unverändert übernommen, es findet keine Berechnung statt.
/// Scheitert nur, wenn die Geometrie inkonsistent ist.
pub fn build_surface(
    field: &CurvatureField,
    mass: Mass,
) -> VisualizationResult<SurfaceDescription> {
    check_geometry(field)?;

    Ok(SurfaceDescription {
        x: field.x.clone(),
        y: field.y.clone(),
        z: field.z.clone(),
        mass,
        color_scale: ColorScale::Viridis,
        opacity: SURFACE_OPACITY,
        color_bar: ColorBarSpec {
            title: CURVATURE_AXIS_TITLE.to_string(),
            thickness: 15.0,
            length: 0.5,
        },
        x_axis: AxisSpec::new("X (km)", [GRID_MIN_KM, GRID_MAX_KM]),
        y_axis: AxisSpec::new("Y (km)", [GRID_MIN_KM, GRID_MAX_KM]),
        z_axis: AxisSpec::new(CURVATURE_AXIS_TITLE, Z_AXIS_RANGE),
        camera: CameraSpec {
            eye: CAMERA_EYE,
            center: [0.0, 0.0, 0.0],
        },
        aspect_mode: AspectMode::Cube,
        title: surface_title(mass),
        layout: SurfaceLayout::default(),
    })
}

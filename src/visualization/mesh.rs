// src/visualization/mesh.rs
use super::surface::SurfaceDescription;
use crate::math::utils::comparison::{inverse_lerp, remap_symmetric};
use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

/// Bildet Datenkoordinaten (X/Y in km, Z als Krümmung) auf einen Würfel
/// mit Kantenlänge `2 * half_extent` in Weltkoordinaten ab.
///
/// Daten-Z zeigt nach oben (Welt-Y), Daten-Y läuft entlang Welt -Z.
/// Z-Werte außerhalb des Achsenbereichs werden an der Würfelkante abgeschnitten,
/// die Daten selbst bleiben unverändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneMapping {
    pub half_extent: f32,
}

impl SceneMapping {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    pub fn data_to_world(&self, surface: &SurfaceDescription, x: f64, y: f64, z: f64) -> Vec3 {
        let h = self.half_extent;
        let [x0, x1] = surface.x_axis.range;
        let [y0, y1] = surface.y_axis.range;
        let [z0, z1] = surface.z_axis.range;
        Vec3::new(
            remap_symmetric(x, x0, x1, h),
            remap_symmetric(z, z0, z1, h).clamp(-h, h),
            -remap_symmetric(y, y0, y1, h),
        )
    }

    /// Kameraposition aus normierten Szenenkoordinaten (Würfel = [-0.5, 0.5]³).
    pub fn eye_to_world(&self, eye: [f64; 3]) -> Vec3 {
        Vec3::new(eye[0] as f32, eye[2] as f32, -eye[1] as f32) * 2.0 * self.half_extent
    }

    /// Nächstgelegene Stützstelle (Zeile, Spalte) zu einem Weltpunkt
    /// oder `None`, wenn der Punkt horizontal außerhalb des Würfels liegt.
    pub fn world_to_grid(&self, rows: usize, cols: usize, point: Vec3) -> Option<(usize, usize)> {
        let h = self.half_extent;
        if rows == 0 || cols == 0 || point.x.abs() > h || point.z.abs() > h {
            return None;
        }
        let col = ((point.x / h + 1.0) * 0.5 * (cols - 1) as f32).round() as usize;
        let row = ((-point.z / h + 1.0) * 0.5 * (rows - 1) as f32).round() as usize;
        Some((row.min(rows - 1), col.min(cols - 1)))
    }
}

/// Dreiecksnetz der Oberfläche, unabhängig von Bevy-Assets testbar.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGeometry {
    pub rows: usize,
    pub cols: usize,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl SurfaceGeometry {
    pub fn from_surface(surface: &SurfaceDescription, mapping: &SceneMapping) -> Self {
        let (rows, cols) = (surface.rows(), surface.cols());
        let (z_min, z_max) = surface.color_range();

        let mut positions = Vec::with_capacity(rows * cols);
        let mut colors = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let z = surface.z[(i, j)];
                let p = mapping.data_to_world(surface, surface.x[(i, j)], surface.y[(i, j)], z);
                positions.push(p.to_array());

                let t = inverse_lerp(z_min, z_max, z) as f32;
                let [r, g, b] = surface.color_scale.sample(t);
                colors.push(Color::rgba(r, g, b, surface.opacity).as_linear_rgba_f32());
            }
        }

        let normals = grid_normals(rows, cols, &positions);
        let indices = grid_indices(rows, cols);

        Self {
            rows,
            cols,
            positions,
            normals,
            colors,
            indices,
        }
    }

    pub fn position(&self, row: usize, col: usize) -> Option<Vec3> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.positions
            .get(row * self.cols + col)
            .map(|p| Vec3::from_array(*p))
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
            .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors)
            .with_inserted_indices(Indices::U32(self.indices))
    }
}

/// Zwei Dreiecke pro Gitterzelle.
fn grid_indices(rows: usize, cols: usize) -> Vec<u32> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }
    let mut indices = Vec::with_capacity((rows - 1) * (cols - 1) * 6);
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let a = (i * cols + j) as u32;
            let b = a + 1;
            let c = a + cols as u32;
            let d = c + 1;
            indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    indices
}

/// Vertex-Normalen aus zentralen Differenzen (einseitig am Rand).
fn grid_normals(rows: usize, cols: usize, positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
    let at = |i: usize, j: usize| Vec3::from_array(positions[i * cols + j]);
    let mut normals = Vec::with_capacity(positions.len());
    for i in 0..rows {
        for j in 0..cols {
            let along_x = at(i, (j + 1).min(cols - 1)) - at(i, j.saturating_sub(1));
            let along_y = at((i + 1).min(rows - 1), j) - at(i.saturating_sub(1), j);
            // Daten-X zeigt nach Welt +X, Daten-Y nach Welt -Z: das Kreuzprodukt zeigt nach oben.
            let normal = along_x.cross(along_y).normalize_or_zero();
            let normal = if normal == Vec3::ZERO { Vec3::Y } else { normal };
            normals.push(normal.to_array());
        }
    }
    normals
}

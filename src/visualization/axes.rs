// src/visualization/axes.rs
use crate::math::grid::linspace;
use crate::ui::resources::VisualizerParameters;
use bevy::prelude::*;

/// Die zwölf Kanten eines achsenparallelen Würfels um den Ursprung.
pub fn cube_edges(half: f32) -> [(Vec3, Vec3); 12] {
    let c = |x: f32, y: f32, z: f32| Vec3::new(x * half, y * half, z * half);
    [
        // Boden
        (c(-1., -1., -1.), c(1., -1., -1.)),
        (c(1., -1., -1.), c(1., -1., 1.)),
        (c(1., -1., 1.), c(-1., -1., 1.)),
        (c(-1., -1., 1.), c(-1., -1., -1.)),
        // Deckel
        (c(-1., 1., -1.), c(1., 1., -1.)),
        (c(1., 1., -1.), c(1., 1., 1.)),
        (c(1., 1., 1.), c(-1., 1., 1.)),
        (c(-1., 1., 1.), c(-1., 1., -1.)),
        // Senkrechte
        (c(-1., -1., -1.), c(-1., 1., -1.)),
        (c(1., -1., -1.), c(1., 1., -1.)),
        (c(1., -1., 1.), c(1., 1., 1.)),
        (c(-1., -1., 1.), c(-1., 1., 1.)),
    ]
}

/// Gleichmäßig verteilte Tick-Positionen über [-half, half].
pub fn axis_ticks(half: f32, count: usize) -> Vec<f32> {
    linspace(-half as f64, half as f64, count)
        .into_iter()
        .map(|t| t as f32)
        .collect()
}

/// Zeichnet den Achsenwürfel mit Ticks entlang der unteren Kanten.
///
/// X (Daten) = rot, Y (Daten) = grün, Krümmung = cyan.
pub fn draw_axis_box_gizmos(mut gizmos: Gizmos, params: Res<VisualizerParameters>) {
    let half = params.scene_half_extent;
    if !params.show_axis_box || half <= 0.0 {
        return;
    }

    let [r, g, b, a] = params.axis_box_color;
    let box_color = Color::rgba(r, g, b, a);
    for (start, end) in cube_edges(half) {
        gizmos.line(start, end, box_color);
    }

    let corner = Vec3::new(-half, -half, half);
    let tick_length = half * 0.04;
    let ticks = axis_ticks(half, params.axis_tick_count);

    // Daten-X läuft entlang Welt +X
    gizmos.line(corner, Vec3::new(half, -half, half), Color::RED);
    for &t in &ticks {
        let base = Vec3::new(t, -half, half);
        gizmos.line(base, base + Vec3::Z * tick_length, Color::RED);
    }

    // Daten-Y läuft entlang Welt -Z
    gizmos.line(corner, Vec3::new(-half, -half, -half), Color::LIME_GREEN);
    for &t in &ticks {
        let base = Vec3::new(-half, -half, t);
        gizmos.line(base, base - Vec3::X * tick_length, Color::LIME_GREEN);
    }

    // Krümmung läuft entlang Welt +Y
    gizmos.line(corner, Vec3::new(-half, half, half), Color::CYAN);
    for &t in &ticks {
        let base = Vec3::new(-half, t, half);
        gizmos.line(base, base - Vec3::X * tick_length, Color::CYAN);
    }
}

// src/visualization/hover.rs
use super::mesh::{SceneMapping, SurfaceGeometry};
use super::scene::{DisplayedSurface, ShownSurface};
use crate::math::scalar_field::ScalarField2D;
use crate::ui::resources::VisualizerParameters;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

/// Die Stützstelle unter dem Mauszeiger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPoint {
    pub row: usize,
    pub col: usize,
    pub x_km: f64,
    pub y_km: f64,
    pub curvature: f64,
    /// Position des Vertex in der Szene (nach dem Abschneiden).
    pub world: Vec3,
}

#[derive(Resource, Default, Debug)]
pub struct HoverSample(pub Option<HoverPoint>);

/// Eintritts- und Austrittsparameter eines Strahls in den Würfel [-half, half]³.
/// Achsen ohne Richtungsanteil begrenzen den Strahl nicht, solange der
/// Ursprung innerhalb der jeweiligen Platte liegt (Rand eingeschlossen).
fn ray_box_interval(origin: Vec3, direction: Vec3, half: f32) -> Option<(f32, f32)> {
    let mut t_enter = 0.0_f32;
    let mut t_exit = f32::INFINITY;
    for axis in 0..3 {
        let (o, d) = (origin[axis], direction[axis]);
        if d == 0.0 {
            if o.abs() > half {
                return None;
            }
            continue;
        }
        let t1 = (-half - o) / d;
        let t2 = (half - o) / d;
        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));
    }
    (t_enter <= t_exit && t_exit.is_finite()).then_some((t_enter, t_exit))
}

/// Tastet den Strahl ab und liefert die erste Stützstelle, deren Oberfläche
/// der Strahl von oben erreicht.
pub fn pick_surface_sample(
    geometry: &SurfaceGeometry,
    mapping: &SceneMapping,
    origin: Vec3,
    direction: Vec3,
    steps: usize,
) -> Option<(usize, usize)> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO || steps == 0 {
        return None;
    }
    let (t_enter, t_exit) = ray_box_interval(origin, direction, mapping.half_extent)?;

    (0..=steps).find_map(|k| {
        let t = t_enter + (t_exit - t_enter) * k as f32 / steps as f32;
        let point = origin + direction * t;
        let (row, col) = mapping.world_to_grid(geometry.rows, geometry.cols, point)?;
        let surface = geometry.position(row, col)?;
        (point.y <= surface.y).then_some((row, col))
    })
}

fn locate_hover(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    shown: &ShownSurface,
    params: &VisualizerParameters,
) -> Option<HoverPoint> {
    let cursor = window.cursor_position()?;
    let ray = camera.viewport_to_world(camera_transform, cursor)?;

    let mapping = SceneMapping::new(params.scene_half_extent);
    let (row, col) = pick_surface_sample(
        &shown.geometry,
        &mapping,
        ray.origin,
        *ray.direction,
        params.hover_march_steps,
    )?;

    let (x_km, y_km) = shown.description.cell_to_world(col, row);
    Some(HoverPoint {
        row,
        col,
        x_km,
        y_km,
        curvature: shown.description.get_value(col, row),
        world: shown.geometry.position(row, col)?,
    })
}

pub fn update_hover_system(
    mut contexts: EguiContexts,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    displayed: Res<DisplayedSurface>,
    params: Res<VisualizerParameters>,
    mut hover: ResMut<HoverSample>,
) {
    // Über der Seitenleiste wird nicht inspiziert.
    let next = if contexts.ctx_mut().is_pointer_over_area() {
        None
    } else {
        match (displayed.0.as_ref(), windows.get_single(), cameras.get_single()) {
            (Some(shown), Ok(window), Ok((camera, camera_transform))) => {
                locate_hover(window, camera, camera_transform, shown, &params)
            }
            _ => None,
        }
    };

    if hover.0 != next {
        hover.0 = next;
    }
}

pub fn draw_hover_marker_system(
    mut gizmos: Gizmos,
    hover: Res<HoverSample>,
    params: Res<VisualizerParameters>,
) {
    if !params.show_hover_marker {
        return;
    }
    if let Some(point) = hover.0 {
        gizmos.sphere(point.world, Quat::IDENTITY, params.hover_marker_radius, Color::ORANGE);
        let floor = Vec3::new(point.world.x, -params.scene_half_extent, point.world.z);
        gizmos.line(floor, point.world, Color::rgba(1.0, 0.65, 0.0, 0.5));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::presets::MassPreset;
    use crate::ui::interaction::visualize;

    fn earth_geometry(mapping: &SceneMapping) -> SurfaceGeometry {
        let surface = visualize(MassPreset::Earth.mass()).unwrap();
        SurfaceGeometry::from_surface(&surface, mapping)
    }

    #[test]
    fn test_ray_straight_down_hits_center() {
        let mapping = SceneMapping::new(5.0);
        let geometry = earth_geometry(&mapping);
        let origin = Vec3::new(0.0, 20.0, 0.0);
        let (row, col) = pick_surface_sample(&geometry, &mapping, origin, -Vec3::Y, 800).unwrap();
        assert!((49..=50).contains(&row));
        assert!((49..=50).contains(&col));
    }

    #[test]
    fn test_ray_hits_corner() {
        let mapping = SceneMapping::new(5.0);
        let geometry = earth_geometry(&mapping);
        let origin = Vec3::new(-4.99, 20.0, 4.99);
        let hit = pick_surface_sample(&geometry, &mapping, origin, -Vec3::Y, 800);
        assert_eq!(hit, Some((0, 0)));
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let mapping = SceneMapping::new(5.0);
        let geometry = earth_geometry(&mapping);
        assert_eq!(
            pick_surface_sample(&geometry, &mapping, Vec3::new(0.0, 20.0, 0.0), Vec3::Y, 800),
            None
        );
        assert_eq!(
            pick_surface_sample(&geometry, &mapping, Vec3::new(30.0, 20.0, 0.0), -Vec3::Y, 800),
            None
        );
    }

    #[test]
    fn test_ray_interval_with_origin_on_face() {
        // Ursprung liegt genau auf der Seitenfläche x = 5, Strahl parallel dazu.
        let origin = Vec3::new(5.0, 20.0, 0.0);
        assert_eq!(ray_box_interval(origin, -Vec3::Y, 5.0), Some((15.0, 25.0)));
        assert_eq!(ray_box_interval(Vec3::new(5.5, 20.0, 0.0), -Vec3::Y, 5.0), None);
    }

    #[test]
    fn test_ray_along_face_hits_edge_column() {
        let mapping = SceneMapping::new(5.0);
        let geometry = earth_geometry(&mapping);
        let origin = Vec3::new(5.0, 20.0, 0.0);
        let (row, col) = pick_surface_sample(&geometry, &mapping, origin, -Vec3::Y, 800).unwrap();
        assert_eq!(col, 99);
        assert!((49..=50).contains(&row));
    }

    #[test]
    fn test_oblique_ray_from_camera_eye() {
        let mapping = SceneMapping::new(5.0);
        let geometry = earth_geometry(&mapping);
        let eye = mapping.eye_to_world([1.2, 1.2, 0.8]);
        let hit = pick_surface_sample(&geometry, &mapping, eye, -eye, 800);
        let (row, col) = hit.unwrap();
        assert!((48..=51).contains(&row));
        assert!((48..=51).contains(&col));
    }
}

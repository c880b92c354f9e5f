// src/visualization/scene.rs
use super::mesh::{SceneMapping, SurfaceGeometry};
use super::surface::SurfaceDescription;
use crate::math::utils::comparison::nearly_equal;
use crate::ui::resources::VisualizerParameters;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Markiert die Entität der aktuell dargestellten Krümmungsoberfläche.
#[derive(Component, Debug, Default)]
pub struct SurfaceVisual;

/// Die aktuell dargestellte Oberfläche samt Dreiecksnetz (für Hover-Picking).
#[derive(Debug, Clone)]
pub struct ShownSurface {
    pub description: SurfaceDescription,
    pub geometry: SurfaceGeometry,
}

#[derive(Resource, Default, Debug)]
pub struct DisplayedSurface(pub Option<ShownSurface>);

/// Halbtransparentes, beidseitiges Material. Die Farbe kommt aus den Vertex-Farben.
pub fn surface_material(params: &VisualizerParameters) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        metallic: params.surface_metallic,
        perceptual_roughness: params.surface_roughness,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Spawnt die Oberfläche als Mesh-Entität und gibt die gezeigten Daten zurück.
pub fn spawn_surface(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    description: &SurfaceDescription,
    params: &VisualizerParameters,
) -> ShownSurface {
    let mapping = SceneMapping::new(params.scene_half_extent);
    let geometry = SurfaceGeometry::from_surface(description, &mapping);
    info!(
        "Spawning surface mesh with {} triangles.",
        geometry.triangle_count()
    );

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(geometry.clone().into_mesh()),
            material: materials.add(surface_material(params)),
            transform: Transform::IDENTITY,
            ..default()
        },
        SurfaceVisual,
        Name::new(description.title.replace('\n', " ")),
    ));

    ShownSurface {
        description: description.clone(),
        geometry,
    }
}

pub fn cleanup_surface_entities(
    commands: &mut Commands,
    query: &Query<Entity, With<SurfaceVisual>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Orbit-Winkel (alpha um Y, beta über der Ebene) und Radius einer Kameraposition
/// relativ zum Fokus, passend zur Konvention von `PanOrbitCamera`.
pub fn orbit_angles(eye: Vec3, focus: Vec3) -> (f32, f32, f32) {
    let offset = eye - focus;
    let radius = offset.length();
    if nearly_equal(radius, 0.0) {
        return (0.0, 0.0, 0.0);
    }
    let alpha = offset.x.atan2(offset.z);
    let beta = (offset.y / radius).clamp(-1.0, 1.0).asin();
    (alpha, beta, radius)
}

/// Setzt die Kamera auf die in der Beschreibung festgelegte Blickrichtung zurück.
pub fn reset_camera_to_description(
    camera: &mut PanOrbitCamera,
    description: &SurfaceDescription,
    params: &VisualizerParameters,
) {
    let mapping = SceneMapping::new(params.scene_half_extent);
    let eye = mapping.eye_to_world(description.camera.eye);
    let [cx, cy, cz] = description.camera.center;
    let focus = mapping.data_to_world(description, cx, cy, cz);
    let (alpha, beta, radius) = orbit_angles(eye, focus);

    camera.target_focus = focus;
    camera.target_yaw = alpha;
    camera.target_pitch = beta;
    camera.target_radius = radius;
}

// ./src/setup.rs
use crate::ui::resources::VisualizerParameters;
use crate::visualization::mesh::SceneMapping;
use crate::visualization::scene::orbit_angles;
use crate::visualization::surface::CAMERA_EYE;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

pub fn setup_scene(mut commands: Commands, params: Res<VisualizerParameters>) {
    let half = params.scene_half_extent;
    let [r, g, b] = params.background_color;
    commands.insert_resource(ClearColor(Color::rgb(r, g, b)));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: params.ambient_brightness,
    });

    // Licht
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            shadows_enabled: false,
            intensity: params.light_intensity,
            range: half * 20.0,
            ..default()
        },
        transform: Transform::from_xyz(half * 0.8, half * 2.0, half * 0.8),
        ..default()
    });

    // Kamera, Startposition entspricht der Blickrichtung der Oberflächen
    let eye = SceneMapping::new(half).eye_to_world(CAMERA_EYE);
    let (alpha, beta, radius) = orbit_angles(eye, Vec3::ZERO);
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            radius: Some(radius),
            yaw: Some(alpha),
            pitch: Some(beta),
            ..default()
        },
    ));
    info!("Scene set up (camera radius {radius:.2}).");
}

// ./src/main.rs
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod error;
pub mod math;
pub mod physics;
pub mod setup; // Kamera, Licht und Hintergrund
pub mod ui;
pub mod visualization;

use setup::setup_scene;
use ui::controls::control_panel_ui_system;
use ui::resources::*;
use ui::state::VisualizerState;
use ui::systems::*;
use visualization::axes::draw_axis_box_gizmos;
use visualization::hover::{HoverSample, draw_hover_marker_system, update_hover_system};
use visualization::scene::DisplayedSurface;

fn main() {
    let params = VisualizerParameters::default();
    let (width, height) = params.window_resolution();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: params.window_title.clone(),
                resolution: WindowResolution::new(width, height),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .insert_resource(params)
        .init_resource::<MassInputState>()
        .init_resource::<RecomputeRequest>()
        .init_resource::<DisplayedOutcome>()
        .init_resource::<DisplayedSurface>()
        .init_resource::<HoverSample>()
        .init_state::<VisualizerState>()
        .add_systems(Startup, setup_scene)
        // --- Initialisierungsphase ---
        .add_systems(
            OnEnter(VisualizerState::Initializing),
            request_initial_view_system,
        )
        .add_systems(
            Update,
            (
                // Block 1: UI sammelt Eingaben
                control_panel_ui_system,
                // Block 2: Interaktionszyklus, nur bei gesetzter Anfrage
                handle_recompute_request_system.run_if(resource_equals(RecomputeRequest(true))),
                // Block 3: Szene an das Ergebnis anpassen
                apply_displayed_outcome_system.run_if(resource_changed::<DisplayedOutcome>),
                finish_initialization_system.run_if(in_state(VisualizerState::Initializing)),
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                update_hover_system,
                draw_hover_marker_system,
                draw_axis_box_gizmos,
            )
                .chain()
                .run_if(in_state(VisualizerState::Ready)),
        )
        .run();
}

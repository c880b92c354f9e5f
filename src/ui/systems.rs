use super::interaction::{DisplayOutcome, PanelInput, handle_interaction};
use super::resources::{DisplayedOutcome, MassInputState, RecomputeRequest, VisualizerParameters};
use super::state::VisualizerState;
use crate::visualization::hover::HoverSample;
use crate::visualization::scene::{
    DisplayedSurface, SurfaceVisual, cleanup_surface_entities, reset_camera_to_description,
    spawn_surface,
};
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Startansicht anfordern, die Berechnung läuft im normalen Update-Pfad.
pub fn request_initial_view_system(mut request: ResMut<RecomputeRequest>) {
    info!("Requesting initial curvature view.");
    request.0 = true;
}

pub fn finish_initialization_system(
    outcome: Res<DisplayedOutcome>,
    mut next_state: ResMut<NextState<VisualizerState>>,
) {
    if outcome.0.is_some() {
        next_state.set(VisualizerState::Ready);
        info!("Initial view ready, accepting input.");
    }
}

/// Ein Interaktionszyklus: Widget-Zustand → Ergebnis. Läuft nur bei gesetzter Anfrage.
pub fn handle_recompute_request_system(
    mut request: ResMut<RecomputeRequest>,
    mut input: ResMut<MassInputState>,
    mut outcome: ResMut<DisplayedOutcome>,
) {
    let result = handle_interaction(PanelInput {
        text: &input.text,
        preset: input.preset,
        generate_pressed: input.generate_pressed,
    });

    match &result {
        DisplayOutcome::Surface { surface, .. } => {
            let (min, max) = surface.color_range();
            info!(
                "Rendered curvature surface for {} (field range {:.3e} .. {:.3e})",
                surface.mass, min, max
            );
        }
        DisplayOutcome::DefaultView {
            pending: Some(err), ..
        } => {
            warn!("Mass input not used ({err}), showing Earth default view.");
        }
        DisplayOutcome::DefaultView { pending: None, .. } => {
            info!("Showing Earth default view.");
        }
        DisplayOutcome::InputError(err) => {
            warn!("Mass input rejected: {err}");
        }
        DisplayOutcome::RenderError(err) => {
            error!("{err}");
        }
    }

    outcome.0 = Some(result);
    input.generate_pressed = false;
    request.0 = false;
}

/// Ersetzt die dargestellte Oberfläche, sobald sich das Ergebnis geändert hat.
/// Ohne Oberfläche im Ergebnis (Fehlerfall) bleibt die Szene leer.
pub fn apply_displayed_outcome_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    outcome: Res<DisplayedOutcome>,
    params: Res<VisualizerParameters>,
    existing: Query<Entity, With<SurfaceVisual>>,
    mut displayed: ResMut<DisplayedSurface>,
    mut hover: ResMut<HoverSample>,
    mut cameras: Query<&mut PanOrbitCamera>,
) {
    cleanup_surface_entities(&mut commands, &existing);
    hover.0 = None;

    displayed.0 = outcome
        .0
        .as_ref()
        .and_then(DisplayOutcome::surface)
        .map(|description| {
            let shown = spawn_surface(
                &mut commands,
                &mut meshes,
                &mut materials,
                description,
                &params,
            );
            for mut camera in cameras.iter_mut() {
                reset_camera_to_description(&mut camera, description, &params);
            }
            shown
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MassError;
    use crate::physics::presets::MassPreset;

    fn request_app() -> App {
        let mut app = App::new();
        app.init_resource::<RecomputeRequest>()
            .init_resource::<MassInputState>()
            .init_resource::<DisplayedOutcome>()
            .add_systems(
                Update,
                handle_recompute_request_system.run_if(resource_equals(RecomputeRequest(true))),
            );
        app
    }

    #[test]
    fn test_request_is_consumed() {
        let mut app = request_app();
        app.update();
        assert!(app.world.resource::<DisplayedOutcome>().0.is_none());

        app.world.resource_mut::<RecomputeRequest>().0 = true;
        app.update();

        assert_eq!(*app.world.resource::<RecomputeRequest>(), RecomputeRequest(false));
        let outcome = app.world.resource::<DisplayedOutcome>();
        let surface = outcome.0.as_ref().and_then(DisplayOutcome::surface).unwrap();
        assert_eq!(surface.mass, MassPreset::Earth.mass());
    }

    #[test]
    fn test_generate_flag_is_reset_after_error() {
        let mut app = request_app();
        {
            let mut input = app.world.resource_mut::<MassInputState>();
            input.text = "-5".to_string();
            input.generate_pressed = true;
        }
        app.world.resource_mut::<RecomputeRequest>().0 = true;
        app.update();

        assert_eq!(
            app.world.resource::<DisplayedOutcome>().0,
            Some(DisplayOutcome::InputError(MassError::NotPositive))
        );
        assert!(!app.world.resource::<MassInputState>().generate_pressed);
    }
}

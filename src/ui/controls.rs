// ./src/ui/controls.rs
use super::content::{APP_INTRO, DISCLAIMER, KEY_CONCEPTS, MASS_INPUT_HINT, reference_mass_rows};
use super::interaction::{
    DEFAULT_VIEW_NOTE, DisplayOutcome, SimulationSummary, input_error_message,
};
use super::resources::{
    DisplayedOutcome, MassInputState, RecomputeRequest, VisualizerParameters,
};
use crate::physics::presets::MassPreset;
use crate::visualization::hover::HoverSample;
use crate::visualization::scene::{DisplayedSurface, reset_camera_to_description};
use crate::visualization::surface::SurfaceDescription;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Color32, ComboBox, ScrollArea, SidePanel},
};
use bevy_panorbit_camera::PanOrbitCamera;

const ERROR_COLOR: Color32 = Color32::from_rgb(230, 90, 90);
const INFO_COLOR: Color32 = Color32::from_rgb(110, 170, 230);
const LEGEND_SIZE: egui::Vec2 = egui::vec2(240.0, 16.0);
const LEGEND_STEPS: usize = 64;

pub fn control_panel_ui_system(
    mut contexts: EguiContexts,
    mut input: ResMut<MassInputState>,
    mut request: ResMut<RecomputeRequest>,
    mut params: ResMut<VisualizerParameters>,
    outcome: Res<DisplayedOutcome>,
    displayed: Res<DisplayedSurface>,
    hover: Res<HoverSample>,
    mut cameras: Query<&mut PanOrbitCamera>,
) {
    let panel_width = params.panel_width;
    SidePanel::left("control_panel")
        .exact_width(panel_width)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(params.window_title.as_str());
                ui.label(APP_INTRO);
                ui.separator();

                ui.heading("Parameter");
                mass_input_section(ui, &mut input, &mut request);
                ui.separator();

                ui.heading("3D-Visualisierung");
                outcome_section(ui, outcome.0.as_ref());

                if let Some(shown) = &displayed.0 {
                    ui.separator();
                    color_legend(ui, &shown.description);

                    ui.add_space(4.0);
                    match &hover.0 {
                        Some(point) => {
                            ui.label(format!(
                                "X: {:.1} km   Y: {:.1} km   Krümmung: {:.4}",
                                point.x_km, point.y_km, point.curvature
                            ));
                        }
                        None => {
                            ui.weak("Maus über die Oberfläche bewegen, um Werte abzulesen.");
                        }
                    }

                    if ui.button("⟲ Ansicht zurücksetzen").clicked() {
                        for mut camera in cameras.iter_mut() {
                            reset_camera_to_description(&mut camera, &shown.description, &params);
                        }
                    }
                }
                ui.separator();

                ui.collapsing("Darstellung", |ui| {
                    ui.checkbox(&mut params.show_axis_box, "Achsenwürfel anzeigen");
                    ui.checkbox(&mut params.show_hover_marker, "Markierung unter dem Mauszeiger");
                });

                ui.collapsing("Kamerasteuerung Info", |ui| {
                    ui.label("Rechte Maustaste + Ziehen: Orbit");
                    ui.label("Mittlere Maustaste + Ziehen: Pan");
                    ui.label("Mausrad: Zoom");
                });
                ui.separator();

                ui.heading("Wissenschaftliche Informationen");
                ui.collapsing("Grundbegriffe", |ui| {
                    for (term, explanation) in KEY_CONCEPTS {
                        ui.label(format!("• {term}: {explanation}"));
                    }
                });
                ui.collapsing("Referenzmassen", |ui| {
                    egui::Grid::new("reference_masses")
                        .striped(true)
                        .show(ui, |ui| {
                            for (name, value) in reference_mass_rows() {
                                ui.label(name);
                                ui.label(value);
                                ui.end_row();
                            }
                        });
                });
                ui.add_space(6.0);
                ui.small(DISCLAIMER);
            });
        });
}

fn mass_input_section(
    ui: &mut egui::Ui,
    input: &mut MassInputState,
    request: &mut RecomputeRequest,
) {
    ui.label("Masse des Körpers (kg):");
    let response = ui
        .add(egui::TextEdit::singleline(&mut input.text).hint_text("5.972e24"))
        .on_hover_text(MASS_INPUT_HINT);
    if response.changed() {
        // Eigene Eingabe: Beispielauswahl verlassen.
        input.preset = None;
    }
    if response.lost_focus() {
        request.0 = true;
    }

    ui.add_space(4.0);
    let mut selected = input.preset;
    ComboBox::from_label("Beispielmassen")
        .selected_text(selected.map_or("Benutzerdefiniert", MassPreset::label))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, "Benutzerdefiniert");
            for preset in MassPreset::ALL {
                ui.selectable_value(&mut selected, Some(preset), preset.label());
            }
        });
    if selected != input.preset {
        input.preset = selected;
        if let Some(preset) = selected {
            input.text = preset.input_text();
        }
        request.0 = true;
    }
    if let Some(preset) = input.preset {
        ui.colored_label(INFO_COLOR, format!("Gewählte Masse: {}", preset.mass()));
    }

    ui.add_space(4.0);
    if ui.button("Visualisierung erzeugen").clicked() {
        input.generate_pressed = true;
        request.0 = true;
    }
}

fn outcome_section(ui: &mut egui::Ui, outcome: Option<&DisplayOutcome>) {
    let Some(outcome) = outcome else {
        ui.weak("Visualisierung wird erzeugt...");
        return;
    };

    if let Some(message) = outcome.error_message() {
        ui.colored_label(ERROR_COLOR, message);
    }

    match outcome {
        DisplayOutcome::Surface { summary, .. } => summary_block(ui, summary),
        DisplayOutcome::DefaultView { surface, pending } => {
            ui.colored_label(INFO_COLOR, DEFAULT_VIEW_NOTE);
            if let Some(err) = pending {
                ui.weak(format!("Eingabe nicht verwendet: {}", input_error_message(*err)));
            }
            summary_block(ui, &SimulationSummary::from_surface(surface));
        }
        DisplayOutcome::InputError(_) | DisplayOutcome::RenderError(_) => {}
    }
}

fn summary_block(ui: &mut egui::Ui, summary: &SimulationSummary) {
    ui.label(egui::RichText::new("Informationen zur Simulation:").strong());
    for line in summary.lines() {
        ui.label(format!("• {line}"));
    }
}

/// Farblegende in der Seitenleiste, entspricht der Farbskala des Plots.
fn color_legend(ui: &mut egui::Ui, surface: &SurfaceDescription) {
    let (min, max) = surface.color_range();
    ui.label(format!(
        "{} ({})",
        surface.color_bar.title,
        surface.color_scale.name()
    ));

    let (rect, _) = ui.allocate_exact_size(LEGEND_SIZE, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let step_width = rect.width() / LEGEND_STEPS as f32;
    for step in 0..LEGEND_STEPS {
        let t = step as f32 / (LEGEND_STEPS - 1) as f32;
        let [r, g, b] = surface.color_scale.sample_u8(t);
        let min_pos = rect.min + egui::vec2(step as f32 * step_width, 0.0);
        painter.rect_filled(
            egui::Rect::from_min_size(min_pos, egui::vec2(step_width + 0.5, rect.height())),
            0.0,
            Color32::from_rgb(r, g, b),
        );
    }

    ui.horizontal(|ui| {
        ui.small(format!("{min:.3e}"));
        ui.add_space(LEGEND_SIZE.x - 90.0);
        ui.small(format!("{max:.3e}"));
    });
}

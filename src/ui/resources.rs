use super::interaction::DisplayOutcome;
use crate::physics::presets::MassPreset;
use crate::visualization::surface::SurfaceLayout;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Darstellungs- und Fensterparameter der Anwendung.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct VisualizerParameters {
    // --- Fenster & Layout ---
    pub window_title: String,
    pub panel_width: f32,

    // --- Szene ---
    /// Halbe Kantenlänge des Darstellungswürfels in Weltkoordinaten.
    pub scene_half_extent: f32,
    pub surface_metallic: f32,
    pub surface_roughness: f32,
    pub light_intensity: f32,
    pub ambient_brightness: f32,
    pub background_color: [f32; 3],

    // --- Achsen & Inspektion ---
    pub show_axis_box: bool,
    pub axis_box_color: [f32; 4],
    pub axis_tick_count: usize,
    pub show_hover_marker: bool,
    pub hover_marker_radius: f32,
    /// Abtastschritte entlang des Mausstrahls beim Picking.
    pub hover_march_steps: usize,
}

impl VisualizerParameters {
    /// Fenstergröße: 3D-Ansicht in Plotgröße plus Seitenleiste.
    pub fn window_resolution(&self) -> (f32, f32) {
        let layout = SurfaceLayout::default();
        (layout.width as f32 + self.panel_width, layout.height as f32)
    }
}

impl Default for VisualizerParameters {
    fn default() -> Self {
        Self {
            // Fenster
            window_title: "Visualisierung der Raumzeit-Krümmung".to_string(),
            panel_width: 380.0,

            // Szene
            scene_half_extent: 5.0,
            surface_metallic: 0.1,
            surface_roughness: 0.8,
            light_intensity: 4_000_000.0,
            ambient_brightness: 300.0,
            background_color: [0.05, 0.05, 0.08],

            // Achsen/Inspektion
            show_axis_box: true,
            axis_box_color: [0.8, 0.8, 0.8, 0.4],
            axis_tick_count: 5,
            show_hover_marker: true,
            hover_marker_radius: 0.12,
            hover_march_steps: 800,
        }
    }
}

/// Zustand der Eingabe-Widgets (Freitext, Beispielauswahl, Knopf).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MassInputState {
    pub text: String,
    /// `None` bedeutet "Benutzerdefiniert".
    pub preset: Option<MassPreset>,
    /// Wurde im aktuellen Interaktionszyklus "Erzeugen" gedrückt?
    pub generate_pressed: bool,
}

impl Default for MassInputState {
    fn default() -> Self {
        Self {
            text: MassPreset::Earth.input_text(),
            preset: None,
            generate_pressed: false,
        }
    }
}

/// Anfrage zur Neuberechnung, wird von der UI gesetzt und vom Handler verbraucht.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct RecomputeRequest(pub bool);

/// Ergebnis der letzten Interaktion.
#[derive(Resource, Default, Debug)]
pub struct DisplayedOutcome(pub Option<DisplayOutcome>);

// src/ui/interaction.rs
//! Reiner Event-Handler für einen Interaktionszyklus der Oberfläche.
//!
//! Die UI sammelt nur Widget-Zustand. Validierung, Feldberechnung und
//! Oberflächenaufbau laufen hier und teilen sich denselben Fehlertyp.

use crate::error::{MassError, VisualizationError, VisualizationResult};
use crate::physics::curvature::compute_curvature;
use crate::physics::mass::{Mass, parse_mass};
use crate::physics::presets::MassPreset;
use crate::visualization::surface::{SurfaceDescription, build_surface};
use std::borrow::Cow;

pub const DEFAULT_VIEW_NOTE: &str = "Standardansicht: Erdmasse (5.972×10²⁴ kg)";

/// Widget-Zustand eines Interaktionszyklus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelInput<'a> {
    pub text: &'a str,
    pub preset: Option<MassPreset>,
    pub generate_pressed: bool,
}

/// Kurzfassung der dargestellten Simulation für den Infoblock.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub mass: Mass,
    pub range_km: (f64, f64),
    pub resolution: (usize, usize),
    pub scale: &'static str,
}

impl SimulationSummary {
    pub fn from_surface(surface: &SurfaceDescription) -> Self {
        Self {
            mass: surface.mass,
            range_km: (surface.x_axis.range[0], surface.x_axis.range[1]),
            resolution: (surface.cols(), surface.rows()),
            scale: "Logarithmisch normalisiert",
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Masse: {}", self.mass),
            format!(
                "Räumlicher Bereich: {:+} km bis {:+} km",
                self.range_km.0, self.range_km.1
            ),
            format!("Auflösung: {}x{} Punkte", self.resolution.0, self.resolution.1),
            format!("Skala: {}", self.scale),
        ]
    }
}

/// Was nach einem Interaktionszyklus angezeigt wird.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayOutcome {
    /// Gültige Eingabe, Oberfläche erzeugt.
    Surface {
        surface: SurfaceDescription,
        summary: SimulationSummary,
    },
    /// Keine gültige Eingabe und kein expliziter Auslöser: Erdmasse als Standard.
    /// `pending` enthält den Grund, warum die aktuelle Eingabe nicht verwendet wurde.
    DefaultView {
        surface: SurfaceDescription,
        pending: Option<MassError>,
    },
    /// "Erzeugen" wurde mit ungültiger Eingabe gedrückt.
    InputError(MassError),
    /// Aufbau oder Darstellung ist fehlgeschlagen.
    RenderError(VisualizationError),
}

impl DisplayOutcome {
    pub fn surface(&self) -> Option<&SurfaceDescription> {
        match self {
            DisplayOutcome::Surface { surface, .. }
            | DisplayOutcome::DefaultView { surface, .. } => Some(surface),
            DisplayOutcome::InputError(_) | DisplayOutcome::RenderError(_) => None,
        }
    }

    /// Sichtbare Fehlermeldung, falls vorhanden.
    pub fn error_message(&self) -> Option<String> {
        match self {
            DisplayOutcome::InputError(err) => Some(input_error_message(*err)),
            DisplayOutcome::RenderError(err) => {
                Some(format!("Fehler beim Erzeugen der Visualisierung: {err}"))
            }
            DisplayOutcome::Surface { .. } | DisplayOutcome::DefaultView { .. } => None,
        }
    }
}

pub fn input_error_message(err: MassError) -> String {
    format!("Ungültige Masse: {err}")
}

/// Die Beispielauswahl hat Vorrang vor dem (ggf. veralteten) Freitext.
pub fn effective_input<'a>(text: &'a str, preset: Option<MassPreset>) -> Cow<'a, str> {
    match preset {
        Some(preset) => Cow::Owned(preset.input_text()),
        None => Cow::Borrowed(text),
    }
}

/// Feldberechnung und Oberflächenaufbau für eine validierte Masse.
pub fn visualize(mass: Mass) -> VisualizationResult<SurfaceDescription> {
    let field = compute_curvature(mass);
    build_surface(&field, mass)
}

/// Validator → Feldberechnung → Renderer mit einheitlicher Fehlerweitergabe.
pub fn visualize_input(raw: &str) -> VisualizationResult<SurfaceDescription> {
    let mass = parse_mass(raw)?;
    visualize(mass)
}

/// Verarbeitet einen Interaktionszyklus ohne eigenen Zustand.
pub fn handle_interaction(input: PanelInput<'_>) -> DisplayOutcome {
    let raw = effective_input(input.text, input.preset);

    match visualize_input(&raw) {
        Ok(surface) => {
            let summary = SimulationSummary::from_surface(&surface);
            DisplayOutcome::Surface { surface, summary }
        }
        Err(VisualizationError::InvalidMass(err)) if input.generate_pressed => {
            DisplayOutcome::InputError(err)
        }
        Err(VisualizationError::InvalidMass(err)) => default_view(Some(err)),
        Err(err) => DisplayOutcome::RenderError(err),
    }
}

/// Standardansicht mit Erdmasse.
pub fn default_view(pending: Option<MassError>) -> DisplayOutcome {
    match visualize(MassPreset::Earth.mass()) {
        Ok(surface) => DisplayOutcome::DefaultView { surface, pending },
        Err(err) => DisplayOutcome::RenderError(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str, preset: Option<MassPreset>, generate_pressed: bool) -> PanelInput<'_> {
        PanelInput {
            text,
            preset,
            generate_pressed,
        }
    }

    #[test]
    fn test_valid_input_renders_without_trigger() {
        let outcome = handle_interaction(input("1.989e30", None, false));
        let DisplayOutcome::Surface { surface, summary } = outcome else {
            panic!("expected a rendered surface");
        };
        assert_eq!(surface.mass.kilograms(), 1.989e30);
        assert!(surface.title.contains("1.99e30 kg"));
        assert_eq!(summary.resolution, (100, 100));
    }

    #[test]
    fn test_preset_takes_precedence_over_free_text() {
        let outcome = handle_interaction(input("abc", Some(MassPreset::Jupiter), true));
        let surface = outcome.surface().unwrap();
        assert_eq!(surface.mass.kilograms(), 1.898e27);
        assert!(matches!(outcome, DisplayOutcome::Surface { .. }));
    }

    #[test]
    fn test_invalid_input_with_trigger_reports_reason() {
        let outcome = handle_interaction(input("-5", None, true));
        assert_eq!(outcome, DisplayOutcome::InputError(MassError::NotPositive));
        assert!(outcome.surface().is_none());
        assert!(outcome.error_message().unwrap().contains("must be positive"));

        let outcome = handle_interaction(input("1e51", None, true));
        assert_eq!(outcome, DisplayOutcome::InputError(MassError::ExceedsMaximum));
    }

    #[test]
    fn test_invalid_input_without_trigger_falls_back_to_earth() {
        let outcome = handle_interaction(input("abc", None, false));
        let DisplayOutcome::DefaultView { surface, pending } = outcome else {
            panic!("expected the default view");
        };
        assert_eq!(surface.mass, MassPreset::Earth.mass());
        assert_eq!(pending, Some(MassError::NotANumber));
    }

    #[test]
    fn test_effective_input() {
        assert_eq!(effective_input("42", None), "42");
        assert_eq!(effective_input("42", Some(MassPreset::Moon)), "7.342e22");
    }

    #[test]
    fn test_visualize_input_propagates_validation_error() {
        assert_eq!(
            visualize_input("abc").unwrap_err(),
            VisualizationError::InvalidMass(MassError::NotANumber)
        );
        assert!(visualize_input("1e50").is_ok());
    }

    #[test]
    fn test_render_error_message_is_generic_with_reason() {
        let outcome = DisplayOutcome::RenderError(VisualizationError::RenderFailure {
            reason: "out of memory".to_string(),
        });
        let message = outcome.error_message().unwrap();
        assert!(message.starts_with("Fehler beim Erzeugen der Visualisierung"));
        assert!(message.contains("out of memory"));
    }

    #[test]
    fn test_summary_lines() {
        let surface = visualize(MassPreset::Earth.mass()).unwrap();
        let lines = SimulationSummary::from_surface(&surface).lines();
        assert_eq!(lines[0], "Masse: 5.97e24 kg");
        assert_eq!(lines[1], "Räumlicher Bereich: -50 km bis +50 km");
        assert_eq!(lines[2], "Auflösung: 100x100 Punkte");
    }
}

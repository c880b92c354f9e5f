use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum VisualizerState {
    #[default] // Startzustand, berechnet die Standardansicht
    Initializing,
    Ready,
}

// src/math/scalar_field.rs

/// Trait für ein zweidimensionales Skalarfeld auf einem regelmäßigen Gitter.
/// Die Hover-Inspektion liest Werte nur über diese Schnittstelle.
pub trait ScalarField2D {
    /// Skalarwert an der Stützstelle (x_idx, y_idx).
    /// Gibt 0.0 zurück, wenn der Index außerhalb liegt.
    fn get_value(&self, x_idx: usize, y_idx: usize) -> f64;

    /// Weltkoordinate (x, y) der Stützstelle.
    fn cell_to_world(&self, x_idx: usize, y_idx: usize) -> (f64, f64);
}

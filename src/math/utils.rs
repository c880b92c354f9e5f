// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
}

/// Vergleichs- und Interpolationsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Inverse lineare Interpolation.
    /// Nur ein leeres oder nicht endliches Intervall liefert 0.0, beliebig
    /// kleine Intervalle werden voll aufgelöst.
    pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
        let span = b - a;
        if span == 0.0 || !span.is_finite() {
            0.0
        } else {
            (value - a) / span
        }
    }

    /// Bildet `value` aus [from_min, from_max] linear auf [-half, half] ab.
    pub fn remap_symmetric(value: f64, from_min: f64, from_max: f64, half: f32) -> f32 {
        let t = inverse_lerp(from_min, from_max, value) as f32;
        lerp(-half, half, t)
    }
}

/// Minimum und Maximum einer Wertefolge, NaN wird ignoriert.
pub fn min_max<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::comparison::*;
    use super::*;

    #[test]
    fn test_inverse_lerp_degenerate_interval() {
        assert_eq!(inverse_lerp(2.0, 2.0, 5.0), 0.0);
        assert_eq!(inverse_lerp(0.0, f64::INFINITY, 5.0), 0.0);
        assert!(nearly_equal(inverse_lerp(0.0, 4.0, 1.0) as f32, 0.25));
    }

    #[test]
    fn test_inverse_lerp_tiny_interval() {
        // Wertebereich eines Feldes für 1e15 kg: [0, 1e-15].
        assert!(nearly_equal(inverse_lerp(0.0, 1e-15, 5e-16) as f32, 0.5));
        assert!(nearly_equal(inverse_lerp(0.0, 1e-15, 1e-15) as f32, 1.0));
    }

    #[test]
    fn test_remap_symmetric() {
        assert!(nearly_equal(remap_symmetric(-50.0, -50.0, 50.0, 5.0), -5.0));
        assert!(nearly_equal(remap_symmetric(50.0, -50.0, 50.0, 5.0), 5.0));
        assert!(nearly_equal(remap_symmetric(0.0, -1.0, 1.0, 2.0), 0.0));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max([3.0, -1.0, f64::NAN, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(min_max(std::iter::empty()), None);
    }
}

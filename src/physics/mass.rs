// src/physics/mass.rs
use super::constants::MAX_MASS_KG;
use crate::error::MassError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eine validierte Masse in Kilogramm, garantiert im Bereich (0, 1e50].
///
/// Kann nur über [`Mass::new`] oder [`parse_mass`] erzeugt werden, damit die
/// Feldberechnung nie eine ungültige Masse sieht.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Mass(f64);

impl Mass {
    pub fn new(kilograms: f64) -> Result<Self, MassError> {
        if kilograms.is_nan() {
            return Err(MassError::NotANumber);
        }
        if kilograms <= 0.0 {
            return Err(MassError::NotPositive);
        }
        if kilograms > MAX_MASS_KG {
            return Err(MassError::ExceedsMaximum);
        }
        Ok(Self(kilograms))
    }

    /// Nur für Konstanten, deren Wertebereich bereits feststeht.
    pub(crate) const fn from_kilograms_unchecked(kilograms: f64) -> Self {
        Self(kilograms)
    }

    pub fn kilograms(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Mass {
    type Error = MassError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mass> for f64 {
    fn from(mass: Mass) -> Self {
        mass.0
    }
}

/// Wissenschaftliche Notation mit zwei Nachkommastellen, z.B. `5.97e24 kg`.
impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2e} kg", self.0)
    }
}

/// Parst eine Freitexteingabe zu einer Masse.
///
/// Akzeptiert Dezimal- und Exponentialschreibweise (`5.972e24`), umgebende
/// Leerzeichen werden ignoriert. Tausendertrenner werden nicht unterstützt.
pub fn parse_mass(raw: &str) -> Result<Mass, MassError> {
    let value: f64 = raw.trim().parse().map_err(|_| MassError::NotANumber)?;
    Mass::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exponential_notation() {
        let mass = parse_mass("5.972e24").unwrap();
        assert_eq!(mass.kilograms(), 5.972e24);
    }

    #[test]
    fn test_parse_plain_decimal_and_whitespace() {
        assert_eq!(parse_mass("  1500.25 ").unwrap().kilograms(), 1500.25);
        assert_eq!(parse_mass("1E5").unwrap().kilograms(), 1e5);
        assert_eq!(parse_mass("+.5").unwrap().kilograms(), 0.5);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(parse_mass("abc"), Err(MassError::NotANumber));
        assert_eq!(parse_mass(""), Err(MassError::NotANumber));
        assert_eq!(parse_mass("1,000"), Err(MassError::NotANumber));
        assert_eq!(parse_mass("1_000"), Err(MassError::NotANumber));
        assert_eq!(parse_mass("NaN"), Err(MassError::NotANumber));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(parse_mass("-5"), Err(MassError::NotPositive));
        assert_eq!(parse_mass("0"), Err(MassError::NotPositive));
        assert_eq!(parse_mass("-0.0"), Err(MassError::NotPositive));
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        assert_eq!(parse_mass("1e50").unwrap().kilograms(), 1e50);
        assert_eq!(parse_mass("1e51"), Err(MassError::ExceedsMaximum));
        assert_eq!(parse_mass("inf"), Err(MassError::ExceedsMaximum));
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        assert_eq!(MassError::NotANumber.to_string(), "not a valid number");
        assert!(MassError::NotPositive.to_string().contains("must be positive"));
        assert!(
            MassError::ExceedsMaximum
                .to_string()
                .contains("exceeds maximum")
        );
    }

    #[test]
    fn test_display_uses_two_digit_scientific_notation() {
        let mass = Mass::new(5.972e24).unwrap();
        assert_eq!(mass.to_string(), "5.97e24 kg");
    }
}

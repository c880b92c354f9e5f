// src/physics/presets.rs
use super::constants::EARTH_MASS_KG;
use super::mass::Mass;
use serde::{Deserialize, Serialize};

/// Vordefinierte Beispielmassen für das Auswahlfeld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassPreset {
    Sun,
    Earth,
    Moon,
    Jupiter,
    StellarBlackHole,
}

impl MassPreset {
    /// Reihenfolge im Auswahlfeld und in der Referenztabelle.
    pub const ALL: [MassPreset; 5] = [
        MassPreset::Sun,
        MassPreset::Earth,
        MassPreset::Moon,
        MassPreset::Jupiter,
        MassPreset::StellarBlackHole,
    ];

    pub fn kilograms(self) -> f64 {
        match self {
            MassPreset::Sun => 1.989e30,
            MassPreset::Earth => EARTH_MASS_KG,
            MassPreset::Moon => 7.342e22,
            MassPreset::Jupiter => 1.898e27,
            MassPreset::StellarBlackHole => 2e31,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MassPreset::Sun => "Sonne",
            MassPreset::Earth => "Erde",
            MassPreset::Moon => "Mond",
            MassPreset::Jupiter => "Jupiter",
            MassPreset::StellarBlackHole => "Stellares Schwarzes Loch",
        }
    }

    /// Text, mit dem das Eingabefeld beim Auswählen überschrieben wird.
    /// `{:e}` liefert die kürzeste Darstellung, die exakt zurückgeparst wird.
    pub fn input_text(self) -> String {
        format!("{:e}", self.kilograms())
    }

    pub fn mass(self) -> Mass {
        // Alle Werte liegen fest in (0, 1e50].
        Mass::from_kilograms_unchecked(self.kilograms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::mass::parse_mass;

    #[test]
    fn test_input_text_round_trips_through_validator() {
        for preset in MassPreset::ALL {
            let parsed = parse_mass(&preset.input_text()).unwrap();
            assert_eq!(parsed.kilograms(), preset.kilograms(), "{:?}", preset);
        }
    }

    #[test]
    fn test_presets_pass_validation() {
        for preset in MassPreset::ALL {
            assert_eq!(Mass::new(preset.kilograms()), Ok(preset.mass()));
        }
    }

    #[test]
    fn test_preset_values() {
        assert_eq!(MassPreset::Sun.input_text(), "1.989e30");
        assert_eq!(MassPreset::StellarBlackHole.input_text(), "2e31");
        assert_eq!(MassPreset::Earth.mass().to_string(), "5.97e24 kg");
    }
}

// src/ui/content.rs
//! Statische Lehrtexte der Seitenleiste.

use crate::physics::presets::MassPreset;

pub const APP_INTRO: &str = "Diese Anwendung zeigt, wie eine Masse die Raumzeit nach der \
allgemeinen Relativitätstheorie verformt. Die Darstellung nutzt eine vereinfachte Näherung \
und eine logarithmische Skala zur besseren Anschaulichkeit.";

/// Begriff und Erklärung.
pub const KEY_CONCEPTS: [(&str, &str); 4] = [
    (
        "Raumzeit-Krümmung",
        "Massen verformen die Geometrie der Raumzeit",
    ),
    ("Gravitationskonstante (G)", "6.674×10⁻¹¹ m³/(kg·s²)"),
    (
        "Logarithmische Skala",
        "Macht sehr große Wertebereiche sichtbar",
    ),
    (
        "Newtonsche Näherung",
        "Vereinfachung für Lehrzwecke",
    ),
];

pub const DISCLAIMER: &str = "Hinweis: Diese Visualisierung nutzt eine vereinfachte Näherung \
der allgemeinen Relativitätstheorie für Lehrzwecke. Die tatsächliche Verformung der Raumzeit \
ist komplexer.";

pub const MASS_INPUT_HINT: &str =
    "Masse in Kilogramm eingeben. Beispiel: 5.972e24 (Masse der Erde)";

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        _ => return None,
    })
}

/// Schreibt einen Wert als `1.989×10³⁰`.
pub fn scientific_notation(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, "0")) => mantissa.to_string(),
        Some((mantissa, exponent)) => {
            let exponent: String = exponent.chars().filter_map(superscript).collect();
            format!("{mantissa}×10{exponent}")
        }
        None => formatted,
    }
}

/// Zeilen der Referenztabelle, in Reihenfolge der Beispielauswahl.
pub fn reference_mass_rows() -> Vec<(&'static str, String)> {
    MassPreset::ALL
        .iter()
        .map(|preset| {
            (
                preset.label(),
                format!("{} kg", scientific_notation(preset.kilograms())),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_notation() {
        assert_eq!(scientific_notation(1.989e30), "1.989×10³⁰");
        assert_eq!(scientific_notation(2e31), "2×10³¹");
        assert_eq!(scientific_notation(6.674e-11), "6.674×10⁻¹¹");
        assert_eq!(scientific_notation(3.5), "3.5");
    }

    #[test]
    fn test_reference_table_follows_presets() {
        let rows = reference_mass_rows();
        assert_eq!(rows.len(), MassPreset::ALL.len());
        assert_eq!(rows[0], ("Sonne", "1.989×10³⁰ kg".to_string()));
        assert_eq!(rows[1], ("Erde", "5.972×10²⁴ kg".to_string()));
        assert_eq!(rows[4].0, "Stellares Schwarzes Loch");
    }

    #[test]
    fn test_concepts_mention_gravitational_constant() {
        assert!(KEY_CONCEPTS.iter().any(|(_, text)| text.contains("6.674×10⁻¹¹")));
    }
}

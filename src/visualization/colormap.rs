// src/visualization/colormap.rs
use crate::math::utils::comparison::lerp;
use serde::{Deserialize, Serialize};

/// Stützstellen der Viridis-Farbskala (sRGB, 8 Bit), gleichmäßig über [0, 1].
const VIRIDIS_STOPS: [[u8; 3]; 17] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x18, 0x6a],
    [0x47, 0x2d, 0x7b],
    [0x42, 0x40, 0x86],
    [0x3b, 0x52, 0x8b],
    [0x33, 0x63, 0x8d],
    [0x2c, 0x72, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x1f, 0xa0, 0x88],
    [0x28, 0xae, 0x80],
    [0x3f, 0xbc, 0x73],
    [0x5e, 0xc9, 0x62],
    [0x84, 0xd4, 0x4b],
    [0xad, 0xdc, 0x30],
    [0xd8, 0xe2, 0x19],
    [0xfd, 0xe7, 0x25],
];

/// Sequenzielle, wahrnehmungsgleichmäßige Farbskalen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScale {
    #[default]
    Viridis,
}

impl ColorScale {
    pub fn name(self) -> &'static str {
        match self {
            ColorScale::Viridis => "Viridis",
        }
    }

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::Viridis => &VIRIDIS_STOPS,
        }
    }

    /// sRGB-Farbe (Komponenten in [0, 1]) für `t` in [0, 1].
    /// Werte außerhalb werden auf den Rand geklemmt, NaN wird wie 0 behandelt.
    pub fn sample(self, t: f32) -> [f32; 3] {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f32;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        let local_t = scaled - lower as f32;

        let a = stops[lower];
        let b = stops[lower + 1];
        [0, 1, 2].map(|c| lerp(a[c] as f32, b[c] as f32, local_t) / 255.0)
    }

    /// Wie [`ColorScale::sample`], aber als 8-Bit-Werte für die UI-Legende.
    pub fn sample_u8(self, t: f32) -> [u8; 3] {
        self.sample(t).map(|c| (c * 255.0).round() as u8)
    }
}

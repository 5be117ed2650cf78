use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::COLORMAP_LUT_SIZE;

/// Color scales available for overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    #[default]
    Turbo,
    Viridis,
    Grayscale,
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turbo => write!(f, "Turbo"),
            Self::Viridis => write!(f, "Viridis"),
            Self::Grayscale => write!(f, "Grayscale"),
        }
    }
}

impl Colormap {
    /// RGB color at `t` in [0.0, 1.0]; `t` is clamped.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let [r, g, b] = match self {
            Self::Turbo => turbo(t),
            Self::Viridis => viridis(t),
            Self::Grayscale => [t, t, t],
        };
        [to_u8(r), to_u8(g), to_u8(b)]
    }

    /// Evenly sampled lookup table with `COLORMAP_LUT_SIZE` entries.
    pub fn lookup_table(&self) -> Vec<[u8; 3]> {
        let n = COLORMAP_LUT_SIZE;
        (0..n)
            .map(|i| self.sample(i as f64 / (n - 1) as f64))
            .collect()
    }
}

fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Polynomial fit of the Turbo rainbow map.
fn turbo(t: f64) -> [f64; 3] {
    const R: [f64; 6] = [
        0.135_721_38,
        4.615_392_60,
        -42.660_322_58,
        132.131_082_34,
        -152.942_393_96,
        59.286_379_43,
    ];
    const G: [f64; 6] = [
        0.091_402_61,
        2.194_188_39,
        4.842_966_58,
        -14.185_033_33,
        4.277_298_57,
        2.829_566_04,
    ];
    const B: [f64; 6] = [
        0.106_673_30,
        12.641_946_08,
        -60.582_048_36,
        110.362_767_71,
        -89.903_109_12,
        27.348_249_73,
    ];
    [horner(&R, t), horner(&G, t), horner(&B, t)]
}

/// Polynomial fit of the Viridis map.
fn viridis(t: f64) -> [f64; 3] {
    const R: [f64; 7] = [
        0.277_727_327_223_417_7,
        0.105_093_043_108_577_4,
        -0.330_861_828_725_556_3,
        -4.634_230_498_983_486,
        6.228_269_936_347_081,
        4.776_384_997_670_288,
        -5.435_455_855_934_631,
    ];
    const G: [f64; 7] = [
        0.005_407_344_544_966_578,
        1.404_613_529_898_575,
        0.214_847_559_468_213,
        -5.799_100_973_351_585,
        14.179_933_366_805_09,
        -13.745_145_377_746_01,
        4.645_852_612_178_535,
    ];
    const B: [f64; 7] = [
        0.334_099_805_335_306_1,
        1.384_590_162_594_685,
        0.095_095_163_028_236_59,
        -19.332_440_956_279_87,
        56.690_552_600_681_05,
        -65.353_032_633_372_34,
        26.312_435_249_583_2,
    ];
    [horner(&R, t), horner(&G, t), horner(&B, t)]
}

/// Evaluate `c[0] + c[1] t + c[2] t^2 + ...`.
fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

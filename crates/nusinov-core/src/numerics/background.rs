//! Background-flux and He I 58.4 nm index laws of the 1984/1992 EUV models.
//!
//! `Fb(t, T)` is the slowly varying background component of F10.7 over a
//! solar-cycle phase `t` of period `T`. The He I index combines it with the
//! observed F10.7 through a `2/3` power law before the standard regression.
//! Negative bases under the fractional exponents yield NaN.

use crate::common::constants::{
    BACKGROUND_1984_AMPLITUDE, BACKGROUND_1984_BASE, BACKGROUND_1984_DECAY,
    BACKGROUND_1984_SINE_POWER, BACKGROUND_1992_COSINE, BACKGROUND_1992_SINE,
    HELIUM_1984_COEFFICIENTS, HELIUM_1992_COEFFICIENTS, HELIUM_BACKGROUND_REFERENCE, TWO_PI,
    TWO_THIRDS,
};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundLaw {
    /// `Fb = 63 + 482·sin(πt/T)^3.7·exp(−5.2·t/T)`
    SineDecay1984,
    /// Five-term Fourier series in `2πt/T`.
    Fourier1992,
}

impl BackgroundLaw {
    pub fn background_flux(self, t: f64, period: f64) -> f64 {
        let phase = t / period;
        match self {
            Self::SineDecay1984 => {
                BACKGROUND_1984_BASE
                    + BACKGROUND_1984_AMPLITUDE
                        * (PI * phase).sin().powf(BACKGROUND_1984_SINE_POWER)
                        * (BACKGROUND_1984_DECAY * phase).exp()
            }
            Self::Fourier1992 => BACKGROUND_1992_COSINE
                .iter()
                .zip(BACKGROUND_1992_SINE)
                .enumerate()
                .map(|(harmonic, (a, b))| {
                    let angle = TWO_PI * harmonic as f64 * phase;
                    a * angle.cos() + b * angle.sin()
                })
                .sum(),
        }
    }

    /// He I 58.4 nm index from the observed F10.7 and its background `fb`.
    pub fn helium_index(self, f107: f64, fb: f64) -> f64 {
        let [base, background, active] = match self {
            Self::SineDecay1984 => HELIUM_1984_COEFFICIENTS,
            Self::Fourier1992 => HELIUM_1992_COEFFICIENTS,
        };
        base + background * (fb - HELIUM_BACKGROUND_REFERENCE).powf(TWO_THIRDS)
            + active * (f107 - fb).powf(TWO_THIRDS)
    }

    pub fn helium_index_at_phase(self, f107: f64, t: f64, period: f64) -> f64 {
        self.helium_index(f107, self.background_flux(t, period))
    }
}

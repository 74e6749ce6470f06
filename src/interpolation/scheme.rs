//! ENDF interpolation schemes (MCNP Appendix F, `INT` codes).

use crate::error::AceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationScheme {
    Histogram = 1,
    LinLin = 2,
    LinLog = 3,
    LogLin = 4,
    LogLog = 5,
    Gamow = 6,
}

impl TryFrom<i64> for InterpolationScheme {
    type Error = AceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InterpolationScheme::Histogram),
            2 => Ok(InterpolationScheme::LinLin),
            3 => Ok(InterpolationScheme::LinLog),
            4 => Ok(InterpolationScheme::LogLin),
            5 => Ok(InterpolationScheme::LogLog),
            6 => Ok(InterpolationScheme::Gamow),
            other => Err(AceError::InvalidHeader(format!(
                "invalid interpolation scheme code {other}"
            ))),
        }
    }
}

impl std::fmt::Display for InterpolationScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InterpolationScheme::Histogram => "Histogram",
            InterpolationScheme::LinLin => "LinLin",
            InterpolationScheme::LinLog => "LinLog",
            InterpolationScheme::LogLin => "LogLin",
            InterpolationScheme::LogLog => "LogLog",
            InterpolationScheme::Gamow => "Gamow",
        };
        write!(f, "{name}")
    }
}

impl InterpolationScheme {
    /// Interpolate between two bracketing points under this scheme.
    /// `x0 <= x <= x1`.
    pub fn interpolate(self, x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
        if x0 == x1 {
            return y0;
        }
        match self {
            InterpolationScheme::Histogram => y0,
            InterpolationScheme::LinLin => y0 + (y1 - y0) * (x - x0) / (x1 - x0),
            InterpolationScheme::LinLog => {
                let frac = (x.ln() - x0.ln()) / (x1.ln() - x0.ln());
                y0 + (y1 - y0) * frac
            }
            InterpolationScheme::LogLin => {
                let frac = (x - x0) / (x1 - x0);
                (y0.ln() + (y1.ln() - y0.ln()) * frac).exp()
            }
            InterpolationScheme::LogLog => {
                let frac = (x.ln() - x0.ln()) / (x1.ln() - x0.ln());
                (y0.ln() + (y1.ln() - y0.ln()) * frac).exp()
            }
            InterpolationScheme::Gamow => {
                // Charged-particle Gamow-factor interpolation; not modeled
                // beyond the five ENDF mainstream schemes, falls back to lin-lin.
                y0 + (y1 - y0) * (x - x0) / (x1 - x0)
            }
        }
    }
}

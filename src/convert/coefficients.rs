use crate::error::{Error, Result};

/// Red, green and blue weights applied to the first three channels.
///
/// Weights summing to 1.0 keep the weighted sum inside `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// ITU-R BT.601 luma weights.
pub const LUMA: Coefficients = Coefficients {
    r: 0.299,
    g: 0.587,
    b: 0.114,
};

/// Luminance weights close to BT.709 / sRGB.
pub const STANDARD: Coefficients = Coefficients {
    r: 0.2125,
    g: 0.7154,
    b: 0.0721,
};

impl Coefficients {
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        let valid = [r, g, b].iter().all(|w| w.is_finite() && *w >= 0.0);
        if !valid {
            return Err(Error::InvalidCoefficients { r, g, b });
        }
        Ok(Self { r, g, b })
    }

    #[inline]
    pub fn weigh(&self, r: f64, g: f64, b: f64) -> f64 {
        self.r * r + self.g * g + self.b * b
    }

    pub fn sum(&self) -> f64 {
        self.r + self.g + self.b
    }
}

/// The two weightings offered to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoefficientSet {
    Luma,
    #[default]
    Standard,
}

impl CoefficientSet {
    /// Maps the "use Luma coefficients" toggle onto a set.
    pub fn from_luma_toggle(use_luma: bool) -> Self {
        if use_luma {
            CoefficientSet::Luma
        } else {
            CoefficientSet::Standard
        }
    }

    pub fn coefficients(self) -> Coefficients {
        match self {
            CoefficientSet::Luma => LUMA,
            CoefficientSet::Standard => STANDARD,
        }
    }

    /// Method name shown to the user after a conversion.
    pub fn label(self) -> &'static str {
        match self {
            CoefficientSet::Luma => "Luma",
            CoefficientSet::Standard => "Standard",
        }
    }
}

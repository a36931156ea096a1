//! Rating bands: mapping an average score to a display bucket and color.

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display bucket derived from a bench's average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingBand {
    /// Average >= 8.0
    Excellent,
    /// Average >= 6.0
    Good,
    /// Average >= 4.0
    Fair,
    /// Average < 4.0
    Poor,
    /// No scores present.
    Unrated,
}

// Band colors, matching the marker palette of the original map.
const EXCELLENT: Rgb = Rgb::new(22, 163, 74);
const GOOD: Rgb = Rgb::new(34, 197, 94);
const FAIR: Rgb = Rgb::new(245, 158, 11);
const POOR: Rgb = Rgb::new(239, 68, 68);
const UNRATED: Rgb = Rgb::new(148, 163, 184);

impl RatingBand {
    /// Classify an average score. `None` averages are unrated.
    pub fn for_average(average: Option<f64>) -> Self {
        match average {
            None => Self::Unrated,
            Some(avg) if avg >= 8.0 => Self::Excellent,
            Some(avg) if avg >= 6.0 => Self::Good,
            Some(avg) if avg >= 4.0 => Self::Fair,
            Some(_) => Self::Poor,
        }
    }

    /// Marker/badge color for this band.
    pub fn color(self) -> Rgb {
        match self {
            Self::Excellent => EXCELLENT,
            Self::Good => GOOD,
            Self::Fair => FAIR,
            Self::Poor => POOR,
            Self::Unrated => UNRATED,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unrated => "Unrated",
        }
    }
}

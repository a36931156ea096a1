//! The `Bench` record: a geotagged point of interest with attribute scores.

use geo_types::Point;

/// Lower bound for attribute scores.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound for attribute scores.
pub const SCORE_MAX: f64 = 10.0;
/// Display names are truncated to this many characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Free-text notes are truncated to this many characters.
pub const NOTES_MAX_CHARS: usize = 1000;
/// Hard cap on records accepted from a single load.
pub const MAX_BENCHES: usize = 2000;

/// Unique identifier for a bench within a loaded collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BenchId(pub u64);

impl std::fmt::Display for BenchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five 0–10 attribute scores. Absent scores stay absent; they are
/// never defaulted to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scores {
    pub comfort: Option<f64>,
    pub availability: Option<f64>,
    pub scenery: Option<f64>,
    pub solitude: Option<f64>,
    /// Stored as "low crow density": higher is better (fewer crows).
    pub crow_density: Option<f64>,
}

impl Scores {
    /// Label/value pairs in display order, for list tooltips and score bars.
    pub fn labeled(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("Comfort", self.comfort),
            ("Availability", self.availability),
            ("Scenery", self.scenery),
            ("Solitude", self.solitude),
            ("Low Crow", self.crow_density),
        ]
    }

    /// Clamp every present score into [`SCORE_MIN`, `SCORE_MAX`].
    pub fn clamped(self) -> Self {
        let clamp = |v: Option<f64>| v.map(|n| n.clamp(SCORE_MIN, SCORE_MAX));
        Self {
            comfort: clamp(self.comfort),
            availability: clamp(self.availability),
            scenery: clamp(self.scenery),
            solitude: clamp(self.solitude),
            crow_density: clamp(self.crow_density),
        }
    }

    /// Arithmetic mean of the present scores, rounded to one decimal place.
    /// `None` when no score is present.
    pub fn average(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0u32;
        for (_, value) in self.labeled() {
            if let Some(v) = value {
                sum += v;
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        Some((sum / count as f64 * 10.0).round() / 10.0)
    }
}

/// A single bench record. Created once at load time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Bench {
    pub id: BenchId,
    pub name: String,
    /// Longitude/latitude (WGS-84). Always a valid coordinate pair.
    pub location: Point<f64>,
    pub scores: Scores,
    pub notes: String,
    /// Derived at construction; `None` when no score is present.
    pub average: Option<f64>,
}

impl Bench {
    /// Build a record, clamping scores and deriving the average.
    pub fn new(id: BenchId, name: String, location: Point<f64>, scores: Scores, notes: String) -> Self {
        let scores = scores.clamped();
        let average = scores.average();
        Self {
            id,
            name,
            location,
            scores,
            notes,
            average,
        }
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lng(&self) -> f64 {
        self.location.x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_scores() -> Scores {
        Scores {
            comfort: Some(9.0),
            availability: Some(7.0),
            scenery: Some(9.0),
            solitude: Some(6.0),
            crow_density: Some(3.0),
        }
    }

    #[test]
    fn clamp_out_of_range() {
        let scores = Scores {
            comfort: Some(15.0),
            availability: Some(-3.0),
            scenery: Some(10.0),
            solitude: None,
            crow_density: Some(0.0),
        }
        .clamped();

        assert_eq!(scores.comfort, Some(10.0));
        assert_eq!(scores.availability, Some(0.0));
        assert_eq!(scores.scenery, Some(10.0));
        assert_eq!(scores.solitude, None);
        assert_eq!(scores.crow_density, Some(0.0));
    }

    #[test]
    fn average_of_full_set() {
        // (9 + 7 + 9 + 6 + 3) / 5 = 6.8
        let avg = full_scores().average().unwrap();
        assert_relative_eq!(avg, 6.8, epsilon = 1e-10);
    }

    #[test]
    fn average_skips_absent_scores() {
        let scores = Scores {
            comfort: Some(7.0),
            availability: None,
            scenery: Some(8.0),
            solitude: None,
            crow_density: None,
        };
        let avg = scores.average().unwrap();
        assert_relative_eq!(avg, 7.5, epsilon = 1e-10);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let scores = Scores {
            comfort: Some(3.0),
            availability: Some(3.0),
            scenery: Some(4.0),
            solitude: None,
            crow_density: None,
        };
        // 10/3 = 3.333... -> 3.3
        let avg = scores.average().unwrap();
        assert_relative_eq!(avg, 3.3, epsilon = 1e-10);
    }

    #[test]
    fn average_none_without_scores() {
        assert_eq!(Scores::default().average(), None);
    }

    #[test]
    fn new_clamps_and_derives() {
        let bench = Bench::new(
            BenchId(1),
            "Test".to_string(),
            Point::new(-93.265, 44.9778),
            Scores {
                comfort: Some(12.0),
                availability: Some(8.0),
                scenery: None,
                solitude: None,
                crow_density: None,
            },
            String::new(),
        );

        assert_eq!(bench.scores.comfort, Some(10.0));
        assert_relative_eq!(bench.average.unwrap(), 9.0, epsilon = 1e-10);
        assert_relative_eq!(bench.lat(), 44.9778, epsilon = 1e-10);
        assert_relative_eq!(bench.lng(), -93.265, epsilon = 1e-10);
    }
}

//! Embedded sample dataset, substituted when the external source fails.

use geo_types::Point;

use crate::bench::{Bench, BenchId, Scores};

/// The fixed fallback dataset: five sample benches along the Minneapolis
/// riverfront. Averages are derived like any other record's.
pub fn fallback_benches() -> Vec<Bench> {
    let bench = |id: u64, name: &str, lat: f64, lng: f64, s: [f64; 5], notes: &str| {
        Bench::new(
            BenchId(id),
            name.to_string(),
            Point::new(lng, lat),
            Scores {
                comfort: Some(s[0]),
                availability: Some(s[1]),
                scenery: Some(s[2]),
                solitude: Some(s[3]),
                crow_density: Some(s[4]),
            },
            notes.to_string(),
        )
    };

    vec![
        bench(
            1,
            "Riverside Bench",
            44.9778,
            -93.2650,
            [9.0, 7.0, 9.0, 6.0, 3.0],
            "Great view, solid wood, comfortable backrest.",
        ),
        bench(
            2,
            "Old Oak Bench",
            44.9800,
            -93.2680,
            [7.0, 6.0, 7.0, 8.0, 2.0],
            "Shaded and quiet, slightly wobbly on one leg.",
        ),
        bench(
            3,
            "Lakeside Seat",
            44.9750,
            -93.2620,
            [6.0, 5.0, 8.0, 5.0, 5.0],
            "Good view but painted metal is hot in sun.",
        ),
        bench(
            4,
            "Playground Bench",
            44.9785,
            -93.2635,
            [4.0, 6.0, 3.0, 2.0, 7.0],
            "Close to trash cans; seat is warped.",
        ),
        bench(
            5,
            "Corner Bench",
            44.9762,
            -93.2665,
            [2.0, 8.0, 2.0, 3.0, 6.0],
            "Missing slats and low comfort.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn five_records_with_derived_averages() {
        let benches = fallback_benches();

        assert_eq!(benches.len(), 5);
        for (i, bench) in benches.iter().enumerate() {
            assert_eq!(bench.id, BenchId(i as u64 + 1));
            assert!(bench.average.is_some());
        }
        // Riverside: (9 + 7 + 9 + 6 + 3) / 5 = 6.8
        assert_relative_eq!(benches[0].average.unwrap(), 6.8, epsilon = 1e-10);
    }

    #[test]
    fn coordinates_are_valid() {
        for bench in fallback_benches() {
            assert!((-90.0..=90.0).contains(&bench.lat()));
            assert!((-180.0..=180.0).contains(&bench.lng()));
        }
    }
}

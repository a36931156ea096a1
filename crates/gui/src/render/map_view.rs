//! Basemap rendering using walkers (OpenStreetMap slippy tiles) with a
//! bench-marker overlay plugin.

use std::cell::Cell;

use egui::{Align2, Color32, FontId, Stroke, Ui};
use walkers::sources::OpenStreetMap;
use walkers::{lon_lat, HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use benchmap_core::{Bench, BenchId, RatingBand};

use crate::state::BenchCollection;

/// Zoom level used when focusing a single bench.
const FOCUS_ZOOM: f64 = 17.0;
const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 19.0;

/// Marker radius in screen pixels.
const MARKER_RADIUS: f32 = 12.0;
/// Extra radius around a marker that still counts as a hit.
const HIT_SLOP: f32 = 4.0;

/// Persistent map state (survives between frames).
pub struct MapViewState {
    pub tiles: HttpTiles,
    pub memory: MapMemory,
    /// Map center position (lon, lat).
    pub center: Position,
}

impl MapViewState {
    /// Create a new map state centred at the given WGS-84 lon/lat.
    pub fn new(ctx: &egui::Context, lon: f64, lat: f64) -> Self {
        Self {
            tiles: HttpTiles::new(OpenStreetMap, ctx.clone()),
            memory: MapMemory::default(),
            center: lon_lat(lon, lat),
        }
    }

    /// Re-centre the map on a bench at the focus zoom.
    pub fn focus_on(&mut self, bench: &Bench) {
        self.center = lon_lat(bench.lng(), bench.lat());
        self.memory.follow_my_position();
        let _ = self.memory.set_zoom(FOCUS_ZOOM);
    }

    /// Fit the view to the given (west, south, east, north) bounds.
    pub fn zoom_to_fit(&mut self, bounds: (f64, f64, f64, f64)) {
        let (west, south, east, north) = bounds;
        self.center = lon_lat((west + east) / 2.0, (south + north) / 2.0);
        self.memory.follow_my_position();
        let _ = self.memory.set_zoom(zoom_for_bounds(west, south, east, north));
    }
}

/// Slippy zoom level that fits the given bounds, padded ~20%.
pub fn zoom_for_bounds(west: f64, south: f64, east: f64, north: f64) -> f64 {
    let lng_span = ((east - west).abs() * 1.2).max(1e-6);
    let lat_span = ((north - south).abs() * 1.2).max(1e-6);
    let span = lng_span.max(lat_span);
    // At zoom z the visible world is 360 / 2^z degrees across.
    (360.0 / span).log2().clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Plugin that draws one colored marker per bench on top of the basemap
/// tiles and hit-tests clicks against them.
struct BenchMarkers<'a> {
    benches: &'a [Bench],
    selected: Option<BenchId>,
    /// Set to the clicked bench id, if a click landed on a marker.
    clicked: &'a Cell<Option<BenchId>>,
}

impl Plugin for BenchMarkers<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &egui::Response,
        projector: &Projector,
    ) {
        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };
        let mut hit: Option<(BenchId, f32)> = None;

        let painter = ui.painter();
        for bench in self.benches {
            let projected = projector.project(lon_lat(bench.lng(), bench.lat()));
            let pos = egui::pos2(projected.x, projected.y);

            let color = RatingBand::for_average(bench.average).color();
            let fill = Color32::from_rgb(color.r, color.g, color.b);
            let is_selected = self.selected == Some(bench.id);
            let radius = if is_selected {
                MARKER_RADIUS + 4.0
            } else {
                MARKER_RADIUS
            };

            painter.circle_filled(pos, radius, fill);
            painter.circle_stroke(pos, radius, Stroke::new(2.0, Color32::WHITE));

            let label = match bench.average {
                Some(avg) => format!("{:.1}", avg),
                None => "—".to_string(),
            };
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(10.0),
                Color32::WHITE,
            );

            if let Some(click) = click_pos {
                let dist = click.distance(pos);
                if dist <= radius + HIT_SLOP && hit.map_or(true, |(_, d)| dist < d) {
                    hit = Some((bench.id, dist));
                }
            }
        }

        if let Some((id, _)) = hit {
            self.clicked.set(Some(id));
        }
    }
}

/// Render the basemap with bench markers. Returns the id of a clicked
/// marker, if any.
pub fn show_map(
    ui: &mut Ui,
    state: &mut MapViewState,
    collection: &BenchCollection,
) -> Option<BenchId> {
    let clicked = Cell::new(None);

    let map = Map::new(Some(&mut state.tiles), &mut state.memory, state.center).with_plugin(
        BenchMarkers {
            benches: collection.benches(),
            selected: collection.selected,
            clicked: &clicked,
        },
    );
    ui.add(map);

    clicked.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_scale_bounds_zoom() {
        // The fallback dataset spans ~0.006 degrees.
        let zoom = zoom_for_bounds(-93.2680, 44.9750, -93.2620, 44.9800);
        assert!(zoom > 13.0 && zoom < 17.0, "unexpected zoom {zoom}");
    }

    #[test]
    fn single_point_clamps_to_max() {
        let zoom = zoom_for_bounds(-93.265, 44.9778, -93.265, 44.9778);
        assert_eq!(zoom, MAX_ZOOM);
    }

    #[test]
    fn world_bounds_clamp_to_min() {
        let zoom = zoom_for_bounds(-180.0, -90.0, 180.0, 90.0);
        assert_eq!(zoom, MIN_ZOOM);
    }
}

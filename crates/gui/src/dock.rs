//! Dock layout: map canvas, bench list, details, console.
//!
//! Layout: Map (center, ~70%) | Right panel (Benches above Details, ~30%)
//!         ────────────────────┼──────────────────────────────────────────
//!         Console (bottom, ~22% of total height)

use egui_dock::{DockState, NodeIndex};

/// Panel identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Map,
    BenchList,
    Detail,
    Console,
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelId::Map => write!(f, "Map"),
            PanelId::BenchList => write!(f, "Benches"),
            PanelId::Detail => write!(f, "Details"),
            PanelId::Console => write!(f, "Console"),
        }
    }
}

/// Create the initial dock layout.
///
/// ```text
/// ┌──────────────────────────┬─────────────────┐
/// │                          │  Benches         │
/// │          Map             ├─────────────────┤
/// │                          │  Details         │
/// ├──────────────────────────┴─────────────────┤
/// │               Console                       │
/// └─────────────────────────────────────────────┘
/// ```
pub fn create_dock_state() -> DockState<PanelId> {
    // Start with the map as the main surface
    let mut dock_state = DockState::new(vec![PanelId::Map]);

    // Split: main area (top) and console (bottom) — 78% / 22%
    let [top, _bottom] = dock_state.main_surface_mut().split_below(
        NodeIndex::root(),
        0.78,
        vec![PanelId::Console],
    );

    // Split top area: map (left 70%) and right sidebar (30%)
    let [_map, right] = dock_state.main_surface_mut().split_right(
        top,
        0.70,
        vec![PanelId::BenchList],
    );

    // Split right sidebar: bench list (top) and details (bottom)
    let [_list, _detail] = dock_state.main_surface_mut().split_below(
        right,
        0.55,
        vec![PanelId::Detail],
    );

    dock_state
}

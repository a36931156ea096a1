//! Bench list panel: every loaded bench with its score badge, kept in sync
//! with the map selection.

use egui::{Align2, Color32, FontId, RichText, Ui};

use benchmap_core::{Bench, BenchId, RatingBand};

use crate::state::BenchCollection;

/// Actions returned from the bench list panel.
pub enum BenchListAction {
    /// Select a bench (and focus the map on it).
    Select(BenchId),
    /// No action.
    None,
}

/// Show the bench list. `scroll_to_selected` scrolls the active row into
/// view (used when the selection came from a marker click).
pub fn show_bench_list(
    ui: &mut Ui,
    collection: &BenchCollection,
    scroll_to_selected: bool,
) -> BenchListAction {
    let mut action = BenchListAction::None;

    ui.heading("Benches");
    ui.separator();

    if collection.is_empty() {
        ui.label("No benches loaded.");
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for bench in collection.benches() {
                let is_selected = collection.selected == Some(bench.id);

                let (badge_response, name_response) = ui
                    .horizontal(|ui| {
                        let badge = draw_badge(ui, bench);
                        let name = ui.selectable_label(is_selected, &bench.name);
                        (badge, name)
                    })
                    .inner;

                if badge_response.clicked() || name_response.clicked() {
                    action = BenchListAction::Select(bench.id);
                }
                if is_selected && scroll_to_selected {
                    name_response.scroll_to_me(Some(egui::Align::Center));
                }
                name_response.on_hover_ui(|ui| hover_scores(ui, bench));

                if !bench.notes.is_empty() {
                    ui.label(RichText::new(clip(&bench.notes, 80)).weak().size(11.0));
                }
                ui.add_space(2.0);
            }
        });

    action
}

/// Round average badge in the bench's band color.
fn draw_badge(ui: &mut Ui, bench: &Bench) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::click());
    let color = RatingBand::for_average(bench.average).color();

    let painter = ui.painter_at(rect.expand(2.0));
    painter.circle_filled(rect.center(), 11.0, Color32::from_rgb(color.r, color.g, color.b));
    let label = match bench.average {
        Some(avg) => format!("{:.1}", avg),
        None => "—".to_string(),
    };
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(9.0),
        Color32::WHITE,
    );

    response
}

/// Tooltip with the per-attribute scores.
fn hover_scores(ui: &mut Ui, bench: &Bench) {
    let band = RatingBand::for_average(bench.average);
    let overall = match bench.average {
        Some(avg) => format!("Overall Score: {:.1} ({})", avg, band.name()),
        None => "Overall Score: — (Unrated)".to_string(),
    };
    ui.label(RichText::new(overall).strong());
    ui.separator();
    for (label, value) in bench.scores.labeled() {
        let text = match value {
            Some(v) => format!("{}: {:.1}", label, v),
            None => format!("{}: —", label),
        };
        ui.label(text);
    }
}

/// Single-line preview of the notes.
fn clip(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= max {
        return line.to_string();
    }
    let mut out: String = line.chars().take(max).collect();
    out.push('…');
    out
}

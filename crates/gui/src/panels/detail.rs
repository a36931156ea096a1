//! Details panel: scores, notes and coordinates for the selected bench.

use egui::{Color32, Rect, RichText, Sense, Ui};

use benchmap_core::bench::SCORE_MAX;
use benchmap_core::{Bench, RatingBand};

/// Show the details panel for the selected bench.
pub fn show_detail(ui: &mut Ui, bench: Option<&Bench>) {
    let Some(bench) = bench else {
        ui.centered_and_justified(|ui| {
            ui.label("No bench selected. Click a marker or a list entry.");
        });
        return;
    };

    ui.heading(&bench.name);
    ui.separator();

    let band = RatingBand::for_average(bench.average);
    let color = band.color();
    let overall = match bench.average {
        Some(avg) => format!("Overall Score: {:.1} ({})", avg, band.name()),
        None => "Overall Score: —".to_string(),
    };
    ui.label(
        RichText::new(overall)
            .color(Color32::from_rgb(color.r, color.g, color.b))
            .strong(),
    );

    ui.add_space(6.0);
    for (label, value) in bench.scores.labeled() {
        score_line(ui, label, value);
    }

    if !bench.notes.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new(&bench.notes).italics());
    }

    ui.add_space(6.0);
    ui.separator();
    ui.label(
        RichText::new(format!("Lat: {:.5}, Lng: {:.5}", bench.lat(), bench.lng()))
            .monospace()
            .size(11.0),
    );
}

/// One labeled score bar, filled proportionally to the 0–10 value.
fn score_line(ui: &mut Ui, label: &str, value: Option<f64>) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [80.0, 14.0],
            egui::Label::new(RichText::new(label).size(11.0)),
        );

        let bar_width = (ui.available_width() - 40.0).max(40.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(bar_width, 10.0), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 3.0, Color32::from_gray(60));
        if let Some(v) = value {
            let frac = (v / SCORE_MAX).clamp(0.0, 1.0) as f32;
            let fill = RatingBand::for_average(Some(v)).color();
            let fill_rect = Rect::from_min_size(
                rect.min,
                egui::vec2(rect.width() * frac, rect.height()),
            );
            painter.rect_filled(
                fill_rect,
                3.0,
                Color32::from_rgb(fill.r, fill.g, fill.b),
            );
        }

        let text = match value {
            Some(v) => format!("{:.1}", v),
            None => "—".to_string(),
        };
        ui.label(RichText::new(text).monospace().size(11.0));
    });
}

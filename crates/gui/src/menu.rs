//! Menu bar: File, View, Help.

use egui::Ui;

/// Actions triggered by menu items.
pub enum MenuAction {
    OpenGeoJson,
    Reload,
    ZoomToFit,
    Exit,
    About,
    None,
}

/// Show the main menu bar. Returns the action triggered (if any).
pub fn show_menu_bar(ui: &mut Ui) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Open Benches...").clicked() {
                action = MenuAction::OpenGeoJson;
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                action = MenuAction::Reload;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                action = MenuAction::Exit;
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui| {
            if ui.button("Zoom to Fit").clicked() {
                action = MenuAction::ZoomToFit;
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About Bench Map").clicked() {
                action = MenuAction::About;
                ui.close_menu();
            }
        });
    });

    action
}

//! Main application: BenchMapApp implements eframe::App.

use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender};
use egui_dock::{DockArea, DockState, Style, TabViewer};

use benchmap_core::BenchId;

use crate::dock::{create_dock_state, PanelId};
use crate::io;
use crate::menu::{show_menu_bar, MenuAction};
use crate::panels::bench_list::{show_bench_list, BenchListAction};
use crate::panels::console::show_console;
use crate::panels::detail::show_detail;
use crate::render::map_view::{show_map, MapViewState};
use crate::state::{AppMessage, BenchCollection, LogEntry};

/// Default view center before any data arrives (Minneapolis riverfront).
const DEFAULT_CENTER: (f64, f64) = (-93.2650, 44.9778);

/// The main application state.
pub struct BenchMapApp {
    /// Dock state for panel layout.
    dock_state: DockState<PanelId>,

    /// Message channels for background thread communication.
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,

    /// The loaded benches and selection.
    collection: BenchCollection,

    /// Console log entries.
    logs: Vec<LogEntry>,

    /// Basemap and marker rendering state.
    map_view: MapViewState,

    /// Whether a load is in flight.
    loading: bool,

    /// Show about dialog.
    show_about: bool,

    /// Scroll the list to the selected row this frame (set when the
    /// selection came from a marker click).
    scroll_list_to_selected: bool,
}

impl BenchMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Configure dark theme with custom visuals
        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        cc.egui_ctx.set_visuals(visuals);

        let (tx, rx) = crossbeam_channel::unbounded();
        let map_view = MapViewState::new(&cc.egui_ctx, DEFAULT_CENTER.0, DEFAULT_CENTER.1);

        let mut app = Self {
            dock_state: create_dock_state(),
            tx,
            rx,
            collection: BenchCollection::new(),
            logs: Vec::new(),
            map_view,
            loading: true,
            show_about: false,
            scroll_list_to_selected: false,
        };

        app.logs.push(LogEntry::info("Bench map started"));
        io::load_or_fallback(PathBuf::from(io::DEFAULT_DATA_PATH), app.tx.clone());
        app
    }

    /// Process pending messages from background threads.
    fn process_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::BenchesLoaded { source, benches } => {
                    self.loading = false;
                    self.collection.replace(benches, source);

                    // Fit the view to the new collection and select the
                    // first record, like the initial popup of the web map.
                    if let Some(bounds) = self.collection.bounds() {
                        self.map_view.zoom_to_fit(bounds);
                    }
                    if let Some(id) = self.collection.first().map(|b| b.id) {
                        self.collection.select(id);
                        self.scroll_list_to_selected = true;
                    }
                }

                AppMessage::Error { context, message } => {
                    self.loading = false;
                    self.logs
                        .push(LogEntry::error(format!("{}: {}", context, message)));
                }

                AppMessage::Log(entry) => {
                    self.logs.push(entry);
                }
            }
        }
    }

    /// Select a bench; optionally re-center the map on it.
    fn select_bench(&mut self, id: BenchId, focus_map: bool) {
        self.collection.select(id);
        if focus_map {
            if let Some(bench) = self.collection.get(id) {
                self.map_view.focus_on(bench);
            }
        }
    }

    fn handle_menu_action(&mut self, action: MenuAction, ctx: &egui::Context) {
        match action {
            MenuAction::OpenGeoJson => {
                io::open_geojson(self.tx.clone());
            }
            MenuAction::Reload => {
                self.loading = true;
                io::load_or_fallback(PathBuf::from(io::DEFAULT_DATA_PATH), self.tx.clone());
            }
            MenuAction::ZoomToFit => {
                if let Some(bounds) = self.collection.bounds() {
                    self.map_view.zoom_to_fit(bounds);
                }
            }
            MenuAction::Exit => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            MenuAction::About => {
                self.show_about = true;
            }
            MenuAction::None => {}
        }
    }
}

impl eframe::App for BenchMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process pending messages
        self.process_messages();

        // Request repaint while a load is in flight
        if self.loading {
            ctx.request_repaint();
        }

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            let action = show_menu_bar(ui);
            self.handle_menu_action(action, ctx);
        });

        // Status bar
        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} benches · {}",
                    self.collection.len(),
                    self.collection.source().label()
                ));
                if self.loading {
                    ui.separator();
                    ui.spinner();
                    ui.label("Loading...");
                }
            });
        });

        // About dialog
        if self.show_about {
            egui::Window::new("About Bench Map")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.heading("Bench Map");
                    ui.label("Scored park benches on an OpenStreetMap basemap");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }

        // Main dock area
        let scroll_list = self.scroll_list_to_selected;
        let mut tab_viewer = BenchMapTabViewer {
            collection: &self.collection,
            logs: &self.logs,
            map_view: &mut self.map_view,
            scroll_list_to_selected: scroll_list,
            list_action: BenchListAction::None,
            map_clicked: None,
        };

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut tab_viewer);

        // Extract results before dropping the borrow
        let list_action = std::mem::replace(&mut tab_viewer.list_action, BenchListAction::None);
        let map_clicked = tab_viewer.map_clicked.take();
        drop(tab_viewer);
        self.scroll_list_to_selected = false;

        // List clicks focus the map; marker clicks scroll the list.
        if let BenchListAction::Select(id) = list_action {
            self.select_bench(id, true);
        }
        if let Some(id) = map_clicked {
            self.select_bench(id, false);
            self.scroll_list_to_selected = true;
        }
    }
}

/// TabViewer implementation for egui_dock.
struct BenchMapTabViewer<'a> {
    collection: &'a BenchCollection,
    logs: &'a [LogEntry],
    map_view: &'a mut MapViewState,
    scroll_list_to_selected: bool,
    /// Action from the bench list panel.
    list_action: BenchListAction,
    /// Marker clicked on the map this frame.
    map_clicked: Option<BenchId>,
}

impl TabViewer for BenchMapTabViewer<'_> {
    type Tab = PanelId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.to_string().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelId::Map => {
                if let Some(id) = show_map(ui, self.map_view, self.collection) {
                    self.map_clicked = Some(id);
                }
            }

            PanelId::BenchList => {
                if let BenchListAction::Select(id) =
                    show_bench_list(ui, self.collection, self.scroll_list_to_selected)
                {
                    self.list_action = BenchListAction::Select(id);
                }
            }

            PanelId::Detail => {
                show_detail(ui, self.collection.selected_bench());
            }

            PanelId::Console => {
                show_console(ui, self.logs);
            }
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false // Panels cannot be closed
    }
}

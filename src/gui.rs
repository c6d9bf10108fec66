use crate::fields::{FieldDescriptor, FieldGroup, SelectOption, Widget};
use crate::form::FieldValue;
use crate::page::{Notification, NotificationKind, PageOptions, PageState, PropertiesPage, ServerTarget};
use crate::{LocalDirTransport, statics};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Startup configuration for the editor window.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub server_dir: PathBuf,
    pub page: PageOptions,
}

pub fn run_gui(options: EditorOptions) -> eframe::Result {
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 900.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        native,
        Box::new(move |_cc| Ok(Box::new(PropertiesApp::new(options)))),
    )
}

/// The main application state and GUI logic.
/// Owns the page controller plus UI-only state (raw editor buffer, dialogs).
struct PropertiesApp {
    page: PropertiesPage<LocalDirTransport>,
    page_options: PageOptions,
    accessible: bool,
    // Raw editor text; pushed into the page after the debounce elapses.
    raw_buffer: String,
    raw_edited_at: Option<f64>,
    notification: Option<Notification>,
    about_open: bool,
    theme_dark: bool,
}

impl PropertiesApp {
    fn new(options: EditorOptions) -> Self {
        let mut app = Self {
            page: Self::open_page(&options.server_dir, options.page.clone()),
            page_options: options.page,
            accessible: false,
            raw_buffer: String::new(),
            raw_edited_at: None,
            notification: None,
            about_open: false,
            theme_dark: true,
        };
        app.mount();
        app
    }

    fn open_page(dir: &Path, options: PageOptions) -> PropertiesPage<LocalDirTransport> {
        PropertiesPage::new(
            Some(server_target_for(dir)),
            LocalDirTransport::new(dir),
            options,
        )
    }

    fn mount(&mut self) {
        self.accessible = self.page.can_access();
        // Always load: a failed load clears whatever the page held before.
        self.page.mount();
        self.raw_buffer = self.page.form().raw.clone();
        self.raw_edited_at = None;
    }

    fn open_folder(&mut self) {
        let Some(dir) = rfd::FileDialog::new()
            .set_directory(self.page.transport().root())
            .pick_folder()
        else {
            return;
        };

        self.page = Self::open_page(&dir, self.page_options.clone());
        self.notification = None;
        self.mount();
    }

    fn reload(&mut self) {
        self.notification = None;
        self.mount();
    }

    fn can_save(&self) -> bool {
        self.accessible && self.page.is_loaded()
    }

    fn flush_raw_edit(&mut self) {
        if self.raw_edited_at.take().is_some() {
            self.page.edit_raw(self.raw_buffer.clone());
        }
    }

    fn save(&mut self) {
        self.flush_raw_edit();
        let notification = self.page.save();
        if notification.kind == NotificationKind::Success {
            self.raw_buffer = self.page.form().raw.clone();
        }
        self.notification = Some(notification);
    }

    fn sync_raw_after_idle(&mut self, ctx: &egui::Context) {
        let Some(edited_at) = self.raw_edited_at else {
            return;
        };
        let elapsed = ctx.input(|i| i.time) - edited_at;
        if elapsed >= statics::RAW_SYNC_DEBOUNCE_SECS {
            self.flush_raw_edit();
        } else {
            ctx.request_repaint_after(Duration::from_secs_f64(
                statics::RAW_SYNC_DEBOUNCE_SECS - elapsed,
            ));
        }
    }

    fn render_group(&mut self, ui: &mut egui::Ui, group: FieldGroup) {
        let fields: Vec<&'static FieldDescriptor> = self.page.visible_fields(group).collect();
        let columns = group.columns();

        egui::CollapsingHeader::new(group.label())
            .default_open(true)
            .show(ui, |ui| {
                if fields.is_empty() {
                    ui.weak(statics::EN_GROUP_EMPTY);
                }

                egui::Grid::new(("fields", group.label()))
                    .num_columns(columns)
                    .spacing([24.0, 12.0])
                    .show(ui, |ui| {
                        for (i, field) in fields.iter().enumerate() {
                            let mut value = self
                                .page
                                .form()
                                .get(field.name)
                                .cloned()
                                .unwrap_or_else(|| FieldValue::zero(field.field_type));

                            let changed = ui.vertical(|ui| field_widget(ui, field, &mut value)).inner;
                            if changed && let Err(e) = self.page.set_field(field.name, value) {
                                tracing::warn!(error = %e, "rejected form edit");
                            }

                            if (i + 1) % columns == 0 {
                                ui.end_row();
                            }
                        }
                    });

                if group == FieldGroup::Advanced {
                    ui.separator();
                    self.render_raw_editor(ui);
                    self.render_unmodeled_table(ui);
                }
            });
    }

    fn render_raw_editor(&mut self, ui: &mut egui::Ui) {
        ui.label(statics::EN_LABEL_RAW);
        let editor = egui::TextEdit::multiline(&mut self.raw_buffer)
            .font(egui::TextStyle::Monospace)
            .desired_rows(statics::RAW_EDITOR_ROWS)
            .desired_width(f32::INFINITY);
        if ui.add(editor).changed() {
            self.raw_edited_at = Some(ui.input(|i| i.time));
        }
        ui.small(statics::EN_HELPER_RAW);
    }

    fn render_unmodeled_table(&self, ui: &mut egui::Ui) {
        let rows: Vec<(&str, &str)> = self.page.unmodeled_properties().collect();
        if rows.is_empty() {
            return;
        }

        ui.add_space(8.0);
        ui.label(statics::EN_LABEL_UNMODELED);
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

        ui.push_id("unmodeled_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(260.0).resizable(true))
                .column(Column::remainder().resizable(true))
                .header(row_h, |mut header| {
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_KEY);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_VALUE);
                    });
                })
                .body(|mut body| {
                    for (k, v) in rows {
                        body.row(row_h, |mut row| {
                            row.col(|ui| {
                                ui.monospace(k);
                            });
                            row.col(|ui| {
                                ui.monospace(v);
                            });
                        });
                    }
                });
        });
    }
}

/// One labelled input. Returns true when the user changed `value`.
fn field_widget(ui: &mut egui::Ui, field: &FieldDescriptor, value: &mut FieldValue) -> bool {
    let changed = match value {
        FieldValue::Bool(b) => ui.checkbox(b, field.label).changed(),
        FieldValue::Text(text) => {
            ui.label(field.label);
            match field.widget {
                Widget::Select(options) => {
                    let mut changed = false;
                    egui::ComboBox::from_id_salt(field.name)
                        .selected_text(selected_label(options, text))
                        .show_ui(ui, |ui| {
                            for option in options {
                                changed |= ui
                                    .selectable_value(&mut *text, option.value.to_string(), option.label)
                                    .changed();
                            }
                        });
                    changed
                }
                Widget::Password => ui
                    .add(egui::TextEdit::singleline(text).password(true))
                    .changed(),
                Widget::Number { min, max } => {
                    let changed = ui.add(egui::TextEdit::singleline(text)).changed();
                    if !field.widget.accepts(text) {
                        ui.colored_label(
                            ui.visuals().warn_fg_color,
                            format!("{} {min} and {max}", statics::EN_HINT_NUMBER_RANGE),
                        );
                    }
                    changed
                }
                Widget::Text | Widget::Toggle => {
                    ui.add(egui::TextEdit::singleline(text)).changed()
                }
            }
        }
    };

    if let Some(helper) = field.helper {
        ui.small(helper);
    }
    changed
}

/// Label for the current value; values outside the option list are shown verbatim.
fn selected_label(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

fn server_target_for(dir: &Path) -> ServerTarget {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    ServerTarget::new(name)
}

impl eframe::App for PropertiesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::S))
            && self.can_save()
        {
            self.save();
        }

        self.sync_raw_after_idle(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_folder();
                }
                if ui.button(statics::EN_BTN_RELOAD).clicked() {
                    self.reload();
                }

                let can_save = self.can_save();
                if ui
                    .add_enabled(can_save, egui::Button::new(statics::EN_BTN_SAVE))
                    .clicked()
                {
                    self.save();
                }

                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }

                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                ui.separator();
                if let Some(server) = self.page.server() {
                    ui.label(format!("{} {}", statics::EN_PREFIX_SERVER, server.name));
                }
                if self.page.is_dirty() || self.raw_edited_at.is_some() {
                    ui.colored_label(ui.visuals().warn_fg_color, statics::EN_BADGE_DIRTY);
                }
            });
        });

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.label(statics::EN_ABOUT_TEXT);
                    ui.label(statics::EN_ABOUT_LOSSY);
                });
            self.about_open = open;
        }

        if let Some(notification) = self.notification.clone() {
            egui::TopBottomPanel::top("notification_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let color = match notification.kind {
                        NotificationKind::Success => egui::Color32::from_rgb(0, 160, 0),
                        NotificationKind::Danger => egui::Color32::RED,
                    };
                    ui.colored_label(color, &notification.title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("x").clicked() {
                            self.notification = None;
                        }
                    });
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(statics::EN_HOME_HEADING);
            ui.separator();

            if !self.accessible {
                ui.label(statics::EN_HOME_NO_ACCESS);
                return;
            }
            if self.page.state() == PageState::LoadFailed {
                ui.colored_label(egui::Color32::RED, statics::EN_HOME_LOAD_FAILED);
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for group in FieldGroup::ALL {
                    self.render_group(ui, group);
                }
            });
        });
    }
}

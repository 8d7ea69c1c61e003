use insider_business::{ListApplicationsCommand, Role};

use crate::{state::State, widgets};

/// Which section of the dashboard is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Section {
    #[default]
    Applications,
    Users,
}

pub struct InsiderApp {
    state: State,
    section: Section,
    fetch_started: bool,
}

impl InsiderApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            section: Section::default(),
            fetch_started: false,
        }
    }
}

impl eframe::App for InsiderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync computes for render
        self.state.ctx.sync_computes();
        self.state.adopt_fetched_records();

        if !self.fetch_started {
            self.fetch_started = true;
            self.state.ctx.dispatch::<ListApplicationsCommand>();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("Admission Insider");
                ui.separator();
                ui.selectable_value(&mut self.section, Section::Applications, "Applications");
                ui.selectable_value(&mut self.section, Section::Users, "Users");
                ui.separator();
                role_selector(ui, &mut self.state.role);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::notifications_strip(&mut self.state.ctx, ui);

            match self.section {
                Section::Applications => {
                    let _ = widgets::applications_panel(
                        &mut self.state.ctx,
                        self.state.role,
                        &mut self.state.records,
                        ui,
                    );
                }
                Section::Users => {
                    let _ = widgets::users_panel(&mut self.state.ctx, ui);
                }
            }
        });
    }
}

/// Combo box for viewing the dashboard as a different role. `None` renders the
/// fallback common-column view.
fn role_selector(ui: &mut egui::Ui, role: &mut Option<Role>) {
    let label = role.map_or("Unknown", Role::label);
    egui::ComboBox::from_id_salt("role_selector")
        .selected_text(format!("Viewing as: {label}"))
        .show_ui(ui, |ui| {
            for candidate in Role::ALL {
                ui.selectable_value(role, Some(candidate), candidate.label());
            }
            ui.selectable_value(role, None, "Unknown");
        });
}

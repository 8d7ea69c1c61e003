//! The success notification strip shown above the active panel.

use egui::{Color32, Frame, Margin, Stroke, Ui};
use insider_business::Notifications;
use insider_states::StateCtx;

use crate::utils::colors::COLOR_GREEN;

const STRIP_BG: Color32 = Color32::from_rgb(233, 247, 236);

pub fn notifications_strip(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let notices: Vec<String> = state_ctx
        .state::<Notifications>()
        .iter()
        .map(str::to_owned)
        .collect();
    if notices.is_empty() {
        return;
    }

    let mut dismiss: Option<usize> = None;
    for (index, notice) in notices.iter().enumerate() {
        Frame::new()
            .fill(STRIP_BG)
            .stroke(Stroke::new(1.0, COLOR_GREEN))
            .inner_margin(Margin::symmetric(8, 4))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(COLOR_GREEN, "✓");
                    ui.label(notice);
                    if ui.small_button("Dismiss").clicked() {
                        dismiss = Some(index);
                    }
                });
            });
    }

    if let Some(index) = dismiss {
        state_ctx.update::<Notifications>(|notifications| {
            notifications.dismiss(index);
        });
    }
    ui.add_space(4.0);
}

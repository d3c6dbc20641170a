//! egui window with one button per profile

use super::ProfileShell;
use anyhow::{Result, anyhow};
use chooser_core::Profile;
use std::cell::Cell;
use std::rc::Rc;

const WINDOW_TITLE: &str = "Choose Firefox Profile";
const WINDOW_WIDTH: f32 = 450.0;
const MAX_WINDOW_HEIGHT: f32 = 600.0;
const WINDOW_MARGIN: f32 = 15.0;
const ROW_SPACING: f32 = 10.0;
const BUTTON_HEIGHT: f32 = 45.0;

/// Window height that fits `rows` buttons, capped at [`MAX_WINDOW_HEIGHT`]
fn window_height(rows: usize) -> f32 {
    let rows = rows.max(1) as f32;
    let content = rows * BUTTON_HEIGHT + (rows - 1.0) * ROW_SPACING;
    (content + 2.0 * WINDOW_MARGIN).min(MAX_WINDOW_HEIGHT)
}

/// Native window front end built on eframe
#[derive(Debug, Default)]
pub struct EguiShell;

impl EguiShell {
    pub fn new() -> Self {
        Self
    }
}

impl ProfileShell for EguiShell {
    fn choose(&mut self, profiles: &[Profile]) -> Result<Option<usize>> {
        let selection = Rc::new(Cell::new(None));
        let app = ChooserApp::new(profiles.to_vec(), Rc::clone(&selection));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([WINDOW_WIDTH, window_height(profiles.len())])
                .with_min_inner_size([WINDOW_WIDTH, window_height(1)])
                .with_resizable(false)
                .with_title(WINDOW_TITLE),
            ..Default::default()
        };

        tracing::debug!("Showing {} profile(s)", profiles.len());
        eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
            .map_err(|e| anyhow!("Failed to run GUI: {}", e))?;

        Ok(selection.get())
    }
}

struct ChooserApp {
    profiles: Vec<Profile>,
    selection: Rc<Cell<Option<usize>>>,
}

impl ChooserApp {
    fn new(profiles: Vec<Profile>, selection: Rc<Cell<Option<usize>>>) -> Self {
        Self {
            profiles,
            selection,
        }
    }

    /// Record the first click only; later clicks before the window closes are ignored
    fn select(&self, index: usize) -> bool {
        if self.selection.get().is_some() {
            return false;
        }
        self.selection.set(Some(index));
        true
    }

    /// Draw one button per profile; a click selects it and closes the window
    fn show(&mut self, ctx: &egui::Context) {
        let mut clicked = None;

        let frame = egui::Frame::central_panel(&ctx.style())
            .inner_margin(egui::Margin::same(WINDOW_MARGIN));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = ROW_SPACING;

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for (index, profile) in self.profiles.iter().enumerate() {
                        let button = egui::Button::new(profile.name.as_str());
                        if ui
                            .add_sized([ui.available_width(), BUTTON_HEIGHT], button)
                            .clicked()
                        {
                            clicked = Some(index);
                        }
                    }
                });
        });

        if let Some(index) = clicked {
            if self.select(index) {
                tracing::debug!("Selected profile '{}'", self.profiles[index]);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for ChooserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

// ui.rs - egui front end: controls, keyboard shortcuts and the cell painter

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Pos2, Rect, Vec2};
use life_core::patterns;

use crate::app::{LifeApp, SimulationControls};
use crate::palette;

const CELL_GAP: f32 = 1.0;

impl LifeApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (reseed, pause, step) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Z),
                i.key_pressed(egui::Key::X),
                i.key_pressed(egui::Key::Space),
            )
        });
        if reseed {
            self.reseed();
        }
        if pause {
            self.toggle_running();
        }
        if step && !self.is_running {
            self.step();
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.toggle_running();
            }

            if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                self.step();
            }

            if ui.button("⏹ Clear").clicked() {
                self.clear();
            }

            if ui.button("🎲 Spawn Cells").clicked() {
                self.reseed();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.apply_selected_pattern();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
            }

            ui.separator();

            ui.label("Spawn chance:");
            let mut probability = self.probability();
            if ui.add(egui::Slider::new(&mut probability, 0.0..=1.0)).changed() {
                self.set_probability(probability);
            }
        });

        ui.label("Z spawns cells, X pauses, Space steps while paused. Click cells to toggle them while paused.");
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (width, height) = self.grid().dimensions();
        let pitch = self.cell_size + CELL_GAP;
        let total_size = Vec2::new(width as f32 * pitch, height as f32 * pitch);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, palette::BACKGROUND);

        for index in 0..self.grid().cell_count() {
            let (x, y) = self.grid().torus().coords(index);
            let rect = Rect::from_min_size(
                origin + Vec2::new(x as f32 * pitch, y as f32 * pitch),
                Vec2::splat(self.cell_size),
            );
            let style = palette::style_for(self.level_at(index));
            painter.rect_filled(rect, 1.0, style.fill);
            if style.outline.width > 0.0 {
                painter.rect_stroke(rect.shrink(style.outline.width / 2.0), 1.0, style.outline);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((x, y)) = cell_under(pos, origin, pitch, width, height) {
                    self.toggle_cell(x, y);
                }
            }
        }
    }

    fn status(&self, ui: &mut egui::Ui) {
        let (live, total) = self.population();
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.grid().generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", live));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            ui.separator();
            ui.label(format!("Births: {}  Deaths: {}", self.last_stats.births, self.last_stats.deaths));
            if self.cycle_detected {
                ui.separator();
                ui.colored_label(Color32::from_rgb(226, 93, 11), "Cycle detected, paused");
            }
        });
    }
}

/// Grid coordinate under a pointer position, if any.
fn cell_under(pos: Pos2, origin: Pos2, pitch: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (x, y) = ((offset.x / pitch) as usize, (offset.y / pitch) as usize);
    (x < width && y < height).then_some((x, y))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        self.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Decaying Game of Life");
            self.controls(ui);
            ui.separator();
            self.draw_grid(ui);
            ui.separator();
            self.status(ui);
        });

        // Keep frames coming while the simulation runs
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_cell() {
        let origin = Pos2::new(10.0, 20.0);
        assert_eq!(cell_under(Pos2::new(10.0, 20.0), origin, 13.0, 4, 3), Some((0, 0)));
        assert_eq!(cell_under(Pos2::new(40.0, 47.0), origin, 13.0, 4, 3), Some((2, 2)));
    }

    #[test]
    fn pointer_outside_grid_maps_to_nothing() {
        let origin = Pos2::new(10.0, 20.0);
        assert_eq!(cell_under(Pos2::new(5.0, 25.0), origin, 13.0, 4, 3), None);
        assert_eq!(cell_under(Pos2::new(63.0, 25.0), origin, 13.0, 4, 3), None);
        assert_eq!(cell_under(Pos2::new(15.0, 60.0), origin, 13.0, 4, 3), None);
    }
}

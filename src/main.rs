use clap::Parser;
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Vec2};
use log::{info, warn};

mod config;
mod divider;
mod pane_width;
mod theme;
mod transition;

use config::Config;
use divider::Divider;
use pane_width::PaneWidthController;
use theme::Theme;
use transition::{DemoVariant, PaneEffect, TRANSITION_SECONDS};

/// Adaptive two-pane layout demo: a draggable divider with anchored clamping
/// and a handful of pane enter/exit animation treatments
#[derive(Parser, Debug)]
#[command(name = "pane-stage")]
struct Args {
    /// Demo screen to start on
    #[arg(long, value_enum)]
    demo: Option<DemoVariant>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280.0)]
    window_width: f32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 800.0)]
    window_height: f32,

    /// Skip loading the config file
    #[arg(long)]
    no_config: bool,
}

struct PaneStageApp {
    controller: PaneWidthController,
    left_visible: bool,
    right_visible: bool,
    demo: DemoVariant,
    divider_width: f32,
    theme: Theme,
    config: Config,
}

impl PaneStageApp {
    fn new(cc: &eframe::CreationContext<'_>, config: Config, demo: DemoVariant) -> Self {
        config.theme.apply(&cc.egui_ctx);

        // Start from the window width; the real container width comes from the
        // panel on the first frame
        let controller = PaneWidthController::new(1280.0, config.anchors())
            .with_width(config.default_pane_width);

        Self {
            controller,
            left_visible: true,
            right_visible: true,
            demo,
            divider_width: config.divider_width,
            theme: config.theme,
            config,
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Demo:");
            for variant in DemoVariant::ALL {
                if ui.selectable_label(self.demo == variant, variant.name()).clicked() {
                    self.demo = variant;
                    info!("Demo variant: {}", variant.name());
                }
            }

            ui.separator();

            if ui.button("Toggle Left Pane").clicked() {
                self.left_visible = !self.left_visible;
                info!("Left pane visible: {}", self.left_visible);
            }
            if ui.button("Toggle Right Pane").clicked() {
                self.right_visible = !self.right_visible;
                info!("Right pane visible: {}", self.right_visible);
            }

            ui.separator();

            if ui.button(format!("Theme: {}", self.theme.name())).clicked() {
                self.theme.cycle();
                self.theme.apply(ui.ctx());
            }

            if ui.button("Save Settings").clicked() {
                self.config.theme = self.theme;
                self.config.demo = self.demo;
                if let Err(e) = self.config.save() {
                    warn!("Could not save settings: {}", e);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!(
                "container {:.0}px | left {:.0}px | right {:.0}px",
                self.controller.container_width(),
                self.controller.width(),
                self.controller.second_pane_width(self.divider_width),
            ));
        });
    }

    fn render_panes(&mut self, ui: &mut egui::Ui) {
        let content = ui.available_rect_before_wrap();
        self.controller.set_container_width(content.width());
        let container_width = self.controller.container_width();

        let left_t = ui.ctx().animate_bool_with_time(
            egui::Id::new("left_pane_visible"),
            self.left_visible,
            TRANSITION_SECONDS,
        );
        let right_t = ui.ctx().animate_bool_with_time(
            egui::Id::new("right_pane_visible"),
            self.right_visible,
            TRANSITION_SECONDS,
        );

        // Left pane
        let left_width = self.controller.width();
        let left_fx = self
            .demo
            .left_transition(container_width)
            .effect(left_t, left_width);
        let left_occupied = if left_t > 0.0 {
            left_width * left_fx.width_factor
        } else {
            0.0
        };
        if left_t > 0.0 {
            let rect = Rect::from_min_size(
                Pos2::new(content.min.x + left_fx.offset_x, content.min.y),
                Vec2::new(left_occupied, content.height()),
            );
            paint_pane(ui, rect, &left_fx, "Left Pane", self.theme.left_pane_fill(), self.theme.pane_text());
        }

        // Divider
        let divider_pos = Pos2::new(content.min.x + left_occupied, content.min.y);
        Divider::new().width(self.divider_width).stroke(2.0).show(
            ui,
            divider_pos,
            content.height(),
            &mut self.controller,
        );

        // Right pane takes whatever is left of the row
        let right_width = (container_width - left_occupied - self.divider_width).max(0.0);
        let right_fx = self
            .demo
            .right_transition(container_width)
            .effect(right_t, right_width);
        if right_t > 0.0 {
            let rect = Rect::from_min_size(
                Pos2::new(
                    divider_pos.x + self.divider_width + right_fx.offset_x,
                    content.min.y,
                ),
                Vec2::new(right_width * right_fx.width_factor, content.height()),
            );
            paint_pane(ui, rect, &right_fx, "Right Pane", self.theme.right_pane_fill(), self.theme.pane_text());
        }
    }
}

fn paint_pane(
    ui: &mut egui::Ui,
    rect: Rect,
    fx: &PaneEffect,
    label: &str,
    fill: Color32,
    text: Color32,
) {
    let rect = Rect::from_center_size(rect.center(), rect.size() * fx.scale);
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, Rounding::ZERO, fill.gamma_multiply(fx.opacity));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(16.0),
        text.gamma_multiply(fx.opacity),
    );
}

impl eframe::App for PaneStageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_panes(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = if args.no_config {
        Config::default()
    } else {
        Config::load()
    };
    let demo = args.demo.unwrap_or(config.demo);

    info!("pane-stage starting...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.window_width, args.window_height])
            .with_title("Pane Stage - Adaptive Layout Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "pane-stage",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaneStageApp::new(cc, config, demo)))),
    )
}

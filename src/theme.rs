use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        });
    }

    pub fn cycle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn left_pane_fill(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_gray(200),
            Theme::Dark => Color32::from_gray(60),
        }
    }

    pub fn right_pane_fill(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_gray(160),
            Theme::Dark => Color32::from_gray(40),
        }
    }

    pub fn pane_text(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_gray(20),
            Theme::Dark => Color32::from_gray(220),
        }
    }
}

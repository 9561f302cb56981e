use std::fmt;
use std::str::FromStr;

use egui::{Color32, Vec2};

use crate::error::PaintError;
use crate::palette::{self, Palette};

/// The three effect styles the toolbar can select
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushType {
    #[default]
    Foliage,
    Fire,
    Smoke,
}

impl BrushType {
    pub const ALL: [BrushType; 3] = [BrushType::Foliage, BrushType::Fire, BrushType::Smoke];

    /// Return the lowercase name used in config files and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Foliage => "foliage",
            Self::Fire => "fire",
            Self::Smoke => "smoke",
        }
    }

    /// Toolbar caption
    pub fn label(&self) -> &'static str {
        match self {
            Self::Foliage => "Foliage",
            Self::Fire => "Fire",
            Self::Smoke => "Smoke",
        }
    }

    /// Number of shapes one application of this brush emits
    pub fn batch_size(&self) -> usize {
        match self {
            Self::Foliage => 8,
            Self::Fire => 6,
            Self::Smoke => 5,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Foliage => &palette::FOLIAGE,
            Self::Fire => &palette::FIRE,
            Self::Smoke => &palette::SMOKE,
        }
    }

    /// Normalized point inside a shape's bounding box where its gradient is opaque
    pub fn gradient_center(&self) -> Vec2 {
        match self {
            // Flames are brightest near their base
            Self::Fire => Vec2::new(0.5, 0.8),
            Self::Foliage | Self::Smoke => Vec2::new(0.5, 0.5),
        }
    }

    /// Toolbar fill for this brush's button when it is not selected
    pub fn button_color(&self) -> Color32 {
        match self {
            Self::Foliage => palette::FOLIAGE_BUTTON,
            Self::Fire => palette::FIRE_BUTTON,
            Self::Smoke => palette::SMOKE_BUTTON,
        }
    }

    /// Toolbar fill for this brush's button when it is selected
    pub fn highlight_color(&self) -> Color32 {
        match self {
            Self::Foliage => palette::FOLIAGE_BUTTON_ACTIVE,
            Self::Fire => palette::FIRE_BUTTON_ACTIVE,
            Self::Smoke => palette::SMOKE_BUTTON_ACTIVE,
        }
    }
}

impl fmt::Display for BrushType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrushType {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|brush| brush.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PaintError::UnknownBrush(s.to_string()))
    }
}

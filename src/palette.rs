//! Fixed color tables for the three brushes and their toolbar buttons.

use egui::Color32;
use std::ops::RangeInclusive;

/// The colors and alpha range a brush draws from
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub colors: &'static [Color32; 5],
    /// Inclusive range of alpha values applied on top of the chosen color
    pub alpha_min: u8,
    pub alpha_max: u8,
}

impl Palette {
    pub fn alpha_range(&self) -> RangeInclusive<u8> {
        self.alpha_min..=self.alpha_max
    }

    /// Whether `color` is one of this palette's opaque entries
    pub fn contains(&self, color: Color32) -> bool {
        self.colors.contains(&color)
    }
}

const GREENS: [Color32; 5] = [
    Color32::from_rgb(34, 153, 84),
    Color32::from_rgb(39, 174, 96),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(22, 160, 133),
    Color32::from_rgb(26, 188, 156),
];

const FLAMES: [Color32; 5] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(192, 57, 43),
    Color32::from_rgb(211, 84, 0),
];

const GRAYS: [Color32; 5] = [
    Color32::from_rgb(127, 140, 141),
    Color32::from_rgb(149, 165, 166),
    Color32::from_rgb(95, 106, 106),
    Color32::from_rgb(178, 190, 195),
    Color32::from_rgb(69, 90, 100),
];

pub const FOLIAGE: Palette = Palette {
    colors: &GREENS,
    alpha_min: 100,
    alpha_max: 199,
};

pub const FIRE: Palette = Palette {
    colors: &FLAMES,
    alpha_min: 120,
    alpha_max: 219,
};

// Lower alpha keeps smoke wispy
pub const SMOKE: Palette = Palette {
    colors: &GRAYS,
    alpha_min: 40,
    alpha_max: 119,
};

pub const FOLIAGE_BUTTON: Color32 = Color32::from_rgb(39, 174, 96);
pub const FOLIAGE_BUTTON_ACTIVE: Color32 = Color32::from_rgb(46, 204, 113);
pub const FIRE_BUTTON: Color32 = Color32::from_rgb(231, 76, 60);
pub const FIRE_BUTTON_ACTIVE: Color32 = Color32::from_rgb(255, 87, 51);
pub const SMOKE_BUTTON: Color32 = Color32::from_rgb(127, 140, 141);
pub const SMOKE_BUTTON_ACTIVE: Color32 = Color32::from_rgb(149, 165, 166);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_ranges_fit_in_u8() {
        for palette in [FOLIAGE, FIRE, SMOKE] {
            assert!(palette.alpha_min < palette.alpha_max);
            assert_eq!(palette.alpha_range().count(), (palette.alpha_max - palette.alpha_min) as usize + 1);
        }
        assert_eq!(SMOKE.alpha_range(), 40..=119);
    }

    #[test]
    fn test_palettes_are_disjoint() {
        for color in FOLIAGE.colors {
            assert!(FOLIAGE.contains(*color));
            assert!(!FIRE.contains(*color));
            assert!(!SMOKE.contains(*color));
        }
    }
}

use std::collections::HashMap;

use palette::{FromColor, Lch, Srgb};

use crate::engine::Card;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    color: Srgb<u8>,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: Srgb::new(r, g, b),
        }
    }

    #[inline(always)]
    pub fn r(&self) -> u8 {
        self.color.red
    }

    #[inline(always)]
    pub fn g(&self) -> u8 {
        self.color.green
    }

    #[inline(always)]
    pub fn b(&self) -> u8 {
        self.color.blue
    }

    /// Perceptual lightness in the 0..=100 range of the CIE Lch space.
    pub fn lightness(&self) -> f32 {
        let lch: Lch = Lch::from_color(self.color.into_format::<f32>());
        lch.l
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(f: Rgb) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: f.r(),
            g: f.g(),
            b: f.b(),
        }
    }
}

pub const BOARD_BACKGROUND: Rgb = Rgb::new(187, 173, 160);
pub const EMPTY_TILE: Rgb = Rgb::new(205, 193, 180);
pub const SCORE_FOREGROUND: Rgb = Rgb::new(255, 255, 255);

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Tiles lighter than this get dark text, darker ones light text.
const TEXT_LIGHTNESS_THRESHOLD: f32 = 75.0;

const CLASSIC_TILES: [(Card, Rgb); 11] = [
    (2, Rgb::new(238, 228, 218)),
    (4, Rgb::new(237, 224, 200)),
    (8, Rgb::new(242, 177, 121)),
    (16, Rgb::new(245, 149, 99)),
    (32, Rgb::new(246, 124, 95)),
    (64, Rgb::new(246, 94, 59)),
    (128, Rgb::new(237, 207, 114)),
    (256, Rgb::new(237, 204, 97)),
    (512, Rgb::new(237, 200, 80)),
    (1024, Rgb::new(237, 197, 63)),
    (2048, Rgb::new(237, 194, 46)),
];

/// Background and foreground colors for every tile value. Values past 2048 cycle through hues
/// of a dark Lch ramp so big tiles stay distinguishable.
pub struct TilePalette {
    card_colors: HashMap<Card, (Rgb, Rgb)>,
}

impl Default for TilePalette {
    fn default() -> Self {
        let card_colors = CLASSIC_TILES
            .iter()
            .map(|(card, bg)| (*card, (*bg, text_for(bg))))
            .collect();
        Self { card_colors }
    }
}

impl TilePalette {
    /// (background, foreground) for a card; 0 is the empty slot.
    pub fn colors(&self, card: Card) -> (Rgb, Rgb) {
        if card == 0 {
            return (EMPTY_TILE, DARK_TEXT);
        }
        match self.card_colors.get(&card) {
            Some(colors) => *colors,
            None => {
                let bg = generated(card);
                (bg, text_for(&bg))
            }
        }
    }
}

fn generated(card: Card) -> Rgb {
    let exponent = card.trailing_zeros() as f32;
    let lch: Lch = Lch::new(35.0, 60.0, exponent * 360.0 / 10.0);
    let srgb: Srgb = Srgb::from_color(lch);
    let srgb = srgb.into_format::<u8>();
    Rgb::new(srgb.red, srgb.green, srgb.blue)
}

fn text_for(bg: &Rgb) -> Rgb {
    if bg.lightness() > TEXT_LIGHTNESS_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::two(2, DARK_TEXT)]
    #[case::four(4, DARK_TEXT)]
    #[case::sixty_four(64, LIGHT_TEXT)]
    #[case::huge(1 << 16, LIGHT_TEXT)]
    fn foreground_contrasts(#[case] card: Card, #[case] expected: Rgb) {
        let palette = TilePalette::default();
        assert_eq!(palette.colors(card).1, expected);
    }

    #[test]
    fn classic_values_use_table() {
        let palette = TilePalette::default();
        for (card, bg) in CLASSIC_TILES {
            assert_eq!(palette.colors(card).0, bg);
        }
        assert_eq!(palette.colors(0).0, EMPTY_TILE);
    }

    #[test]
    fn large_values_are_distinct() {
        let palette = TilePalette::default();
        assert_ne!(palette.colors(4096).0, palette.colors(8192).0);
    }

    #[test]
    fn lightness_ordering() {
        assert!(Rgb::new(255, 255, 255).lightness() > Rgb::new(0, 0, 0).lightness());
    }
}

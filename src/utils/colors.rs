//! Terminal colors for chart series.

use ansi_term::Colour;

/// Series palette, cycled by series index (same order as the web charts).
pub const PALETTE: [Colour; 6] = [
    Colour::RGB(0x00, 0x88, 0xFE),
    Colour::RGB(0x00, 0xC4, 0x9F),
    Colour::RGB(0xFF, 0xBB, 0x28),
    Colour::RGB(0xFF, 0x80, 0x42),
    Colour::RGB(0xAA, 0x00, 0xFF),
    Colour::RGB(0xFF, 0x00, 0x7F),
];

pub const GREY: Colour = Colour::Fixed(244);

pub fn series_colour(index: usize) -> Colour {
    PALETTE[index % PALETTE.len()]
}

/// Green once the daily goal is met.
pub fn colour_for_goal(reached: bool) -> Colour {
    if reached { Colour::Green } else { Colour::White }
}

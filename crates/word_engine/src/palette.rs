use shared::{HexColor, WordRecord};

/// Fallback background colors, picked by position when a record has no color.
pub const PALETTE: [u32; 16] = [
    0xA8D8EA, // soft sky blue
    0xAA96DA, // lavender
    0xFCBAD3, // soft pink
    0xFFFFD2, // light yellow
    0xC7CEEA, // periwinkle
    0xB5EAD7, // mint green
    0xFFD3A5, // peach
    0xFD9853, // coral
    0xA8E6CF, // seafoam
    0xDDA0DD, // plum
    0xFFEAA7, // warm yellow
    0xDFE7F2, // powder blue
    0xF5B7B1, // dusty rose
    0xAED6F1, // light blue
    0xF8BBD0, // blush pink
    0xD4E6F1, // baby blue
];

pub fn palette_color(position: usize) -> HexColor {
    let value = PALETTE[position % PALETTE.len()];
    HexColor::from_rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

pub fn display_color(record: &WordRecord, position: usize) -> HexColor {
    record
        .color
        .clone()
        .unwrap_or_else(|| palette_color(position))
}

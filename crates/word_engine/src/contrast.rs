use shared::{ForegroundPalette, HexColor, Tone};

pub const LIGHT_THRESHOLD: f64 = 0.5;

const ON_LIGHT: ForegroundPalette = ForegroundPalette {
    primary_text: "rgba(30, 30, 30, 0.95)",
    secondary_text: "rgba(30, 30, 30, 0.85)",
    tertiary_text: "rgba(30, 30, 30, 0.7)",
    border: "rgba(30, 30, 30, 0.2)",
    hex_chip_background: "rgba(30, 30, 30, 0.1)",
    button_background: "rgba(30, 30, 30, 0.1)",
    button_border: "rgba(30, 30, 30, 0.3)",
};

const ON_DARK: ForegroundPalette = ForegroundPalette {
    primary_text: "rgba(255, 255, 255, 0.95)",
    secondary_text: "rgba(255, 255, 255, 0.85)",
    tertiary_text: "rgba(255, 255, 255, 0.7)",
    border: "rgba(255, 255, 255, 0.2)",
    hex_chip_background: "rgba(255, 255, 255, 0.1)",
    button_background: "rgba(255, 255, 255, 0.15)",
    button_border: "rgba(255, 255, 255, 0.3)",
};

pub fn luminance(color: &HexColor) -> f64 {
    let (r, g, b) = color.rgb();
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

pub fn classify(color: &HexColor) -> Tone {
    if luminance(color) > LIGHT_THRESHOLD {
        Tone::Light
    } else {
        Tone::Dark
    }
}

pub fn foreground_for(tone: Tone) -> ForegroundPalette {
    match tone {
        Tone::Light => ON_LIGHT,
        Tone::Dark => ON_DARK,
    }
}

pub fn contrast_for(color: &HexColor) -> (Tone, ForegroundPalette) {
    let tone = classify(color);
    (tone, foreground_for(tone))
}

#[cfg(test)]
#[path = "tests/contrast_tests.rs"]
mod tests;

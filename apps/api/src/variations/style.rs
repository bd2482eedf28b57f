//! Style configuration: the fixed enumeration tables, the draw-order logic
//! that maps a seed to a `StyleConfig`, and the no-variation default.
//!
//! CRITICAL: the tables below and the order in which `generate_variations`
//! consumes the generator are load-bearing. Reordering draws or editing a
//! table changes every downstream selection for every existing seed, which
//! breaks reproducibility against previously rendered documents. Add new
//! axes only at the end of the sequence.

use serde::Serialize;

use crate::variations::rng::SeededRng;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Section title styling: CSS text-transform, font weight, letter spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleStyle {
    pub transform: &'static str,
    pub weight: u16,
    pub letter_spacing: &'static str,
}

/// Section divider line: CSS border-style keyword plus width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderStyle {
    pub style: &'static str,
    pub width: &'static str,
}

/// The four-color palette used across a themed render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub text: &'static str,
    pub secondary: &'static str,
    pub link: &'static str,
    pub border: &'static str,
}

/// Font sizes in rem units for the three text tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSizes {
    pub body: f64,
    pub heading: f64,
    pub section_title: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontWeights {
    pub body: u16,
    pub role: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlignment {
    Left,
    Center,
}

/// The full set of cosmetic parameters a themed render substitutes into its
/// markup and CSS. Purely a function of `(enableVariations, seed)`; no
/// hidden state, constructed fresh per render, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleConfig {
    pub font: &'static str,
    pub title_style: TitleStyle,
    pub contact_separator: &'static str,
    pub border_style: BorderStyle,
    pub bullet: &'static str,
    pub colors: Palette,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub border_radius: u8,
    pub spacing_multiplier: f64,
    pub use_network_name: bool,
    pub use_full_urls_and_no_blue_links: bool,
    pub section_title_alignment: TitleAlignment,
    pub work_experience_title: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Enumeration tables
// ────────────────────────────────────────────────────────────────────────────

/// ATS-safe font stacks.
pub const FONTS: [&str; 8] = [
    "'Segoe UI', Arial, sans-serif",
    "Verdana, 'Segoe UI', Arial, sans-serif",
    "Calibri, Arial, sans-serif",
    "Tahoma, Arial, sans-serif",
    "Arial, sans-serif",
    "'Times New Roman', Georgia, serif",
    "Helvetica, Arial, sans-serif",
    "Georgia, 'Times New Roman', serif",
];

pub const TITLE_STYLES: [TitleStyle; 4] = [
    TitleStyle { transform: "uppercase", weight: 700, letter_spacing: "1px" },
    TitleStyle { transform: "capitalize", weight: 600, letter_spacing: "0.5px" },
    TitleStyle { transform: "none", weight: 700, letter_spacing: "1px" },
    TitleStyle { transform: "uppercase", weight: 600, letter_spacing: "1.2px" },
];

pub const CONTACT_SEPARATORS: [&str; 3] = ["|", "•", "·"];

pub const BORDER_STYLES: [BorderStyle; 3] = [
    BorderStyle { style: "solid", width: "1px" },
    BorderStyle { style: "solid", width: "2px" },
    BorderStyle { style: "solid", width: "3px" },
];

pub const BULLETS: [&str; 2] = ["•", "-"];

// The text/secondary tables are currently degenerate (both entries equal).
// They still consume a draw each so the sequence stays stable if a second
// shade is ever introduced.
pub const TEXT_COLORS: [&str; 2] = ["#222", "#222"];
pub const SECONDARY_COLORS: [&str; 2] = ["#444", "#444"];
pub const LINK_COLORS: [&str; 2] = ["#3681b8", "#3a7ab8"];
pub const BORDER_COLORS: [&str; 2] = ["#bbb", "#222"];

pub const SPACING_MULTIPLIERS: [f64; 4] = [1.0, 0.95, 1.05, 1.0];

pub const BORDER_RADII: [u8; 4] = [3, 4, 5, 3];

pub const TITLE_ALIGNMENTS: [TitleAlignment; 2] =
    [TitleAlignment::Left, TitleAlignment::Center];

pub const WORK_EXPERIENCE_TITLES: [&str; 2] =
    ["Professional Experience", "Work Experience"];

const BASE_BODY_SIZE: f64 = 0.9;
const BASE_HEADING_SIZE: f64 = 1.2;
const BASE_SECTION_TITLE_SIZE: f64 = 0.945;

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Maps one draw to a table entry via `floor(draw * len)`, clamped to the
/// last index so a floating-point edge at 1.0 can never index out of bounds.
fn pick<T: Copy>(table: &[T], draw: f64) -> T {
    let index = ((draw * table.len() as f64) as usize).min(table.len() - 1);
    table[index]
}

/// Derives the full style configuration for one seed.
///
/// Draw order (fixed): font, title style, separator, border style, bullet,
/// text color, secondary color, link color, border color, spacing; then
/// font-size perturbation, body weight, role weight, border radius, full-URL
/// toggle, alignment, work section title, network-name toggle.
pub fn generate_variations(seed: u32) -> StyleConfig {
    let mut rng = SeededRng::new(seed);

    let font = pick(&FONTS, rng.draw());
    let title_style = pick(&TITLE_STYLES, rng.draw());
    let contact_separator = pick(&CONTACT_SEPARATORS, rng.draw());
    let border_style = pick(&BORDER_STYLES, rng.draw());
    let bullet = pick(&BULLETS, rng.draw());
    let text = pick(&TEXT_COLORS, rng.draw());
    let secondary = pick(&SECONDARY_COLORS, rng.draw());
    let link = pick(&LINK_COLORS, rng.draw());
    let border = pick(&BORDER_COLORS, rng.draw());
    let spacing_multiplier = pick(&SPACING_MULTIPLIERS, rng.draw());

    // ±0.05rem applied to all three tiers.
    let size_offset = (rng.draw() - 0.5) * 0.1;

    let body_weight = 400 + (rng.draw() * 3.0) as u16 * 50; // 400 | 450 | 500
    let role_weight = 600 + (rng.draw() * 2.0) as u16 * 50; // 600 | 650

    let border_radius = pick(&BORDER_RADII, rng.draw());

    let use_full_urls_and_no_blue_links = rng.draw() < 0.5;
    let section_title_alignment = pick(&TITLE_ALIGNMENTS, rng.draw());
    let work_experience_title = pick(&WORK_EXPERIENCE_TITLES, rng.draw());
    let use_network_name = rng.draw() < 0.5;

    StyleConfig {
        font,
        title_style,
        contact_separator,
        border_style,
        bullet,
        colors: Palette { text, secondary, link, border },
        font_size: FontSizes {
            body: BASE_BODY_SIZE + size_offset,
            heading: BASE_HEADING_SIZE + size_offset,
            section_title: BASE_SECTION_TITLE_SIZE + size_offset,
        },
        font_weight: FontWeights {
            body: body_weight,
            role: role_weight,
        },
        border_radius,
        spacing_multiplier,
        use_network_name,
        use_full_urls_and_no_blue_links,
        section_title_alignment,
        work_experience_title,
    }
}

/// The fixed configuration used whenever variations are disabled. Byte-stable
/// regardless of document content.
pub fn default_variations() -> StyleConfig {
    StyleConfig {
        font: "'Segoe UI', Arial, sans-serif",
        title_style: TitleStyle {
            transform: "uppercase",
            weight: 700,
            letter_spacing: "1px",
        },
        contact_separator: "|",
        border_style: BorderStyle { style: "solid", width: "1px" },
        bullet: "•",
        colors: Palette {
            text: "#222",
            secondary: "#444",
            link: "#3681b8",
            border: "#bbb",
        },
        font_size: FontSizes {
            body: 0.9,
            heading: 1.3,
            section_title: 0.945,
        },
        font_weight: FontWeights { body: 400, role: 600 },
        border_radius: 3,
        spacing_multiplier: 1.0,
        use_network_name: false,
        use_full_urls_and_no_blue_links: false,
        section_title_alignment: TitleAlignment::Left,
        work_experience_title: "Professional Experience",
    }
}

//! Fixed per-page decorations: accent bars top and bottom, the wrapped
//! regulatory disclaimer, the brand line, and "Página N de M". Drawn during
//! commit, once the total page count is known.

use crate::canvas::{Color, Surface};
use crate::fonts::Font;
use crate::layout::wrap_text;

pub(crate) const DISCLAIMER: &str = "Estes resultados referem-se exclusivamente às amostras ensaiadas. Este documento poderá ser reproduzido somente na íntegra. Resultados apresentados sem considerar a incerteza de medição +- 0,90Mpa.";

pub(crate) const BRAND: &str = "Sistema Desenvolvido por IA e pela Habisolute Engenharia";

pub(crate) const LEFT_MARGIN: f32 = 18.0;
pub(crate) const RIGHT_MARGIN: f32 = 18.0;

const ACCENT: Color = Color::rgb8(243, 156, 18);
const DARK: Color = Color::rgb8(51, 51, 51);

// Bar geometry, offsets from the page edges.
const HEADER_BAR_DROP: f32 = 10.0;
const HEADER_BAR_H: f32 = 6.0;
const HEADER_RULE_DROP: f32 = 16.0;
const HEADER_RULE_H: f32 = 2.0;
const FOOTER_RULE_Y: f32 = 8.0;
const FOOTER_RULE_H: f32 = 2.0;
const FOOTER_BAR_Y: f32 = 12.0;
const FOOTER_BAR_H: f32 = 6.0;

// Footer text block. The disclaimer stacks upward from this baseline; the
// brand and page-count lines sit above the block.
const FOOTER_BASELINE: f32 = 44.0;
const FOOTER_LEADING: f32 = 8.0;
const DISCLAIMER_SIZE: f32 = 7.0;
const BRAND_SIZE: f32 = 8.0;
const PAGE_COUNT_SIZE: f32 = 8.0;

/// Bottom extent of body content that keeps clear of the footer chrome.
pub(crate) fn footer_reserve(width: f32) -> f32 {
    let max_w = width - LEFT_MARGIN - RIGHT_MARGIN;
    let lines = wrap_text(DISCLAIMER, Font::Helvetica, DISCLAIMER_SIZE, max_w).len() as f32;
    FOOTER_BASELINE + lines * FOOTER_LEADING + 24.0
}

/// Draw all fixed decorations for page `page` of `total` (both 1-based /
/// counted). Runs with the page's restored graphics state active; sets every
/// attribute it depends on before drawing.
pub(crate) fn draw(s: &mut impl Surface, width: f32, height: f32, page: usize, total: usize) {
    // Header accent: colored bar with a thin dark rule below it.
    s.set_fill_color(ACCENT);
    s.fill_rect(0.0, height - HEADER_BAR_DROP, width, HEADER_BAR_H);
    s.set_fill_color(DARK);
    s.fill_rect(0.0, height - HEADER_RULE_DROP, width, HEADER_RULE_H);

    // Footer accent, mirrored: thin dark rule with the colored bar above it.
    s.fill_rect(0.0, FOOTER_RULE_Y, width, FOOTER_RULE_H);
    s.set_fill_color(ACCENT);
    s.fill_rect(0.0, FOOTER_BAR_Y, width, FOOTER_BAR_H);

    // Disclaimer, wrapped to the text width, last line on the fixed baseline.
    let max_w = width - LEFT_MARGIN - RIGHT_MARGIN;
    let lines = wrap_text(DISCLAIMER, Font::Helvetica, DISCLAIMER_SIZE, max_w);
    s.set_fill_color(Color::BLACK);
    s.set_font(Font::Helvetica, DISCLAIMER_SIZE);
    for (i, line) in lines.iter().enumerate() {
        let y = FOOTER_BASELINE + (lines.len() - 1 - i) as f32 * FOOTER_LEADING;
        s.draw_string(LEFT_MARGIN, y, line);
    }

    let block_top = FOOTER_BASELINE + lines.len() as f32 * FOOTER_LEADING;

    s.set_font(Font::HelveticaOblique, BRAND_SIZE);
    s.draw_centred_string(width / 2.0, block_top + 12.0, BRAND);

    s.set_font(Font::Helvetica, PAGE_COUNT_SIZE);
    s.draw_right_string(
        width - RIGHT_MARGIN,
        block_top + 2.0,
        &format!("Página {page} de {total}"),
    );
}

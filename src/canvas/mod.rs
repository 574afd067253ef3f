//! Page-oriented drawing surface over `pdf_writer::Content`, plus the
//! buffering canvas that defers page emission until the total page count is
//! known.

pub(crate) mod chrome;

mod buffered;

pub use buffered::BufferedCanvas;

use pdf_writer::{Content, Name, Str};

use crate::fonts::{Font, to_winansi_bytes};

/// A4 portrait in points.
pub const A4: (f32, f32) = (595.28, 841.89);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

/// The mutable drawing attributes of a page. Snapshotted per page when it is
/// buffered, restored verbatim when the page is replayed at commit time.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicsState {
    pub font: Font,
    pub font_size: f32,
    pub fill: Color,
    pub stroke: Color,
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState {
            font: Font::Helvetica,
            font_size: 12.0,
            fill: Color::BLACK,
            stroke: Color::BLACK,
        }
    }
}

/// Imperative drawing surface for one page. `BufferedCanvas` exposes this
/// same interface and intercepts only the page lifecycle; everything that
/// draws (the report body, the page chrome) is written against the trait, so
/// tests can substitute a recording implementation.
pub trait Surface {
    fn set_font(&mut self, font: Font, size: f32);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    /// Filled axis-aligned rectangle with bottom-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Text with its left edge at `x`, baseline at `y`.
    fn draw_string(&mut self, x: f32, y: f32, text: &str);
    /// Text horizontally centered on `x`.
    fn draw_centred_string(&mut self, x: f32, y: f32, text: &str);
    /// Text with its right edge at `x`.
    fn draw_right_string(&mut self, x: f32, y: f32, text: &str);
}

/// Records drawing operations into a content stream. State setters only
/// update [`GraphicsState`]; each drawing op emits the operators it needs, so
/// a painter resumed from a snapshot picks up exactly where the page left off.
pub(crate) struct Painter {
    content: Content,
    state: GraphicsState,
}

impl Painter {
    pub(crate) fn new() -> Self {
        Painter {
            content: Content::new(),
            state: GraphicsState::default(),
        }
    }

    pub(crate) fn resume(content: Content, state: GraphicsState) -> Self {
        Painter { content, state }
    }

    /// Detach the current page, leaving a fresh blank one behind.
    pub(crate) fn take(&mut self) -> (Content, GraphicsState) {
        (
            std::mem::replace(&mut self.content, Content::new()),
            std::mem::take(&mut self.state),
        )
    }

    pub(crate) fn state(&self) -> &GraphicsState {
        &self.state
    }

    pub(crate) fn finish_content(self) -> Vec<u8> {
        self.content.finish().to_vec()
    }

    fn show_text(&mut self, x: f32, y: f32, text: &str) {
        let bytes = to_winansi_bytes(text);
        let Color { r, g, b } = self.state.fill;
        self.content.set_fill_rgb(r, g, b);
        self.content
            .begin_text()
            .set_font(
                Name(self.state.font.resource_name().as_bytes()),
                self.state.font_size,
            )
            .next_line(x, y)
            .show(Str(&bytes))
            .end_text();
    }
}

impl Surface for Painter {
    fn set_font(&mut self, font: Font, size: f32) {
        self.state.font = font;
        self.state.font_size = size;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let Color { r, g, b } = self.state.fill;
        self.content.set_fill_rgb(r, g, b);
        self.content.rect(x, y, w, h);
        self.content.fill_nonzero();
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        self.show_text(x, y, text);
    }

    fn draw_centred_string(&mut self, x: f32, y: f32, text: &str) {
        let w = self.state.font.string_width(text, self.state.font_size);
        self.show_text(x - w / 2.0, y, text);
    }

    fn draw_right_string(&mut self, x: f32, y: f32, text: &str) {
        let w = self.state.font.string_width(text, self.state.font_size);
        self.show_text(x - w, y, text);
    }
}

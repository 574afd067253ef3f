use pdf_writer::{Filter, Name, Pdf, Rect, Ref};

use crate::canvas::{A4, Color, GraphicsState, Painter, Surface, chrome};
use crate::fonts::{Font, register_builtin};

/// Snapshot of one buffered page: its recorded content stream, the drawing
/// state active when it was finalized, and its 1-based number. Captured once
/// by [`BufferedCanvas::show_page`], replayed exactly once by
/// [`BufferedCanvas::finish`].
struct PageState {
    content: pdf_writer::Content,
    state: GraphicsState,
    number: usize,
}

/// A drawing surface that buffers pages instead of emitting them, so that
/// per-page chrome depending on the total page count ("Página 3 de 12") can
/// be drawn correctly on every page, including the first.
///
/// Lifecycle: draw a page through the [`Surface`] methods, call
/// [`show_page`](Self::show_page) once per logical page, then
/// [`finish`](Self::finish) exactly once. `finish` consumes the canvas, so a
/// second commit (or drawing after commit) does not compile. Committing
/// with zero buffered pages yields a valid empty document with no chrome.
pub struct BufferedCanvas {
    painter: Painter,
    pages: Vec<PageState>,
    width: f32,
    height: f32,
    page_number: usize,
}

impl BufferedCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        BufferedCanvas {
            painter: Painter::new(),
            pages: Vec::new(),
            width,
            height,
            page_number: 1,
        }
    }

    pub fn a4() -> Self {
        let (w, h) = A4;
        BufferedCanvas::new(w, h)
    }

    pub fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// 1-based number of the page currently being drawn.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn pages_buffered(&self) -> usize {
        self.pages.len()
    }

    /// Finalize the current page into the buffer and start a fresh blank one.
    /// The page is not written to the output yet; its content and graphics
    /// state are kept so the commit pass can resume drawing on it.
    pub fn show_page(&mut self) {
        let (content, state) = self.painter.take();
        self.pages.push(PageState {
            content,
            state,
            number: self.page_number,
        });
        self.page_number += 1;
    }

    /// Commit the document: replay every buffered page in order, draw the
    /// page chrome with the now-known total, and assemble the PDF.
    ///
    /// Only pages finalized via [`show_page`](Self::show_page) are written;
    /// content drawn after the last `show_page` is discarded.
    pub fn finish(self) -> Vec<u8> {
        let total = self.pages.len();
        log::debug!("committing document: {total} pages");

        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);

        let font_refs: Vec<(Font, Ref)> = Font::ALL
            .iter()
            .enumerate()
            .map(|(i, &font)| (font, Ref::new(3 + i as i32)))
            .collect();
        for &(font, font_ref) in &font_refs {
            register_builtin(&mut pdf, font_ref, font);
        }

        let first_free = 3 + font_refs.len() as i32;
        let page_ids: Vec<Ref> = (0..total).map(|i| Ref::new(first_free + i as i32)).collect();
        let content_ids: Vec<Ref> = (0..total)
            .map(|i| Ref::new(first_free + (total + i) as i32))
            .collect();

        for (i, page) in self.pages.into_iter().enumerate() {
            let mut painter = Painter::resume(page.content, page.state);
            chrome::draw(&mut painter, self.width, self.height, page.number, total);
            let raw = painter.finish_content();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(total as i32);

        for i in 0..total {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, self.width, self.height))
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for &(font, font_ref) in &font_refs {
                fonts.pair(Name(font.resource_name().as_bytes()), font_ref);
            }
        }

        pdf.finish()
    }

    /// Vertical extent at the bottom of every page occupied by the footer
    /// chrome; body content should stay above it.
    pub fn footer_reserve(&self) -> f32 {
        chrome::footer_reserve(self.width)
    }
}

impl Surface for BufferedCanvas {
    fn set_font(&mut self, font: Font, size: f32) {
        self.painter.set_font(font, size);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.painter.set_fill_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.painter.set_stroke_color(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.painter.fill_rect(x, y, w, h);
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        self.painter.draw_string(x, y, text);
    }

    fn draw_centred_string(&mut self, x: f32, y: f32, text: &str) {
        self.painter.draw_centred_string(x, y, text);
    }

    fn draw_right_string(&mut self, x: f32, y: f32, text: &str) {
        self.painter.draw_right_string(x, y, text);
    }
}

use pdf_writer::{Name, Pdf, Ref};

/// Fonts used by the report. All three are PDF base-14 built-ins, registered
/// as Type1 fonts with WinAnsiEncoding; nothing is embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    pub(crate) fn base_name(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Resource name under which the font appears in every page's /Resources.
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
        }
    }

    pub(crate) const ALL: [Font; 3] =
        [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique];

    /// Width of one WinAnsi-encoded character in 1000 units/em.
    fn char_width_1000(self, byte: u8) -> f32 {
        match self {
            Font::Helvetica | Font::HelveticaOblique => helvetica_width_1000(byte),
            Font::HelveticaBold => helvetica_bold_width_1000(byte),
        }
    }

    /// Rendered width of `text` at `size` points. Characters outside WinAnsi
    /// are unrepresentable and measure zero, matching what gets drawn.
    pub fn string_width(self, text: &str, size: f32) -> f32 {
        to_winansi_bytes(text)
            .iter()
            .map(|&b| self.char_width_1000(b) * size / 1000.0)
            .sum()
    }
}

/// Register a built-in font. No font program is written; the viewer supplies
/// the real glyphs.
pub(crate) fn register_builtin(pdf: &mut Pdf, font_ref: Ref, font: Font) {
    pdf.type1_font(font_ref)
        .base_font(Name(font.base_name().as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
}

/// Encode UTF-8 text as WinAnsi bytes. Unmappable characters are dropped.
pub(crate) fn to_winansi_bytes(text: &str) -> Vec<u8> {
    text.chars().filter_map(winansi_byte).collect()
}

fn winansi_byte(ch: char) -> Option<u8> {
    let cp = ch as u32;
    match cp {
        // ASCII and the Latin-1 block map straight through; WinAnsi only
        // diverges from Latin-1 in 0x80..0x9F.
        0x20..=0x7E | 0xA0..=0xFF => Some(cp as u8),
        0x20AC => Some(0x80),
        0x201A => Some(0x82),
        0x0192 => Some(0x83),
        0x201E => Some(0x84),
        0x2026 => Some(0x85),
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02C6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8A),
        0x2039 => Some(0x8B),
        0x0152 => Some(0x8C),
        0x017D => Some(0x8E),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92),
        0x201C => Some(0x93),
        0x201D => Some(0x94),
        0x2022 => Some(0x95),
        0x2013 => Some(0x96),
        0x2014 => Some(0x97),
        0x02DC => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9A),
        0x203A => Some(0x9B),
        0x0153 => Some(0x9C),
        0x017E => Some(0x9E),
        0x0178 => Some(0x9F),
        _ => None,
    }
}

/// Approximate Helvetica widths at 1000 units/em for WinAnsi bytes.
fn helvetica_width_1000(byte: u8) -> f32 {
    match byte {
        b' ' => 278.0,
        b'0'..=b'9' => 556.0,
        b'I' | b'J' => 278.0, // narrow uppercase
        b'M' | b'W' => 833.0, // wide
        b'A'..=b'Z' => 667.0,
        b'f' | b'i' | b'j' | b'l' | b't' => 278.0, // narrow lowercase
        b'm' | b'w' => 833.0,
        b'a'..=b'z' => 556.0,
        33..=47 | 58..=64 | 91..=96 | 123..=126 => 333.0, // punctuation
        0xC0..=0xDF => 667.0,                             // accented uppercase
        0xE0..=0xFF => 556.0,                             // accented lowercase
        _ => 556.0,
    }
}

/// Same scheme for Helvetica-Bold.
fn helvetica_bold_width_1000(byte: u8) -> f32 {
    match byte {
        b' ' => 278.0,
        b'0'..=b'9' => 556.0,
        b'I' | b'J' => 278.0,
        b'M' | b'W' => 889.0,
        b'A'..=b'Z' => 722.0,
        b'f' | b'i' | b'j' | b'l' | b't' => 333.0,
        b'm' | b'w' => 889.0,
        b'a'..=b'z' => 611.0,
        33..=47 | 58..=64 | 91..=96 | 123..=126 => 333.0,
        0xC0..=0xDF => 722.0,
        0xE0..=0xFF => 611.0,
        _ => 611.0,
    }
}

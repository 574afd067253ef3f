//! Helpers for inspecting generated PDFs: locate FlateDecode content streams,
//! inflate them, and decode the strings shown by text operators.

pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

/// Inflated content streams in the order they appear in the file, which is
/// page order for documents produced by this crate.
pub fn content_streams(pdf: &[u8]) -> Vec<Vec<u8>> {
    let mut streams = Vec::new();
    let mut from = 0;
    while let Some(rel) = find(&pdf[from..], b"endstream") {
        let end_marker = from + rel;
        let Some(start_marker) = rfind(&pdf[..end_marker], b"stream") else {
            break;
        };
        let mut start = start_marker + b"stream".len();
        if pdf[start] == b'\r' {
            start += 1;
        }
        if pdf[start] == b'\n' {
            start += 1;
        }
        let mut end = end_marker;
        while end > start && (pdf[end - 1] == b'\n' || pdf[end - 1] == b'\r') {
            end -= 1;
        }
        if let Ok(raw) = miniz_oxide::inflate::decompress_to_vec_zlib(&pdf[start..end]) {
            streams.push(raw);
        }
        from = end_marker + b"endstream".len();
    }
    streams
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// All string operands in a decompressed content stream, decoded. Handles
/// both literal `(...)` strings (with backslash escapes) and hex `<...>`
/// strings; pdf-writer picks whichever form fits the bytes.
pub fn shown_strings(stream: &[u8]) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < stream.len() {
        match stream[i] {
            b'(' => {
                let mut s = Vec::new();
                let mut depth = 1usize;
                i += 1;
                while i < stream.len() && depth > 0 {
                    match stream[i] {
                        b'\\' if i + 1 < stream.len() => {
                            i += 1;
                            let c = stream[i];
                            match c {
                                b'n' => s.push(b'\n'),
                                b'r' => s.push(b'\r'),
                                b't' => s.push(b'\t'),
                                b'b' => s.push(0x08),
                                b'f' => s.push(0x0C),
                                b'0'..=b'7' => {
                                    let mut val = 0u16;
                                    let mut digits = 0;
                                    while digits < 3
                                        && i < stream.len()
                                        && stream[i].is_ascii_digit()
                                        && stream[i] < b'8'
                                    {
                                        val = val * 8 + u16::from(stream[i] - b'0');
                                        i += 1;
                                        digits += 1;
                                    }
                                    i -= 1;
                                    s.push(val as u8);
                                }
                                other => s.push(other),
                            }
                            i += 1;
                        }
                        b'(' => {
                            depth += 1;
                            s.push(b'(');
                            i += 1;
                        }
                        b')' => {
                            depth -= 1;
                            if depth > 0 {
                                s.push(b')');
                            }
                            i += 1;
                        }
                        byte => {
                            s.push(byte);
                            i += 1;
                        }
                    }
                }
                out.push(s);
            }
            b'<' if stream.get(i + 1) != Some(&b'<') => {
                let mut digits = Vec::new();
                i += 1;
                while i < stream.len() && stream[i] != b'>' {
                    if stream[i].is_ascii_hexdigit() {
                        digits.push(stream[i]);
                    }
                    i += 1;
                }
                i += 1;
                if digits.len() % 2 == 1 {
                    digits.push(b'0');
                }
                let s = digits
                    .chunks(2)
                    .map(|pair| {
                        let hi = (pair[0] as char).to_digit(16).unwrap_or(0) as u8;
                        let lo = (pair[1] as char).to_digit(16).unwrap_or(0) as u8;
                        (hi << 4) | lo
                    })
                    .collect();
                out.push(s);
            }
            _ => i += 1,
        }
    }
    out
}

/// True when some shown string in the stream contains `text` (WinAnsi bytes).
pub fn stream_shows(stream: &[u8], text: &str) -> bool {
    let needle = winansi(text);
    shown_strings(stream).iter().any(|s| contains(s, &needle))
}

/// Encode a Latin-1-representable string the way the renderer does (WinAnsi
/// matches Latin-1 for everything these tests assert on).
pub fn winansi(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u32 as u8).collect()
}

use crate::fonts::Font;

/// Greedily wrap `text` into lines no wider than `max_width` at the given
/// font/size. Words are packed while they fit; a word that alone exceeds
/// `max_width` still gets its own line; words are never split.
///
/// Rejoining the returned lines with single spaces reproduces the
/// whitespace-normalized input.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let space_w = font.string_width(" ", size);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_w: f32 = 0.0;

    for word in text.split_whitespace() {
        let word_w = font.string_width(word, size);
        if line.is_empty() {
            line.push_str(word);
            line_w = word_w;
        } else if line_w + space_w + word_w > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_w = word_w;
        } else {
            line.push(' ');
            line.push_str(word);
            line_w += space_w + word_w;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

//! Visual width of tag text.

/// Width of a string where every ASCII character counts as one unit
/// and every other character counts as two.
///
/// # Notes
/// + This is a heuristic for full-width text, not a display width.
/// A limit of 64 units allows 32 CJK characters.
pub fn visual_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    if c.is_ascii() {
        1
    } else {
        2
    }
}

#[cfg(test)]
#[path = "./width_test.rs"]
mod width_test;

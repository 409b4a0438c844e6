use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Upper-case the first character, leave the rest alone
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn recipe_count_label(count: usize) -> String {
    if count == 1 {
        "1 recipe".to_string()
    } else {
        format!("{} recipes", count)
    }
}

pub fn match_count_label(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{} matches", count)
    }
}

/// `"2 egg"`, or just the name when there is no amount
pub fn amount_and_name(amount: &str, name: &str) -> String {
    if amount.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", amount, name)
    }
}

/// Greedy word wrap to `width` terminal columns. Words wider than the
/// width are split between characters. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word_width = UnicodeWidthStr::width(word);
        let mut word = word.to_string();

        if word_width > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut pieces = split_to_width(&word, width);
            word = pieces.pop().unwrap_or_default();
            word_width = UnicodeWidthStr::width(word.as_str());
            lines.extend(pieces);
        }

        let needed = if current_width == 0 {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current_width += word_width;
        current.push_str(&word);
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Break one word into pieces no wider than `width` columns. A character
/// wider than `width` still gets a piece of its own.
fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for ch in word.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if piece_width > 0 && piece_width + ch_width > width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

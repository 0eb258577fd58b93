pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    let byte_pos = byte_index_at_char(value, pos);
    value.insert(byte_pos, ch);
    *cursor = pos + 1;
}

pub fn remove_char_at(value: &mut String, char_idx: usize) -> bool {
    if char_idx >= char_count(value) {
        return false;
    }
    let byte_pos = byte_index_at_char(value, char_idx);
    value.remove(byte_pos);
    true
}

/// Display column of `char_idx`, counting wide characters twice.
pub fn column_at(value: &str, char_idx: usize) -> usize {
    use unicode_width::UnicodeWidthChar;

    value
        .chars()
        .take(char_idx)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

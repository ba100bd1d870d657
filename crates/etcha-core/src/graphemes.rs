use ropey::{str_utils::byte_to_char_idx, RopeSlice};
use unicode_segmentation::{GraphemeCursor, GraphemeIncomplete};

/// Finds the `n`th grapheme cluster boundary before `char_idx`.
#[must_use]
pub fn nth_prev_grapheme_boundary(slice: RopeSlice, char_idx: usize, n: usize) -> usize {
    debug_assert!(char_idx <= slice.len_chars());

    // Cursor works in bytes.
    let mut byte_idx = slice.char_to_byte(char_idx);

    let (mut chunk, mut chunk_byte_idx, mut chunk_char_idx, _) = slice.chunk_at_byte(byte_idx);

    let mut cursor = GraphemeCursor::new(byte_idx, slice.len_bytes(), true);

    for _ in 0..n {
        loop {
            match cursor.prev_boundary(chunk, chunk_byte_idx) {
                Ok(None) => return 0,
                Ok(Some(boundary)) => {
                    byte_idx = boundary;
                    break;
                }
                Err(GraphemeIncomplete::PrevChunk) => {
                    let (a, b, c, _) = slice.chunk_at_byte(chunk_byte_idx - 1);
                    chunk = a;
                    chunk_byte_idx = b;
                    chunk_char_idx = c;
                }
                Err(GraphemeIncomplete::PreContext(ctx_byte_idx)) => {
                    let ctx_chunk = slice.chunk_at_byte(ctx_byte_idx - 1).0;
                    cursor.provide_context(ctx_chunk, ctx_byte_idx - ctx_chunk.len());
                }
                _ => unreachable!(),
            }
        }
    }

    chunk_char_idx + byte_to_char_idx(chunk, byte_idx - chunk_byte_idx)
}

/// Finds the `n`th grapheme cluster boundary after `char_idx`.
#[must_use]
pub fn nth_next_grapheme_boundary(slice: RopeSlice, char_idx: usize, n: usize) -> usize {
    debug_assert!(char_idx <= slice.len_chars());

    // Cursor works in bytes.
    let mut byte_idx = slice.char_to_byte(char_idx);

    let (mut chunk, mut chunk_byte_idx, mut chunk_char_idx, _) = slice.chunk_at_byte(byte_idx);

    let mut cursor = GraphemeCursor::new(byte_idx, slice.len_bytes(), true);

    for _ in 0..n {
        loop {
            match cursor.next_boundary(chunk, chunk_byte_idx) {
                Ok(None) => return slice.len_chars(),
                Ok(Some(boundary)) => {
                    byte_idx = boundary;
                    break;
                }
                Err(GraphemeIncomplete::NextChunk) => {
                    chunk_byte_idx += chunk.len();
                    let (a, _, c, _) = slice.chunk_at_byte(chunk_byte_idx);
                    chunk = a;
                    chunk_char_idx = c;
                }
                Err(GraphemeIncomplete::PreContext(ctx_byte_idx)) => {
                    let ctx_chunk = slice.chunk_at_byte(ctx_byte_idx - 1).0;
                    cursor.provide_context(ctx_chunk, ctx_byte_idx - ctx_chunk.len());
                }
                _ => unreachable!(),
            }
        }
    }

    chunk_char_idx + byte_to_char_idx(chunk, byte_idx - chunk_byte_idx)
}

#[must_use]
#[inline(always)]
pub fn prev_grapheme_boundary(slice: RopeSlice, char_idx: usize) -> usize {
    nth_prev_grapheme_boundary(slice, char_idx, 1)
}

#[must_use]
#[inline(always)]
pub fn next_grapheme_boundary(slice: RopeSlice, char_idx: usize) -> usize {
    nth_next_grapheme_boundary(slice, char_idx, 1)
}

#[cfg(test)]
mod test {
    use ropey::Rope;

    use super::*;

    #[test]
    fn ascii_boundaries_step_by_char() {
        let rope = Rope::from_str("up\ndown");
        let slice = rope.slice(..);

        assert_eq!(next_grapheme_boundary(slice, 0), 1);
        assert_eq!(prev_grapheme_boundary(slice, 3), 2);
        assert_eq!(nth_next_grapheme_boundary(slice, 0, 3), 3);
        assert_eq!(nth_prev_grapheme_boundary(slice, 7, 4), 3);
    }

    #[test]
    fn clusters_are_never_split() {
        // "a" + woman-firefighter zwj sequence (3 chars) + "b"
        let rope = Rope::from_str("a\u{1F469}\u{200D}\u{1F692}b");
        let slice = rope.slice(..);

        assert_eq!(next_grapheme_boundary(slice, 1), 4);
        assert_eq!(prev_grapheme_boundary(slice, 4), 1);
    }

    #[test]
    fn combining_marks_stay_attached() {
        // "e" + combining acute accent
        let rope = Rope::from_str("e\u{0301}x");
        let slice = rope.slice(..);

        assert_eq!(next_grapheme_boundary(slice, 0), 2);
        assert_eq!(prev_grapheme_boundary(slice, 2), 0);
    }

    #[test]
    fn edges_saturate() {
        let rope = Rope::from_str("up");
        let slice = rope.slice(..);

        assert_eq!(prev_grapheme_boundary(slice, 0), 0);
        assert_eq!(next_grapheme_boundary(slice, 2), 2);
        assert_eq!(nth_prev_grapheme_boundary(slice, 1, 10), 0);
        assert_eq!(nth_next_grapheme_boundary(slice, 1, 10), 2);
    }
}

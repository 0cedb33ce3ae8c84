use std::path::PathBuf;

use thumbox_core::Error;
use thumbox_core::gfx::{Color, Display, GlyphAtlas};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn lit_count(display: &Display) -> usize {
    display
        .framebuffer()
        .pixels()
        .iter()
        .filter(|&&p| p == Color::White)
        .count()
}

// ===== Layout =====

#[test]
fn test_two_chars_advance_two_cells() {
    let mut display = Display::new();
    let advance = display.font().advance() as i32;
    let end = display.draw_text("AB", 0, 0, Color::White);
    assert_eq!(end, 2 * advance);
    assert_eq!(end, 12); // 5px glyphs + 1px spacing
}

#[test]
fn test_unknown_char_still_advances() {
    let mut display = Display::new();
    let end = display.draw_text("\u{1}A", 0, 0, Color::White);
    assert_eq!(end, 12);

    // 'A' lands in the second cell, the first cell stays untouched
    assert_eq!(display.get_pixel(6, 1), Some(Color::White));
    for y in 0..7 {
        for x in 0..5 {
            assert_eq!(display.get_pixel(x, y), Some(Color::Black));
        }
    }
}

#[test]
fn test_char_beyond_atlas_advances() {
    let mut display = Display::new();
    let end = display.draw_text("\u{e9}\u{263a}", 3, 0, Color::White);
    assert_eq!(end, 3 + 12);
    assert_eq!(lit_count(&display), 0);
}

// ===== Glyph painting =====

#[test]
fn test_glyph_paints_color_and_background() {
    let mut display = Display::new();
    display.fill(Color::White);
    display.draw_text("A", 1, 1, Color::Black);

    // Column 0 of 'A' is 0x7E: row 0 clear, rows 1-6 set
    assert_eq!(display.get_pixel(1, 1), Some(Color::White));
    for y in 2..8 {
        assert_eq!(display.get_pixel(1, y), Some(Color::Black));
    }
    // Spacing column is not painted
    assert_eq!(display.get_pixel(6, 3), Some(Color::White));
}

#[test]
fn test_space_paints_background_cell() {
    let mut display = Display::new();
    display.fill(Color::White);
    display.draw_text(" ", 0, 0, Color::White);
    for y in 0..7 {
        for x in 0..5 {
            assert_eq!(display.get_pixel(x, y), Some(Color::Black));
        }
    }
    assert_eq!(display.get_pixel(0, 7), Some(Color::White));
}

// ===== Bounds =====

#[test]
fn test_glyph_crossing_right_edge_is_skipped() {
    let mut display = Display::new();
    let width = display.width() as i32;
    let end = display.draw_text("AB", width - 4, 0, Color::White);
    assert_eq!(end, width - 4 + 12);
    assert_eq!(lit_count(&display), 0);
}

#[test]
fn test_later_glyphs_keep_their_cells_after_a_skip() {
    let mut display = Display::new();
    // First glyph hangs off the left edge, second is fully visible
    let end = display.draw_text("II", -3, 0, Color::White);
    assert_eq!(end, 9);
    // Centre column of 'I' (0x7F) of the second glyph at x = 3 + 2
    for y in 0..7 {
        assert_eq!(display.get_pixel(5, y), Some(Color::White));
    }
    assert_eq!(display.get_pixel(-1, 0), None);
    assert_eq!(display.get_pixel(0, 0), Some(Color::Black));
}

#[test]
fn test_glyph_crossing_bottom_edge_is_skipped() {
    let mut display = Display::new();
    let height = display.height() as i32;
    display.draw_text("HI", 0, height - 6, Color::White);
    assert_eq!(lit_count(&display), 0);

    display.draw_text("HI", 0, height - 7, Color::White);
    assert!(lit_count(&display) > 0);
}

#[test]
fn test_last_fitting_glyph_is_drawn() {
    let mut display = Display::new();
    let width = display.width() as i32;
    // 'H' column 4 is 0x7F and lands on the last screen column
    display.draw_text("H", width - 5, 0, Color::White);
    assert_eq!(display.get_pixel(width - 1, 3), Some(Color::White));
}

// ===== Fonts =====

#[test]
fn test_set_font_from_file() {
    let dir = temp_dir("thumbox_text_set_font");
    let path = dir.join("font3x5.bin");
    // Two cells: ' ' blank, '!' a filled 3x5 block
    std::fs::write(&path, [0x00u8, 0x00, 0x00, 0x1F, 0x1F, 0x1F]).unwrap();

    let mut display = Display::new();
    display.set_font(&path, 3, 5, 2).unwrap();
    assert_eq!(display.font().char_count(), 2);
    assert_eq!(display.font().advance(), 5);

    let end = display.draw_text("!!", 0, 0, Color::White);
    assert_eq!(end, 10);
    assert_eq!(lit_count(&display), 2 * 15);
    assert_eq!(display.get_pixel(5, 4), Some(Color::White));
    assert_eq!(display.get_pixel(3, 0), Some(Color::Black));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_one_past_last_glyph_reads_as_blank_cell() {
    let dir = temp_dir("thumbox_text_past_end");
    let path = dir.join("font3x5.bin");
    std::fs::write(&path, [0x1Fu8; 6]).unwrap();

    let mut display = Display::new();
    display.set_font(&path, 3, 5, 1).unwrap();
    display.fill(Color::White);

    // '"' is index 2 == char_count: drawn as an all-background cell
    display.draw_text("\"", 0, 0, Color::White);
    assert_eq!(display.get_pixel(0, 0), Some(Color::Black));
    assert_eq!(display.get_pixel(2, 4), Some(Color::Black));

    // '#' is index 3: skipped
    display.draw_text("#", 10, 0, Color::White);
    assert_eq!(display.get_pixel(10, 0), Some(Color::White));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_failed_set_font_keeps_previous_font() {
    let mut display = Display::new();
    let missing = std::env::temp_dir().join("thumbox_text_missing/font.bin");
    assert!(matches!(
        display.set_font(&missing, 3, 5, 1),
        Err(Error::Io(_))
    ));
    assert!(matches!(
        display.set_font(&missing, 0, 5, 1),
        Err(Error::InvalidFont { .. })
    ));
    assert_eq!(display.font().glyph_width(), 5);
    assert_eq!(display.font().glyph_height(), 7);
}

#[test]
fn test_font_can_be_swapped_repeatedly() {
    let mut display = Display::new();
    display.set_font_atlas(GlyphAtlas::from_bytes(vec![0xFFu8; 8], 2, 8, 0).unwrap());
    assert_eq!(display.draw_text("!", 0, 0, Color::White), 2);
    display.set_font_atlas(GlyphAtlas::builtin());
    assert_eq!(display.draw_text("!", 0, 0, Color::White), 6);
}

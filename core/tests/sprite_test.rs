use thumbox_core::gfx::{Color, Display, Sprite, decode};

const PADDLE: [u8; 6] = [
    0b0111_1110,
    0b1111_1111,
    0b1111_1111,
    0b0111_1110,
    0b1111_1111,
    0b0111_1110,
];

fn column(display: &Display, x: i32, rows: std::ops::Range<i32>) -> Vec<Color> {
    rows.map(|y| display.get_pixel(x, y).unwrap()).collect()
}

// ===== Decoding =====

#[test]
fn test_decode_is_deterministic() {
    let first = decode(&PADDLE, 2, 6, None);
    let second = decode(&PADDLE, 2, 6, None);
    assert_eq!(first, second);
    assert!(first.iter().all(Option::is_some));
}

// ===== Opaque sprites =====

#[test]
fn test_paddle_on_blank_screen() {
    let mut display = Display::new();
    let paddle = Sprite::new(2, 6, &PADDLE[..2]);
    display.draw_sprite(&paddle);

    use Color::{Black as B, White as W};
    // Column 0 is 0b0111_1110: top row clear, rows 1-5 set
    assert_eq!(column(&display, 0, 0..8), [B, W, W, W, W, W, B, B]);
    // Column 1 is 0xFF, cut off at height 6
    assert_eq!(column(&display, 1, 0..8), [W, W, W, W, W, W, B, B]);
    assert_eq!(column(&display, 2, 0..8), [B; 8]);
}

#[test]
fn test_opaque_sprite_paints_background_bits() {
    let mut display = Display::new();
    display.fill(Color::White);
    display.draw_sprite(&Sprite::new(2, 6, &PADDLE[..2]).at(10, 10));

    assert_eq!(display.get_pixel(10, 10), Some(Color::Black));
    assert_eq!(display.get_pixel(10, 11), Some(Color::White));
    // Padding rows 6-7 of the strip are not part of the sprite
    assert_eq!(display.get_pixel(10, 16), Some(Color::White));
    assert_eq!(display.get_pixel(10, 17), Some(Color::White));
}

#[test]
fn test_short_buffer_is_zero_padded() {
    let mut display = Display::new();
    display.fill(Color::White);
    // 8x8 needs 8 bytes; only the first column is supplied
    display.draw_sprite(&Sprite::new(8, 8, [0xFFu8]));

    for y in 0..8 {
        assert_eq!(display.get_pixel(0, y), Some(Color::White));
        for x in 1..8 {
            assert_eq!(display.get_pixel(x, y), Some(Color::Black), "({x}, {y})");
        }
    }
}

#[test]
fn test_sprite_clips_at_right_edge() {
    let mut display = Display::new();
    let width = display.width() as i32;
    display.draw_sprite(&Sprite::new(8, 8, [0xFFu8; 8]).at(width - 1, 0));

    assert_eq!(column(&display, width - 1, 0..8), [Color::White; 8]);
    assert_eq!(column(&display, width - 2, 0..8), [Color::Black; 8]);
}

#[test]
fn test_sprite_clips_at_negative_origin() {
    let mut display = Display::new();
    display.draw_sprite(&Sprite::new(8, 8, [0xFFu8; 8]).at(-6, -4));

    let lit: usize = display
        .framebuffer()
        .pixels()
        .iter()
        .filter(|&&p| p == Color::White)
        .count();
    assert_eq!(lit, 2 * 4);
    assert_eq!(display.get_pixel(1, 3), Some(Color::White));
    assert_eq!(display.get_pixel(2, 0), Some(Color::Black));
}

#[test]
fn test_sprite_fully_off_screen() {
    let mut display = Display::new();
    display.draw_sprite(&Sprite::new(8, 8, [0xFFu8; 8]).at(500, -500));
    assert!(display.framebuffer().pixels().iter().all(|&p| p == Color::Black));
}

// ===== Color-key =====

#[test]
fn test_black_key_leaves_destination_unchanged() {
    let mut display = Display::new();
    display.fill(Color::White);
    let sprite = Sprite::new(1, 8, [0b0000_1111u8]).with_key(Color::Black);
    display.draw_sprite(&sprite);

    // Set bits paint white, clear bits are transparent over white
    assert_eq!(column(&display, 0, 0..8), [Color::White; 8]);
}

#[test]
fn test_white_key_leaves_destination_unchanged() {
    let mut display = Display::new();
    display.fill(Color::White);
    let sprite = Sprite::new(1, 8, [0b0000_1111u8]).with_key(Color::White);
    display.draw_sprite(&sprite);

    use Color::{Black as B, White as W};
    assert_eq!(column(&display, 0, 0..8), [W, W, W, W, B, B, B, B]);
}

#[test]
fn test_blit_matches_draw_sprite() {
    let mut a = Display::new();
    let mut b = Display::new();
    a.fill(Color::White);
    b.fill(Color::White);

    a.blit(&PADDLE, 3, 4, 6, 8, Some(Color::Black), true, false);
    b.draw_sprite(
        &Sprite::new(6, 8, PADDLE)
            .at(3, 4)
            .with_key(Color::Black)
            .with_mirror(true, false),
    );
    assert_eq!(a.framebuffer(), b.framebuffer());
}

#[test]
fn test_mirror_flags_do_not_change_output() {
    let mut plain = Display::new();
    let mut mirrored = Display::new();
    plain.draw_sprite(&Sprite::new(6, 8, PADDLE));
    mirrored.draw_sprite(&Sprite::new(6, 8, PADDLE).with_mirror(true, true));
    assert_eq!(plain.framebuffer(), mirrored.framebuffer());
}

#[test]
fn test_drawing_does_not_move_sprite() {
    let mut display = Display::new();
    let sprite = Sprite::new(2, 6, &PADDLE[..2]).at(5, 7);
    display.draw_sprite(&sprite);
    assert_eq!((sprite.x, sprite.y), (5, 7));
    assert_eq!((sprite.width(), sprite.height()), (2, 6));
}

#[test]
fn test_sprites_at_i32_limits_draw_nothing() {
    let mut display = Display::new();
    for (x, y) in [
        (i32::MAX - 2, 0),
        (0, i32::MAX - 2),
        (i32::MAX, i32::MAX),
        (i32::MIN, i32::MIN),
    ] {
        display.draw_sprite(&Sprite::new(8, 8, [0xFFu8; 8]).at(x, y));
        display.blit(&[0xFF; 8], x, y, 8, 8, None, false, false);
    }
    assert!(display.framebuffer().pixels().iter().all(|&p| p == Color::Black));
}

#[test]
fn test_masked_sprite_at_i32_limit_draws_nothing() {
    let mut display = Display::new();
    let sprite = Sprite::new(8, 8, [0xFFu8; 8]).at(i32::MAX - 2, 0);
    let mask = Sprite::new(8, 8, [0xFFu8; 8]).with_key(Color::Black);

    display.draw_sprite_with_mask(&sprite, &mask).unwrap();
    display.blit_with_mask(&[0xFF; 8], i32::MAX, 0, 8, 8, None, false, false, &[0xFF; 8]);
    assert!(display.framebuffer().pixels().iter().all(|&p| p == Color::Black));
}

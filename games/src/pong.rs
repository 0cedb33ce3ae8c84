use thumbox_core::console::{Game, Thumby};
use thumbox_core::device::Button;
use thumbox_core::error::Result;
use thumbox_core::gfx::{Color, DISPLAY_HEIGHT, DISPLAY_WIDTH, Sprite};

use crate::registry::GameEntry;

// ---------------------------------------------------------------------------
// Playfield constants
// ---------------------------------------------------------------------------

pub const PADDLE_WIDTH: i32 = 2;
pub const PADDLE_HEIGHT: i32 = 6;
pub const BALL_SIZE: i32 = 8;
pub const PADDLE_SPEED: i32 = 1;
pub const BALL_SPEED: i32 = 1;

const WIDTH: i32 = DISPLAY_WIDTH as i32;
const HEIGHT: i32 = DISPLAY_HEIGHT as i32;

const PADDLE_MAP: [u8; 6] = [
    0b0111_1110,
    0b1111_1111,
    0b1111_1111,
    0b0111_1110,
    0b1111_1111,
    0b0111_1110,
];

const BALL_MAP: [u8; 8] = [
    0b0011_1100,
    0b0111_1110,
    0b1111_1111,
    0b1110_0111,
    0b1110_0111,
    0b1111_1111,
    0b0111_1110,
    0b0011_1100,
];

/// Center net: one column, every other 8-row band lit in its lower half.
const NET_MAP: [u8; 5] = [0b1111_0000, 0, 0b1111_0000, 0, 0b1111_0000];

/// Two-player pong. Up/Down move the left paddle, A/B the right one.
pub struct Pong {
    player1: Sprite,
    player2: Sprite,
    ball: Sprite,
    net: Sprite,
    ball_dx: i32,
    ball_dy: i32,
    scores: [u32; 2],
}

impl Pong {
    pub fn new() -> Self {
        let paddle_y = (HEIGHT - PADDLE_HEIGHT) / 2;
        let mut pong = Self {
            player1: Sprite::new(PADDLE_WIDTH as usize, PADDLE_HEIGHT as usize, PADDLE_MAP)
                .at(0, paddle_y),
            player2: Sprite::new(PADDLE_WIDTH as usize, PADDLE_HEIGHT as usize, PADDLE_MAP)
                .at(WIDTH - PADDLE_WIDTH, paddle_y),
            ball: Sprite::new(BALL_SIZE as usize, BALL_SIZE as usize, BALL_MAP),
            net: Sprite::new(1, HEIGHT as usize, NET_MAP).at(WIDTH / 2, 0),
            ball_dx: BALL_SPEED,
            ball_dy: BALL_SPEED,
            scores: [0; 2],
        };
        pong.reset_ball();
        pong
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn ball_position(&self) -> (i32, i32) {
        (self.ball.x, self.ball.y)
    }

    pub fn paddle_positions(&self) -> (i32, i32) {
        (self.player1.y, self.player2.y)
    }

    fn reset_ball(&mut self) {
        self.ball.set_position((WIDTH - BALL_SIZE) / 2, (HEIGHT - BALL_SIZE) / 2);
        self.ball_dx = BALL_SPEED;
        self.ball_dy = BALL_SPEED;
    }

    fn update_paddles(&mut self, thumby: &Thumby) {
        let buttons = &thumby.buttons;
        let bottom = HEIGHT - PADDLE_HEIGHT;

        move_paddle(
            &mut self.player1,
            buttons.pressed(Button::Up),
            buttons.pressed(Button::Down),
            bottom,
        );
        move_paddle(
            &mut self.player2,
            buttons.pressed(Button::A),
            buttons.pressed(Button::B),
            bottom,
        );
    }

    fn update_ball(&mut self) {
        let (x, y) = (self.ball.x + self.ball_dx, self.ball.y + self.ball_dy);
        self.ball.set_position(x, y);

        if y <= 0 || y >= HEIGHT - BALL_SIZE {
            self.ball_dy = -self.ball_dy;
        }

        let p1 = self.player1.y;
        let p2 = self.player2.y;
        if x <= PADDLE_WIDTH && (p1..=p1 + PADDLE_HEIGHT).contains(&y) {
            self.ball_dx = -self.ball_dx;
        } else if x >= WIDTH - PADDLE_WIDTH - BALL_SIZE
            && (p2..=p2 + PADDLE_HEIGHT).contains(&y)
        {
            self.ball_dx = -self.ball_dx;
        }
    }

    /// Score a point if the ball reached either goal line, then re-serve.
    fn check_goal(&mut self) {
        let x = self.ball.x;
        if x <= 0 {
            self.scores[1] += 1;
        } else if x >= WIDTH - BALL_SIZE {
            self.scores[0] += 1;
        } else {
            return;
        }
        self.reset_ball();
    }
}

fn move_paddle(paddle: &mut Sprite, up: bool, down: bool, bottom: i32) {
    if up && paddle.y > 0 {
        paddle.y -= PADDLE_SPEED;
    } else if down && paddle.y < bottom {
        paddle.y += PADDLE_SPEED;
    }
}

impl Default for Pong {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Pong {
    fn update(&mut self, thumby: &mut Thumby) {
        thumby.display.fill(Color::Black);
        thumby.display.draw_sprite(&self.net);

        self.update_paddles(thumby);
        self.update_ball();
        self.check_goal();

        let display = &mut thumby.display;
        display.draw_sprite(&self.player1);
        display.draw_sprite(&self.player2);
        display.draw_sprite(&self.ball);
        display.draw_text(&self.scores[0].to_string(), WIDTH / 4, 2, Color::White);
        display.draw_text(&self.scores[1].to_string(), WIDTH * 3 / 4, 2, Color::White);
        display.update();
    }
}

// ---------------------------------------------------------------------------
// Game registry
// ---------------------------------------------------------------------------

fn create_game(thumby: &mut Thumby) -> Result<Box<dyn Game>> {
    thumby.display.set_fps(60);
    Ok(Box::new(Pong::new()))
}

inventory::submit! {
    GameEntry::new("pong", "Pong", create_game)
}

use macroquad::prelude::*;

use crate::apple::Apple;
use crate::clock::TickClock;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::geometry::Grid;
use crate::input::InputSnapshot;
use crate::snake::{Collisions, Snake};

const BACKGROUND: Color = Color::new(0.067, 0.067, 0.067, 1.0); // #111111
const GRID_LINE: Color = WHITE;

/// Owns the loop: one input sample, one wait, one redraw and one snake update per tick.
pub struct GameSession {
    grid: Grid,
    input: InputSnapshot,
    clock: TickClock,
    snake: Snake,
    apple: Apple,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid();
        let snake = Snake::new(grid);
        let mut apple = Apple::new(&grid);
        if !grid.contains(&apple.rect) || snake.occupies(&apple.rect) {
            apple.relocate(snake.segments(), &grid);
        }
        Ok(Self {
            grid,
            input: InputSnapshot::default(),
            clock: TickClock::new(config.tick_interval()),
            snake,
            apple,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    pub fn update_input(&mut self) {
        self.input = InputSnapshot::poll();
    }

    /// Replaces the current snapshot without touching the window.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Advances the snake one tick with the current snapshot.
    pub fn step(&mut self) -> Collisions {
        let length = self.snake.len();
        let hits = self.snake.update(&self.input, &mut self.apple);
        if hits.ate_apple {
            log::debug!("Apple eaten, length {}", length + 1);
        }
        if hits.hit_self {
            log::info!("Snake bit itself, resetting");
        }
        hits
    }

    pub async fn run(mut self) {
        prevent_quit();
        macroquad::rand::srand(macroquad::miniquad::date::now() as u64);
        log::info!(
            "Starting {}x{} grid, cell {}px, {:.0} ticks/s",
            self.grid.columns(),
            self.grid.rows(),
            self.grid.cell_width,
            1.0 / self.clock.interval()
        );

        loop {
            self.update_input();
            if self.input.quit {
                break;
            }
            self.clock.wait();

            clear_background(BACKGROUND);
            self.draw_grid_lines();
            self.apple.draw();

            self.step();
            self.snake.draw();

            next_frame().await;
        }

        log::info!("Quit requested, final length {}", self.snake.len());
    }

    pub fn draw_grid_lines(&self) {
        let (w, h) = (self.grid.width as f32, self.grid.height as f32);
        for x in (0..self.grid.width).step_by(self.grid.cell_width as usize) {
            draw_line(x as f32, 0.0, x as f32, h, 1.0, GRID_LINE);
        }
        for y in (0..self.grid.height).step_by(self.grid.cell_width as usize) {
            draw_line(0.0, y as f32, w, y as f32, 1.0, GRID_LINE);
        }
    }
}

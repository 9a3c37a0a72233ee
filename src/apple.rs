use macroquad::prelude::*;
use macroquad::rand::ChooseRandom;

use crate::geometry::{Grid, Rect};
use crate::snake::Segment;

pub const APPLE_COLOR: Color = Color::new(1.0, 0.6, 0.133, 1.0); // #ff9922

/// Cell the first apple spawns in, counted in cells from the origin.
const START_CELL: (i32, i32) = (2, 2);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apple {
    pub rect: Rect,
    pub color: Color,
}

impl Apple {
    pub fn new(grid: &Grid) -> Self {
        Self {
            rect: grid.cell(START_CELL.0, START_CELL.1),
            color: APPLE_COLOR,
        }
    }

    pub fn at(rect: Rect) -> Self {
        Self {
            rect,
            color: APPLE_COLOR,
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    /// Moves to a uniformly chosen cell that no segment covers.
    ///
    /// Returns `false` and stays in place when the snake covers every cell.
    pub fn relocate(&mut self, segments: &[Segment], grid: &Grid) -> bool {
        let free: Vec<Rect> = grid
            .cells()
            .filter(|cell| !segments.iter().any(|s| s.overlaps(cell)))
            .collect();

        match free.choose() {
            Some(cell) => {
                self.rect = *cell;
                true
            }
            None => {
                log::warn!("No free cell left for the apple");
                false
            }
        }
    }

    pub fn draw(&self) {
        let c = self.rect.center();
        draw_circle(c.x, c.y, (self.rect.size / 2) as f32, self.color);
    }
}

use macroquad::prelude::*;

use crate::apple::Apple;
use crate::direction::Direction;
use crate::geometry::{Grid, Rect};
use crate::input::InputSnapshot;

pub const HEAD_COLOR: Color = Color::new(0.0, 1.0, 0.4, 1.0); // #00ff66
pub const BODY_COLOR: Color = RED;

const INITIAL_LENGTH: usize = 3;

/// Order in which simultaneous direction keys are considered.
const TURN_PRIORITY: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub rect: Rect,
    pub color: Color,
}

impl Segment {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    pub fn draw(&self) {
        let r = self.rect.to_draw_rect();
        draw_rectangle(r.x, r.y, r.w, r.h, self.color);
    }
}

/// What a collision check ran into this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collisions {
    pub ate_apple: bool,
    pub hit_self: bool,
}

pub struct Snake {
    segments: Vec<Segment>,
    heading: Direction,
    grid: Grid,
}

impl Snake {
    pub fn new(grid: Grid) -> Self {
        let mut snake = Self {
            segments: Vec::with_capacity(INITIAL_LENGTH),
            heading: Direction::Right,
            grid,
        };
        snake.clear();
        snake
    }

    /// Builds a snake from explicit segment positions, head first.
    /// An empty slice yields the initial snake.
    pub fn from_cells(grid: Grid, cells: &[Rect], heading: Direction) -> Self {
        if cells.is_empty() {
            return Self::new(grid);
        }
        let segments = cells
            .iter()
            .enumerate()
            .map(|(i, rect)| {
                let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
                Segment::new(*rect, color)
            })
            .collect();
        Self {
            segments,
            heading,
            grid,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> Rect {
        self.segments[0].rect
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn occupies(&self, rect: &Rect) -> bool {
        self.segments.iter().any(|s| s.overlaps(rect))
    }

    /// Appends a segment one cell behind the tail, opposite the heading.
    pub fn increase(&mut self) {
        let tail = self.segments[self.segments.len() - 1].rect;
        let (dx, dy) = self.heading.delta();
        let step = self.grid.cell_width;
        let (x, y) = self.grid.wrap(tail.x - step * dx, tail.y - step * dy);
        self.segments.push(Segment::new(Rect::new(x, y, step), BODY_COLOR));
    }

    /// Each segment takes its predecessor's place; the head steps one cell and wraps.
    pub fn move_forward(&mut self) {
        for i in (1..self.segments.len()).rev() {
            let prev = self.segments[i - 1].rect;
            self.segments[i].rect.x = prev.x;
            self.segments[i].rect.y = prev.y;
        }
        let (dx, dy) = self.heading.delta();
        let step = self.grid.cell_width;
        let head = &mut self.segments[0].rect;
        let (x, y) = self.grid.wrap(head.x + step * dx, head.y + step * dy);
        head.x = x;
        head.y = y;
    }

    /// Takes the first pressed key that does not reverse the heading.
    pub fn change_direction(&mut self, input: &InputSnapshot) {
        if let Some(dir) = TURN_PRIORITY
            .into_iter()
            .find(|dir| input.pressed(*dir) && *dir != self.heading.opposite())
        {
            self.heading = dir;
        }
    }

    pub fn check_collision(&mut self, apple: &mut Apple) -> Collisions {
        let mut hits = Collisions::default();

        if apple.overlaps(&self.head()) {
            self.increase();
            apple.relocate(&self.segments, &self.grid);
            hits.ate_apple = true;
        }

        let head = self.head();
        if self.segments[1..].iter().any(|s| s.overlaps(&head)) {
            self.clear();
            hits.hit_self = true;
        }

        hits
    }

    /// Back to a three-segment snake at the center cell heading right.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.segments.push(Segment::new(self.grid.center_cell(), HEAD_COLOR));
        self.heading = Direction::Right;
        for _ in 1..INITIAL_LENGTH {
            self.increase();
        }
    }

    pub fn update(&mut self, input: &InputSnapshot, apple: &mut Apple) -> Collisions {
        let hits = self.check_collision(apple);
        self.change_direction(input);
        self.move_forward();
        hits
    }

    pub fn draw(&self) {
        for segment in self.segments.iter().rev() {
            segment.draw();
        }
    }
}

use macroquad::prelude::{Rect as DrawRect, Vec2, vec2};

/// Axis-aligned square in integer pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }

    /// Strict overlap: squares sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.size
            && other.x < self.x + self.size
            && self.y < other.y + other.size
            && other.y < self.y + self.size
    }

    pub fn center(&self) -> Vec2 {
        let half = self.size as f32 / 2.0;
        vec2(self.x as f32 + half, self.y as f32 + half)
    }

    pub fn to_draw_rect(self) -> DrawRect {
        DrawRect::new(
            self.x as f32,
            self.y as f32,
            self.size as f32,
            self.size as f32,
        )
    }
}

/// Pixel surface divided into square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_width: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_width: i32) -> Self {
        Self {
            width,
            height,
            cell_width,
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_width
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_width
    }

    pub fn cell(&self, column: i32, row: i32) -> Rect {
        Rect::new(column * self.cell_width, row * self.cell_width, self.cell_width)
    }

    pub fn center_cell(&self) -> Rect {
        self.cell(self.columns() / 2, self.rows() / 2)
    }

    /// Reduces a pixel position onto the surface, re-entering from the opposite edge.
    pub fn wrap(&self, x: i32, y: i32) -> (i32, i32) {
        (x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0
            && rect.y >= 0
            && rect.x + rect.size <= self.width
            && rect.y + rect.size <= self.height
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |col| self.cell(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict() {
        let a = Rect::new(60, 60, 60);
        assert!(a.overlaps(&Rect::new(60, 60, 60)));
        assert!(a.overlaps(&Rect::new(90, 90, 60)));
        assert!(!a.overlaps(&Rect::new(120, 60, 60)));
        assert!(!a.overlaps(&Rect::new(0, 60, 60)));
        assert!(!a.overlaps(&Rect::new(60, 120, 60)));
    }

    #[test]
    fn grid_dimensions() {
        let grid = Grid::new(1080, 600, 60);
        assert_eq!(grid.columns(), 18);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.center_cell(), Rect::new(540, 300, 60));
        assert_eq!(grid.cells().count(), 180);
    }

    #[test]
    fn wrap_is_toroidal() {
        let grid = Grid::new(1080, 600, 60);
        assert_eq!(grid.wrap(1080, 300), (0, 300));
        assert_eq!(grid.wrap(-60, 300), (1020, 300));
        assert_eq!(grid.wrap(540, 600), (540, 0));
        assert_eq!(grid.wrap(540, -60), (540, 540));
    }

    #[test]
    fn containment() {
        let grid = Grid::new(1080, 600, 60);
        assert!(grid.contains(&Rect::new(1020, 540, 60)));
        assert!(!grid.contains(&Rect::new(1080, 0, 60)));
        assert!(!grid.contains(&Rect::new(-60, 0, 60)));
    }

    #[test]
    fn center_of_cell() {
        let c = Rect::new(120, 120, 60).center();
        assert_eq!(c, vec2(150.0, 150.0));
    }
}

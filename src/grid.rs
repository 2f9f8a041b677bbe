/// A single grid coordinate. Signed so a head that left the board is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Fixed-size board. Cells with `0 <= x < width` and `0 <= y < height` are inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Derives the board from a window size in pixels, flooring partial cells.
    /// Returns `None` for a zero cell size or a board that would not fit in `u16`.
    pub fn from_window(window_width: u32, window_height: u32, cell_size: u32) -> Option<Self> {
        if cell_size == 0 {
            return None;
        }
        let width = u16::try_from(window_width / cell_size).ok()?;
        let height = u16::try_from(window_height / cell_size).ok()?;
        Some(Self::new(width, height))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub fn center(&self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.x) && (0..i32::from(self.height)).contains(&cell.y)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

use crate::core::Vec2;

/// A rectangle anchored at row 0, column 0 with non-negative extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub rows: i32,
    pub cols: i32,
}

impl BoundsOriginRoot {
    pub fn new(rows: i32, cols: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { rows, cols }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.rows && pos.j >= 0 && pos.j < self.cols
    }

    pub fn area(&self) -> i32 {
        self.rows * self.cols
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |i| (0..cols).map(move |j| Vec2 { i, j }))
    }
}

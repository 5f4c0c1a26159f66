use crate::core::bounds::BoundsOriginRoot;
use crate::core::Vec2;

/// Row-major storage for one value per cell of a rectangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid from rows that are already known to share one length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let bounds = BoundsOriginRoot::new(rows.len() as i32, cols as i32);
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), bounds.area() as usize, "rows must be rectangular");
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.bounds.cols + index.j) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.bounds.cols + index.j) as usize]
    }
}

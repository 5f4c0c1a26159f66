use crate::core::{Grid, Occupant, Terrain};

impl Grid {
    /// Solved when blocks sit on exactly the target cells: no bare target and no stray block.
    pub fn is_solved(&self) -> bool {
        self.positions().all(|pos| {
            let has_block = self.occupant_at(&pos) == Occupant::Block;
            has_block == (self.terrain_at(&pos) == Terrain::Target)
        })
    }

    pub fn count_blocks_on_targets(&self) -> usize {
        self.positions()
            .filter(|pos| {
                self.occupant_at(pos) == Occupant::Block && self.terrain_at(pos) == Terrain::Target
            })
            .count()
    }
}

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Direction, Occupant, Terrain, Vec2};

/// The live board. Terrain and occupants are kept in two parallel matrices;
/// only the occupant layer can be written once the grid exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    terrain: BoundedGrid<Terrain>,
    occupants: BoundedGrid<Occupant>,
}

impl Grid {
    /// Both layers must cover the same rectangle.
    pub fn new(terrain: BoundedGrid<Terrain>, occupants: BoundedGrid<Occupant>) -> Grid {
        debug_assert_eq!(
            terrain.size(),
            occupants.size(),
            "terrain and occupant layers must have the same size"
        );
        Grid { terrain, occupants }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.terrain.size()
    }

    pub fn rows(&self) -> usize {
        self.bounds().rows as usize
    }

    pub fn cols(&self) -> usize {
        self.bounds().cols as usize
    }

    pub fn in_bounds(&self, pos: &Vec2) -> bool {
        self.terrain.contains(pos)
    }

    pub fn terrain_at(&self, pos: &Vec2) -> Terrain {
        self.terrain[pos]
    }

    pub fn occupant_at(&self, pos: &Vec2) -> Occupant {
        self.occupants[pos]
    }

    pub fn set_occupant(&mut self, pos: &Vec2, occupant: Occupant) {
        self.occupants[pos] = occupant;
    }

    /// The adjacent cell in `direction`, or `None` past the edge of the board.
    pub fn neighbor(&self, pos: &Vec2, direction: Direction) -> Option<Vec2> {
        let next = *pos + direction.delta();
        self.in_bounds(&next).then_some(next)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        self.bounds().iter()
    }

    pub fn count_terrain(&self, terrain: Terrain) -> usize {
        self.terrain.iter().filter(|&&t| t == terrain).count()
    }
}

// Inspection helpers for invariant checks in tests.
#[cfg(test)]
impl Grid {
    pub fn terrain_layer(&self) -> &BoundedGrid<Terrain> {
        &self.terrain
    }

    pub fn count_occupants(&self, occupant: Occupant) -> usize {
        self.occupants.iter().filter(|&&o| o == occupant).count()
    }

    pub fn find_actor(&self) -> Option<Vec2> {
        self.positions()
            .find(|pos| self.occupant_at(pos) == Occupant::Actor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn three_by_three() -> Grid {
        use Terrain::*;
        let terrain = BoundedGrid::from_rows(vec![
            vec![Wall, Wall, Wall],
            vec![Wall, Target, Empty],
            vec![Wall, Wall, Wall],
        ]);
        let mut occupants = BoundedGrid::from_rows(vec![vec![Occupant::Empty; 3]; 3]);
        occupants[&Vec2::new(1, 2)] = Occupant::Actor;
        Grid::new(terrain, occupants)
    }

    #[test]
    fn test_neighbor_does_not_wrap() {
        let grid = three_by_three();

        assert_eq!(grid.neighbor(&Vec2::new(1, 2), Direction::Right), None);
        assert_eq!(grid.neighbor(&Vec2::new(0, 0), Direction::Up), None);
        assert_eq!(grid.neighbor(&Vec2::new(0, 0), Direction::Left), None);
        assert_eq!(grid.neighbor(&Vec2::new(2, 2), Direction::Down), None);
        assert_eq!(
            grid.neighbor(&Vec2::new(1, 2), Direction::Left),
            Some(Vec2::new(1, 1))
        );
    }

    #[test]
    fn test_set_occupant_leaves_terrain_alone() {
        let mut grid = three_by_three();
        let terrain_before = grid.terrain_layer().clone();

        grid.set_occupant(&Vec2::new(1, 1), Occupant::Block);

        assert_eq!(grid.occupant_at(&Vec2::new(1, 1)), Occupant::Block);
        assert_eq!(grid.terrain_at(&Vec2::new(1, 1)), Terrain::Target);
        assert_eq!(grid.terrain_layer(), &terrain_before);
    }

    #[test]
    fn test_counts_and_actor_lookup() {
        let grid = three_by_three();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.count_terrain(Terrain::Wall), 7);
        assert_eq!(grid.count_occupants(Occupant::Actor), 1);
        assert_eq!(grid.find_actor(), Some(Vec2::new(1, 2)));
    }

    #[test]
    fn test_layers_share_bounds() {
        let grid = three_by_three();
        assert_eq!(grid.bounds(), BoundsOriginRoot::new(3, 3));
        assert_eq!(grid.positions().count(), 9);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "terrain and occupant layers must have the same size")]
    fn test_mismatched_layers_rejected() {
        let terrain = BoundedGrid::from_rows(vec![vec![Terrain::Empty; 3]; 2]);
        let occupants = BoundedGrid::from_rows(vec![vec![Occupant::Empty; 2]; 2]);
        Grid::new(terrain, occupants);
    }
}

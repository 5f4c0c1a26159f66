use crate::core::{Occupant, Terrain};

/// What a single template character stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub terrain: Terrain,
    pub occupant: Occupant,
}

const fn entry(terrain: Terrain, occupant: Occupant) -> Option<LegendEntry> {
    Some(LegendEntry { terrain, occupant })
}

pub fn legend_entry(ch: char) -> Option<LegendEntry> {
    match ch {
        ' ' => entry(Terrain::Empty, Occupant::Empty),
        '=' | '|' | '+' => entry(Terrain::Wall, Occupant::Empty),
        '*' => entry(Terrain::Target, Occupant::Empty),
        'X' => entry(Terrain::Empty, Occupant::Block),
        'o' => entry(Terrain::Empty, Occupant::Actor),
        _ => None,
    }
}

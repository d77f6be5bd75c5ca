use serde::{Deserialize, Serialize};

use crate::position::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileContent {
    Empty,
    Wall,
    Rat,
    Cat,
    Cheese,
}

impl TileContent {
    /// Parsing is permissive: anything unrecognised is an empty floor.
    pub fn from_glyph(glyph: char) -> Self {
        match glyph {
            '#' => TileContent::Wall,
            'S' => TileContent::Rat,
            'C' => TileContent::Cat,
            'F' => TileContent::Cheese,
            _ => TileContent::Empty,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TileContent::Empty => '.',
            TileContent::Wall => '#',
            TileContent::Rat => 'S',
            TileContent::Cat => 'C',
            TileContent::Cheese => 'F',
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A small set of [`TileContent`] tags, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentSet(u8);

impl ContentSet {
    pub const NONE: ContentSet = ContentSet(0);

    pub const fn of(contents: &[TileContent]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < contents.len() {
            bits |= contents[i].bit();
            i += 1;
        }
        ContentSet(bits)
    }

    pub const fn contains(self, content: TileContent) -> bool {
        self.0 & content.bit() != 0
    }
}

/// One grid cell. Its position is fixed; only the content changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    position: Coordinates,
    pub content: TileContent,
}

impl Tile {
    pub(crate) fn new(position: Coordinates, content: TileContent) -> Self {
        Self { position, content }
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn glyph(&self) -> char {
        self.content.glyph()
    }
}

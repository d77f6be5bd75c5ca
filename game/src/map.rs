use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::position::Coordinates;
use crate::tile::{Tile, TileContent};

mod parse;
mod rules;

pub use rules::MoveEffect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    Playing,
    Over,
}

/// The board: a row-major grid of tiles plus the entity lists that index into it.
///
/// `rats`, `cats` and `cheese` hold grid indices in discovery order and always
/// agree with the content of the tiles they point at. `exits` is fixed once the
/// map is parsed.
#[derive(Clone, Debug)]
pub struct Map {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    rats: Vec<usize>,
    cats: Vec<usize>,
    cheese: Vec<usize>,
    exits: Vec<usize>,
}

/// Serializable summary of a map's entity lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub width: usize,
    pub height: usize,
    pub rats: Vec<Coordinates>,
    pub cats: Vec<Coordinates>,
    pub cheese: Vec<Coordinates>,
    pub exits: Vec<Coordinates>,
    pub state: PlayState,
}

impl Map {
    pub(crate) fn new(tiles: Vec<Tile>, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0);
        assert_eq!(tiles.len(), width * height);
        let indices_of = |content: TileContent| -> Vec<usize> {
            tiles
                .iter()
                .enumerate()
                .filter_map(|(index, tile)| (tile.content == content).then_some(index))
                .collect()
        };
        let rats = indices_of(TileContent::Rat);
        let cats = indices_of(TileContent::Cat);
        let cheese = indices_of(TileContent::Cheese);
        let mut map = Self {
            tiles,
            width,
            height,
            rats,
            cats,
            cheese,
            exits: Vec::new(),
        };
        map.exits = map.exit_indices();
        map
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, the order [`Coordinates::in_bounds`] expects.
    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub(crate) fn index_of(&self, pos: Coordinates) -> Option<usize> {
        pos.in_bounds(self.bounds())
            .then(|| pos.row as usize * self.width + pos.col as usize)
    }

    pub fn get_tile_by_coordinates(&self, pos: Coordinates) -> Option<&Tile> {
        self.index_of(pos).map(|index| &self.tiles[index])
    }

    /// Content at `pos`, with everything outside the grid reading as wall.
    pub fn content_at(&self, pos: Coordinates) -> TileContent {
        self.get_tile_by_coordinates(pos)
            .map_or(TileContent::Wall, |tile| tile.content)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    fn tiles_at<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a Tile> + 'a {
        indices.iter().map(|&index| &self.tiles[index])
    }

    pub fn rats(&self) -> impl Iterator<Item = &Tile> {
        self.tiles_at(&self.rats)
    }

    pub fn cats(&self) -> impl Iterator<Item = &Tile> {
        self.tiles_at(&self.cats)
    }

    pub fn cheese(&self) -> impl Iterator<Item = &Tile> {
        self.tiles_at(&self.cheese)
    }

    pub fn exits(&self) -> impl Iterator<Item = &Tile> {
        self.tiles_at(&self.exits)
    }

    pub fn is_exit(&self, pos: Coordinates) -> bool {
        self.index_of(pos)
            .is_some_and(|index| self.exits.contains(&index))
    }

    /// Border tiles that are currently empty: every row of the first and last
    /// columns, and the first and last rows of the columns between them.
    pub fn find_exits(&self) -> Vec<Coordinates> {
        self.exit_indices()
            .into_iter()
            .map(|index| self.tiles[index].position())
            .collect()
    }

    fn exit_indices(&self) -> Vec<usize> {
        let last_row = self.height - 1;
        let last_col = self.width - 1;
        let mut exits = Vec::new();
        for col in 0..self.width {
            let rows: Vec<usize> = if col == 0 || col == last_col {
                (0..self.height).collect()
            } else if last_row == 0 {
                vec![0]
            } else {
                vec![0, last_row]
            };
            for row in rows {
                let index = row * self.width + col;
                if self.tiles[index].content == TileContent::Empty {
                    exits.push(index);
                }
            }
        }
        exits
    }

    pub fn actor_count(&self) -> usize {
        self.rats.len() + self.cats.len()
    }

    /// 1-based lookup over the live rats followed by the live cats.
    pub fn get_current_tile_by_rank(&self, rank: usize) -> Result<&Tile, MapError> {
        let index = rank
            .checked_sub(1)
            .and_then(|i| self.rats.iter().chain(&self.cats).nth(i))
            .ok_or(MapError::RankOutOfRange {
                rank,
                actors: self.actor_count(),
            })?;
        Ok(&self.tiles[*index])
    }

    pub fn play_state(&self) -> PlayState {
        if self.rats.is_empty() {
            PlayState::Over
        } else {
            PlayState::Playing
        }
    }

    pub fn to_text(&self) -> String {
        self.tiles
            .chunks(self.width)
            .map(|row| row.iter().map(Tile::glyph).collect::<String>() + "\n")
            .collect()
    }

    pub fn to_csv(&self) -> String {
        let mut lines = Vec::new();
        for row in self.tiles.chunks(self.width) {
            let fields: Vec<String> = row.iter().map(|tile| tile.glyph().to_string()).collect();
            lines.push(fields.join(",") + "\n");
        }
        lines.join("")
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            width: self.width,
            height: self.height,
            rats: self.rats().map(Tile::position).collect(),
            cats: self.cats().map(Tile::position).collect(),
            cheese: self.cheese().map(Tile::position).collect(),
            exits: self.exits().map(Tile::position).collect(),
            state: self.play_state(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.snapshot()).expect("Failed to serialize JSON")
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

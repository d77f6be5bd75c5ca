use std::fs::read_to_string;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::MapError;
use crate::position::Coordinates;
use crate::tile::{Tile, TileContent};

use super::Map;

impl Map {
    /// Builds a map from its text layout.
    ///
    /// The extent comes from the walls alone: the width reaches the rightmost
    /// `#` and the height the last line holding one. Short lines and unknown
    /// glyphs are empty floor. Input without walls gives a 1x1 map.
    pub fn parse(text: &str) -> Self {
        let wall = TileContent::Wall.glyph();
        let lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();

        let width = 1 + lines
            .iter()
            .filter_map(|line| line.iter().rposition(|&c| c == wall))
            .max()
            .unwrap_or(0);
        let height = 1 + lines
            .iter()
            .rposition(|line| line.contains(&wall))
            .unwrap_or(0);

        let mut tiles = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let content = lines
                    .get(row)
                    .and_then(|line| line.get(col))
                    .map_or(TileContent::Empty, |&c| TileContent::from_glyph(c));
                let position = Coordinates::from_index(tiles.len(), width);
                tiles.push(Tile::new(position, content));
            }
        }

        let map = Map::new(tiles, width, height);
        log::debug!(
            "Parsed {}x{} map: {} rats, {} cats, {} cheese, {} exits",
            width,
            height,
            map.rats.len(),
            map.cats.len(),
            map.cheese.len(),
            map.exits.len()
        );
        map
    }

    /// Builds a map from comma-separated glyphs, one record per row.
    pub fn from_csv(csv_str: &str) -> Result<Self, MapError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_str.as_bytes());

        let mut text = String::new();
        for result in reader.records() {
            let record = result?;
            text.extend(
                record
                    .iter()
                    .map(|field| field.trim().chars().next().unwrap_or(' ')),
            );
            text.push('\n');
        }
        Ok(Self::parse(&text))
    }

    /// Reads and parses a map file. `.csv` files use the CSV layout.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if path.extension().is_some_and(|e| e == "csv") {
            Self::from_csv(&text)
        } else {
            Ok(Self::parse(&text))
        }
    }
}

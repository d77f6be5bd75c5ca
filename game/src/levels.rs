use std::sync::LazyLock;

use crate::error::MapError;
use crate::map::Map;

include!(concat!(env!("OUT_DIR"), "/levels.rs"));

struct Level {
    name: &'static str,
    map: Map,
}

static LEVELS: LazyLock<Vec<Level>> = LazyLock::new(|| {
    LEVEL_DATA
        .iter()
        .map(|&(name, text)| Level {
            name,
            map: Map::parse(text),
        })
        .collect()
});

/// Names of the bundled levels, sorted.
pub fn level_names() -> impl Iterator<Item = &'static str> {
    LEVELS.iter().map(|l| l.name)
}

/// A fresh copy of a bundled level, ready to play.
pub fn load_level(name: &str) -> Result<Map, MapError> {
    LEVELS
        .iter()
        .find(|l| l.name == name)
        .map(|l| l.map.clone())
        .ok_or_else(|| MapError::UnknownLevel(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coordinates;
    use crate::tile::Tile;

    #[test]
    fn bundled_levels_are_sorted() {
        let names: Vec<_> = level_names().collect();
        assert_eq!(names, vec!["arena", "cellar", "corridor"]);
    }

    #[test]
    fn corridor_has_one_exit() {
        let map = load_level("corridor").unwrap();
        assert_eq!((map.width(), map.height()), (7, 3));
        let exits: Vec<_> = map.exits().map(Tile::position).collect();
        assert_eq!(exits, vec![Coordinates::new(1, 6)]);
    }

    #[test]
    fn every_level_is_playable() {
        for name in level_names() {
            let map = load_level(name).unwrap();
            assert!(map.rats().next().is_some(), "{name} has no rats");
            assert!(map.exits().next().is_some(), "{name} has no exits");
        }
    }

    #[test]
    fn loaded_levels_are_independent_copies() {
        let mut first = load_level("corridor").unwrap();
        first.apply_move(Coordinates::new(1, 1), Coordinates::new(1, 2));
        let second = load_level("corridor").unwrap();
        assert_eq!(second.to_text(), "#######\n#S.F...\n#######\n");
    }

    #[test]
    fn unknown_level_is_an_error() {
        assert!(matches!(
            load_level("attic"),
            Err(MapError::UnknownLevel(name)) if name == "attic"
        ));
    }
}

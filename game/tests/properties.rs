use proptest::prelude::*;

use ratmaze::{Coordinates, Dir8, Map, MoveEffect, Tile, TileContent};

/// Walled arenas with a random interior and a few gaps in the border.
/// Corners stay walls so the extent survives a render and re-parse.
fn arena() -> impl Strategy<Value = String> {
    let glyph = prop_oneof![
        4 => Just('.'),
        1 => Just('#'),
        1 => Just('S'),
        1 => Just('C'),
        1 => Just('F'),
    ];
    (3usize..9, 3usize..9)
        .prop_flat_map(move |(height, width)| {
            let cells = height * width;
            (
                Just((height, width)),
                proptest::collection::vec(glyph.clone(), cells),
                proptest::collection::vec(proptest::bool::weighted(0.2), cells),
            )
        })
        .prop_map(|((height, width), glyphs, gaps)| {
            let mut text = String::new();
            for row in 0..height {
                for col in 0..width {
                    let index = row * width + col;
                    let edge_row = row == 0 || row == height - 1;
                    let edge_col = col == 0 || col == width - 1;
                    text.push(match (edge_row, edge_col) {
                        (true, true) => '#',
                        (true, false) | (false, true) if gaps[index] => '.',
                        (true, false) | (false, true) => '#',
                        (false, false) => glyphs[index],
                    });
                }
                text.push('\n');
            }
            text
        })
}

fn check_lists(map: &Map) -> Result<(), TestCaseError> {
    let lists: [(Vec<&Tile>, TileContent); 3] = [
        (map.rats().collect(), TileContent::Rat),
        (map.cats().collect(), TileContent::Cat),
        (map.cheese().collect(), TileContent::Cheese),
    ];
    for (list, content) in lists {
        for tile in &list {
            prop_assert_eq!(tile.content, content);
        }
        let on_grid = map.entries().filter(|tile| tile.content == content).count();
        prop_assert_eq!(list.len(), on_grid);
    }
    Ok(())
}

fn any_source(map: &Map) -> Vec<Coordinates> {
    map.entries().map(Tile::position).collect()
}

proptest! {
    #[test]
    fn destinations_outside_grid_are_invalid(
        text in arena(),
        row in -3i32..12,
        col in -3i32..12,
    ) {
        let map = Map::parse(&text);
        let destination = Coordinates::new(row, col);
        prop_assume!(!destination.in_bounds(map.bounds()));
        for source in any_source(&map) {
            prop_assert!(!map.validate_destination_tile(source, destination));
        }
    }

    #[test]
    fn moves_longer_than_one_step_are_invalid(text in arena()) {
        let map = Map::parse(&text);
        for source in any_source(&map) {
            for destination in any_source(&map) {
                let delta = destination - source;
                if delta.d_row.abs() > 1 || delta.d_col.abs() > 1 {
                    prop_assert!(!map.validate_destination_tile(source, destination));
                }
            }
        }
    }

    #[test]
    fn cats_never_move_diagonally(text in arena()) {
        let map = Map::parse(&text);
        for cat in map.cats() {
            for dir in Dir8::all().into_iter().filter(|dir| dir.is_diagonal()) {
                let destination = cat.position() + dir.delta();
                prop_assert!(!map.validate_destination_tile(cat.position(), destination));
            }
        }
    }

    #[test]
    fn rats_only_enter_cheese_or_empty(text in arena()) {
        let map = Map::parse(&text);
        for rat in map.rats() {
            for dir in Dir8::all() {
                let destination = rat.position() + dir.delta();
                let target = map.content_at(destination);
                let valid = map.validate_destination_tile(rat.position(), destination);
                prop_assert_eq!(
                    valid,
                    matches!(target, TileContent::Cheese | TileContent::Empty)
                        && destination.in_bounds(map.bounds())
                );
            }
        }
    }

    #[test]
    fn entity_lists_track_grid_through_play(
        text in arena(),
        moves in proptest::collection::vec((0usize..16, 0usize..8), 0..60),
    ) {
        let mut map = Map::parse(&text);
        let exits = map.find_exits();
        check_lists(&map)?;
        for (pick, dir) in moves {
            if map.actor_count() == 0 {
                break;
            }
            let rank = pick % map.actor_count() + 1;
            let source = map.get_current_tile_by_rank(rank).unwrap().position();
            let destination = source + Dir8::all()[dir].delta();
            if map.check_for_move_effects(source, destination) != MoveEffect::InvalidMove {
                map.apply_move(source, destination);
            }
            check_lists(&map)?;
        }
        let still_exits: Vec<_> = map.exits().map(Tile::position).collect();
        prop_assert_eq!(still_exits, exits);
    }

    #[test]
    fn rendered_map_parses_to_same_grid(text in arena()) {
        let map = Map::parse(&text);
        let reparsed = Map::parse(&map.to_text());
        prop_assert_eq!(reparsed.bounds(), map.bounds());
        prop_assert_eq!(reparsed.to_text(), map.to_text());
    }

    #[test]
    fn exit_search_is_idempotent(text in arena()) {
        let map = Map::parse(&text);
        let listed: Vec<_> = map.exits().map(Tile::position).collect();
        prop_assert_eq!(map.find_exits(), listed.clone());
        prop_assert_eq!(map.find_exits(), listed);
    }
}

use serde::{Deserialize, Serialize};

use crate::direction::Dir8;
use crate::position::Coordinates;
use crate::tile::{ContentSet, TileContent};

use super::Map;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEffect {
    InvalidMove,
    AcceptedMove,
    CheeseEaten,
    RatCaptured,
    RatEscaped,
}

/// Where a kind of actor may step.
struct MoveRule {
    mover: TileContent,
    destinations: ContentSet,
    diagonal: bool,
}

const MOVE_RULES: [MoveRule; 2] = [
    MoveRule {
        mover: TileContent::Rat,
        destinations: ContentSet::of(&[TileContent::Cheese, TileContent::Empty]),
        diagonal: true,
    },
    MoveRule {
        mover: TileContent::Cat,
        destinations: ContentSet::of(&[TileContent::Rat, TileContent::Empty]),
        diagonal: false,
    },
];

impl MoveRule {
    fn for_mover(mover: TileContent) -> Option<&'static MoveRule> {
        MOVE_RULES.iter().find(|rule| rule.mover == mover)
    }
}

impl Map {
    /// Whether the actor on `source` may step onto `destination`.
    ///
    /// Only rats and cats move; any other source is rejected.
    pub fn validate_destination_tile(
        &self,
        source: Coordinates,
        destination: Coordinates,
    ) -> bool {
        let Some(to) = self.get_tile_by_coordinates(destination) else {
            return false;
        };
        let Some(from) = self.get_tile_by_coordinates(source) else {
            return false;
        };

        let delta = destination - source;
        if !delta.is_single_step() {
            return false;
        }
        if to.content == TileContent::Wall || to.content == from.content {
            return false;
        }

        let Some(rule) = MoveRule::for_mover(from.content) else {
            return false;
        };
        if !rule.diagonal && Dir8::from_delta(delta).is_some_and(Dir8::is_diagonal) {
            return false;
        }
        rule.destinations.contains(to.content)
    }

    /// Classifies a move without changing the map.
    pub fn check_for_move_effects(
        &self,
        source: Coordinates,
        destination: Coordinates,
    ) -> MoveEffect {
        if !self.validate_destination_tile(source, destination) {
            return MoveEffect::InvalidMove;
        }
        let mover = self.content_at(source);
        match self.content_at(destination) {
            TileContent::Cheese => MoveEffect::CheeseEaten,
            TileContent::Rat => MoveEffect::RatCaptured,
            TileContent::Empty if mover == TileContent::Rat && self.is_exit(destination) => {
                MoveEffect::RatEscaped
            }
            _ => MoveEffect::AcceptedMove,
        }
    }

    /// Commits a move. The caller must have checked it with
    /// [`Map::check_for_move_effects`]; rules are not enforced here.
    pub fn apply_move(&mut self, source: Coordinates, destination: Coordinates) {
        let (Some(from), Some(to)) = (self.index_of(source), self.index_of(destination)) else {
            log::error!("Ignoring move {source} -> {destination}: outside the map");
            return;
        };
        if from == to {
            return;
        }

        match self.tiles[to].content {
            TileContent::Cheese => {
                self.cheese.retain(|&index| index != to);
                log::info!("Cheese eaten at {destination}");
            }
            TileContent::Rat => {
                self.rats.retain(|&index| index != to);
                log::info!("Rat captured at {destination}");
            }
            _ => {}
        }

        let mover = self.tiles[from].content;
        let list = match mover {
            TileContent::Cat => Some(&mut self.cats),
            TileContent::Rat => Some(&mut self.rats),
            _ => None,
        };
        if let Some(entry) = list.and_then(|list| list.iter_mut().find(|index| **index == from)) {
            *entry = to;
        }

        self.tiles[to].content = mover;
        self.tiles[from].content = TileContent::Empty;
        log::debug!("{mover:?} moved {source} -> {destination}");

        if mover == TileContent::Rat && self.exits.contains(&to) {
            self.rats.retain(|&index| index != to);
            self.tiles[to].content = TileContent::Empty;
            log::info!("Rat escaped through {destination}");
        }
    }
}

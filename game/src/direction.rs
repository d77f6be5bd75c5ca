use std::str::FromStr;

use thiserror::Error;

use crate::position::CoordinatesDelta;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir8 {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Dir8 {
    pub fn delta(self) -> CoordinatesDelta {
        match self {
            Self::Northwest => CoordinatesDelta::new(-1, -1),
            Self::North => CoordinatesDelta::new(-1, 0),
            Self::Northeast => CoordinatesDelta::new(-1, 1),
            Self::West => CoordinatesDelta::new(0, -1),
            Self::East => CoordinatesDelta::new(0, 1),
            Self::Southwest => CoordinatesDelta::new(1, -1),
            Self::South => CoordinatesDelta::new(1, 0),
            Self::Southeast => CoordinatesDelta::new(1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        match self {
            Self::Northeast | Self::Northwest | Self::Southeast | Self::Southwest => true,
            Self::North | Self::South | Self::East | Self::West => false,
        }
    }

    pub fn all() -> [Self; 8] {
        [
            Self::Northwest,
            Self::North,
            Self::Northeast,
            Self::West,
            Self::East,
            Self::Southwest,
            Self::South,
            Self::Southeast,
        ]
    }

    /// Convert delta values to a Dir8.
    /// Returns None if both components are 0.
    /// Longer deltas map to the direction they point in.
    pub fn from_delta(delta: CoordinatesDelta) -> Option<Self> {
        use std::cmp::Ordering::*;

        let CoordinatesDelta { d_row, d_col } = delta;
        match (d_col.cmp(&0), d_row.cmp(&0)) {
            (Less, Less) => Some(Self::Northwest),
            (Equal, Less) => Some(Self::North),
            (Greater, Less) => Some(Self::Northeast),
            (Less, Equal) => Some(Self::West),
            (Equal, Equal) => None,
            (Greater, Equal) => Some(Self::East),
            (Less, Greater) => Some(Self::Southwest),
            (Equal, Greater) => Some(Self::South),
            (Greater, Greater) => Some(Self::Southeast),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction {0:?}, expected one of n ne e se s sw w nw")]
pub struct UnknownDirection(pub String);

impl FromStr for Dir8 {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" => Ok(Self::North),
            "ne" => Ok(Self::Northeast),
            "e" => Ok(Self::East),
            "se" => Ok(Self::Southeast),
            "s" => Ok(Self::South),
            "sw" => Ok(Self::Southwest),
            "w" => Ok(Self::West),
            "nw" => Ok(Self::Northwest),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_delta_inverts_delta() {
        for dir in Dir8::all() {
            assert_eq!(Dir8::from_delta(dir.delta()), Some(dir));
        }
        assert_eq!(Dir8::from_delta(CoordinatesDelta::new(0, 0)), None);
    }

    #[test]
    fn parses_compass_abbreviations() {
        assert_eq!("ne".parse::<Dir8>(), Ok(Dir8::Northeast));
        assert_eq!("S".parse::<Dir8>(), Ok(Dir8::South));
        assert_eq!(
            "up".parse::<Dir8>(),
            Err(UnknownDirection("up".to_string()))
        );
    }
}

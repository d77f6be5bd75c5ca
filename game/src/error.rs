use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid CSV map: {0}")]
    Csv(#[from] csv::Error),
    #[error("rank {rank} is outside 1..={actors}")]
    RankOutOfRange { rank: usize, actors: usize },
    #[error("no bundled level named {0:?}")]
    UnknownLevel(String),
}

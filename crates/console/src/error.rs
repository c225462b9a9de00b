use std::io;

use reversi_core::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("input closed")]
    InputClosed,

    #[error("{player} played an illegal move: {source}")]
    IllegalMove {
        player: String,
        #[source]
        source: GameError,
    },
}

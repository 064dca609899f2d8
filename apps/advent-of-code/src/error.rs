use std::io;
use std::path::PathBuf;

use graph::GraphError;
use grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no dependency instructions in input")]
    EmptyGraph,

    #[error("no path from step {from} to step {to}")]
    NoPath { from: char, to: char },

    #[error("no square fits in the grid")]
    NoSquare,

    #[error("problem {0} not implemented")]
    UnknownProblem(String),
}

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError {
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(kind: AddEdgeErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeErr {
    NotEnoughPoints,
    DuplicateVertex,
    AlreadyClosed,
    NotClosed,
    NoSelection,
    UnknownShape(usize),
}

impl Display for ShapeErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ShapeErr {}

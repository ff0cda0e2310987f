// this module contains the tree types: the owned node graph and the
// index-addressed container built on top of it.

pub mod basic_tree;
pub mod bitree;

use crate::BiTreeError;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Which child slot of a node is meant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in the order children are visited.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Returns the other side.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Parses the side tags a hosting application may hand in:
/// `left`/`l` and `right`/`r`, ignoring case.
impl FromStr for Side {
    type Err = BiTreeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(BiTreeError::InvalidSide(tag.to_string())),
        }
    }
}

impl<'a> TryFrom<&'a str> for Side {
    type Error = BiTreeError;

    fn try_from(tag: &'a str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// `0` is left and `1` is right. Anything else is rejected.
impl TryFrom<u8> for Side {
    type Error = BiTreeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Side::Left),
            1 => Ok(Side::Right),
            _ => Err(BiTreeError::InvalidSide(tag.to_string())),
        }
    }
}

#[test]
fn side_tags() {
    assert_eq!("Left".parse::<Side>(), Ok(Side::Left));
    assert_eq!(" r ".parse::<Side>(), Ok(Side::Right));
    assert_eq!(
        "up".parse::<Side>(),
        Err(BiTreeError::InvalidSide("up".to_string()))
    );
    assert_eq!(Side::try_from(1u8), Ok(Side::Right));
    assert_eq!(
        Side::try_from(2u8),
        Err(BiTreeError::InvalidSide("2".to_string()))
    );
    assert_eq!(Side::Left.flip(), Side::Right);
}

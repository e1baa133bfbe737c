//! # Directional Style Resolver
//!
//! Single source of truth for every direction-dependent layout value. Components
//! describe positions logically (`start`/`end`, "toward the end") and resolve
//! them here instead of negating offsets ad hoc.
//!
//! | Logical | LTR | RTL |
//! |---------|-----|-----|
//! | `start` | `left` | `right` |
//! | `end` | `right` | `left` |
//! | translate toward end by `n` | `+n` | `-n` |
//!
//! All functions are pure.

use crate::language::Direction;
use std::fmt;
use std::str::FromStr;

/// Edge expressed relative to the reading direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalSide {
    Start,
    End,
}

impl LogicalSide {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

impl FromStr for LogicalSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            other => Err(format!("unknown logical side: {other}")),
        }
    }
}

/// Physical CSS edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhysicalSide {
    Left,
    Right,
}

impl PhysicalSide {
    /// CSS property name (`left` / `right`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for PhysicalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A distance from a logical edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogicalOffset {
    pub side: LogicalSide,
    pub amount: f64,
}

impl LogicalOffset {
    pub const fn start(amount: f64) -> Self {
        Self { side: LogicalSide::Start, amount }
    }

    pub const fn end(amount: f64) -> Self {
        Self { side: LogicalSide::End, amount }
    }
}

/// A distance from a physical edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalOffset {
    pub side: PhysicalSide,
    pub amount: f64,
}

impl PhysicalOffset {
    /// Inline CSS declaration, e.g. `right: 24px`.
    pub fn to_css(self) -> String {
        format!("{}: {}px", self.side, self.amount)
    }
}

/// Resolve a logical edge to the physical edge for `direction`.
pub const fn resolve_side(direction: Direction, side: LogicalSide) -> PhysicalSide {
    match (direction, side) {
        (Direction::Ltr, LogicalSide::Start) | (Direction::Rtl, LogicalSide::End) => {
            PhysicalSide::Left
        }
        (Direction::Ltr, LogicalSide::End) | (Direction::Rtl, LogicalSide::Start) => {
            PhysicalSide::Right
        }
    }
}

/// Resolve a logical offset to a physical one. The amount is unchanged; only the edge moves.
pub const fn resolve(direction: Direction, offset: LogicalOffset) -> PhysicalOffset {
    PhysicalOffset {
        side: resolve_side(direction, offset.side),
        amount: offset.amount,
    }
}

/// Physical `translateX` for a slide of `amount` pixels toward the end edge.
pub fn translate_toward_end(direction: Direction, amount: f64) -> f64 {
    amount * direction.sign()
}

/// Mirror a rotation (chevrons, flip-in cards) for `direction`.
pub fn mirror_rotation(direction: Direction, degrees: f64) -> f64 {
    degrees * direction.sign()
}

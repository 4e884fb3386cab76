//! Barrier types.

use std::fmt;

/// Single-barrier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierType {
    /// Up-and-in: becomes active when the price rises above the barrier.
    UpIn,
    /// Up-and-out: is extinguished when the price rises above the barrier.
    UpOut,
    /// Down-and-in: becomes active when the price drops below the barrier.
    DownIn,
    /// Down-and-out: is extinguished when the price drops below the barrier.
    DownOut,
}

impl BarrierType {
    /// Whether this is a knock-in barrier.
    pub fn is_in(self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::DownIn)
    }

    /// Whether the barrier lies above spot (an "Up" barrier).
    pub fn is_up(self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::UpOut)
    }

    /// All four barrier types, for exhaustive iteration in tests.
    pub const ALL: [BarrierType; 4] = [
        BarrierType::UpIn,
        BarrierType::UpOut,
        BarrierType::DownIn,
        BarrierType::DownOut,
    ];
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierType::UpIn => write!(f, "UpAndIn"),
            BarrierType::UpOut => write!(f, "UpAndOut"),
            BarrierType::DownIn => write!(f, "DownAndIn"),
            BarrierType::DownOut => write!(f, "DownAndOut"),
        }
    }
}

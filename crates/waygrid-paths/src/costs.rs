//! Movement cost configuration.

use std::fmt;

use waygrid_core::Point;

/// Cost of a north/south/east/west step.
pub const DEFAULT_CARDINAL_COST: i32 = 10;
/// Cost of a diagonal step.
pub const DEFAULT_DIAGONAL_COST: i32 = 14;

/// The fixed cardinal/diagonal cost pair used by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCosts"))]
pub struct MoveCosts {
    cardinal: i32,
    diagonal: i32,
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self {
            cardinal: DEFAULT_CARDINAL_COST,
            diagonal: DEFAULT_DIAGONAL_COST,
        }
    }
}

impl MoveCosts {
    /// Create a cost pair. Both costs must be positive.
    pub fn new(cardinal: i32, diagonal: i32) -> Result<Self, CostError> {
        if cardinal <= 0 {
            return Err(CostError::NonPositive {
                which: "cardinal",
                value: cardinal,
            });
        }
        if diagonal <= 0 {
            return Err(CostError::NonPositive {
                which: "diagonal",
                value: diagonal,
            });
        }
        Ok(Self { cardinal, diagonal })
    }

    #[inline]
    pub fn cardinal(&self) -> i32 {
        self.cardinal
    }

    #[inline]
    pub fn diagonal(&self) -> i32 {
        self.diagonal
    }

    /// Cost of stepping from `from` to the adjacent cell `to`.
    ///
    /// Exactly one diagonal step costs the diagonal constant; anything else
    /// is charged as a cardinal step.
    #[inline]
    pub fn step(&self, from: Point, to: Point) -> i32 {
        if from.is_diagonal_step(to) {
            self.diagonal
        } else {
            self.cardinal
        }
    }

    /// Total movement cost along `route`, saturating at `i32::MAX`.
    ///
    /// Repeated cells (the junction between two legs of a waypoint route)
    /// are free.
    pub fn route_cost(&self, route: &[Point]) -> i32 {
        route
            .windows(2)
            .filter(|w| w[0] != w[1])
            .fold(0i32, |acc, w| acc.saturating_add(self.step(w[0], w[1])))
    }
}

// Deserialized costs go through `MoveCosts::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCosts {
    cardinal: i32,
    diagonal: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCosts> for MoveCosts {
    type Error = CostError;

    fn try_from(raw: RawCosts) -> Result<Self, CostError> {
        MoveCosts::new(raw.cardinal, raw.diagonal)
    }
}

/// Rejected movement cost configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    /// A cost was zero or negative.
    NonPositive { which: &'static str, value: i32 },
}

impl fmt::Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { which, value } => {
                write!(f, "{which} movement cost must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for CostError {}

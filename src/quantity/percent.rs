use std::fmt::{Debug, Display, Formatter};

use derive_more::{From, FromStr};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, From, FromStr, Serialize, Deserialize)]
pub struct Percent(pub f64);

impl Percent {
    pub const HUNDRED: Self = Self(100.0);
    pub const ZERO: Self = Self(0.0);

    pub fn to_proportion(self) -> f64 {
        0.01 * self.0
    }

    /// Clamp into the declared `[0, 100]` range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(0.0, 100.0))
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

impl PartialEq for Percent {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl Eq for Percent {}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_proportion() {
        assert_abs_diff_eq!(Percent(45.0).to_proportion(), 0.45);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Percent(-3.0).clamped(), Percent::ZERO);
        assert_eq!(Percent(150.0).clamped(), Percent::HUNDRED);
        assert_eq!(Percent(55.5).clamped(), Percent(55.5));
    }
}

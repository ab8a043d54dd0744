use crate::quantity::{energy::KilowattHours, percent::Percent};

/// Outcome of a single optimization cycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChargeDecision {
    /// Expected generation will not cover the deficit: charge overnight from the grid.
    Schedule,

    /// Expected generation or the current charge is sufficient: clear any scheduled charge.
    Cancel,
}

impl ChargeDecision {
    /// Charging is scheduled only when both the generation estimate and the battery
    /// level fall below their thresholds.
    #[must_use]
    pub fn new(
        state_of_charge: Percent,
        estimated_generation: KilowattHours,
        min_battery_level: Percent,
        charge_threshold: KilowattHours,
    ) -> Self {
        if estimated_generation < charge_threshold && state_of_charge < min_battery_level {
            Self::Schedule
        } else {
            Self::Cancel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_generation_and_low_battery_schedules() {
        let decision =
            ChargeDecision::new(Percent(15.0), KilowattHours(2.0), Percent(20.0), KilowattHours(3.0));
        assert_eq!(decision, ChargeDecision::Schedule);
    }

    #[test]
    fn test_sufficient_generation_cancels() {
        let decision =
            ChargeDecision::new(Percent(15.0), KilowattHours(4.0), Percent(20.0), KilowattHours(3.0));
        assert_eq!(decision, ChargeDecision::Cancel);
    }

    #[test]
    fn test_sufficient_battery_cancels() {
        let decision =
            ChargeDecision::new(Percent(25.0), KilowattHours(2.0), Percent(20.0), KilowattHours(3.0));
        assert_eq!(decision, ChargeDecision::Cancel);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let decision =
            ChargeDecision::new(Percent(20.0), KilowattHours(3.0), Percent(20.0), KilowattHours(3.0));
        assert_eq!(decision, ChargeDecision::Cancel);
    }
}

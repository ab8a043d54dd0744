//! Solar generation estimate from cloud cover and time of day.
//!
//! The curve is a policy, not a physical model: a linear daylight ramp peaking at
//! [`EstimatorArgs::peak_sun_hour`] and zero outside the configured daylight window,
//! scaled by the clear-sky share of the forecast cloud cover. Out-of-range inputs are
//! clamped, since the estimate is best-effort.

use crate::{
    cli::EstimatorArgs,
    quantity::{energy::KilowattHours, percent::Percent},
};

/// Estimate the generation for a single 3-hour forecast slot.
pub fn estimate_slot(
    args: &EstimatorArgs,
    local_hour: u32,
    cloud_cover: Percent,
) -> KilowattHours {
    let local_hour = local_hour.min(23);
    if !(args.daylight_start_hour..args.daylight_end_hour).contains(&local_hour) {
        return KilowattHours::ZERO;
    }
    let half_span = args
        .peak_sun_hour
        .abs_diff(args.daylight_start_hour)
        .max(args.daylight_end_hour.abs_diff(args.peak_sun_hour));
    let daylight_factor =
        (1.0 - f64::from(local_hour.abs_diff(args.peak_sun_hour)) / f64::from(half_span)).max(0.0);
    let clear_sky_factor = 1.0 - cloud_cover.clamped().to_proportion();
    args.clear_sky_slot_energy * (daylight_factor * clear_sky_factor)
}

/// Sum the slot estimates over the whole forecast window.
pub fn estimate_total(
    args: &EstimatorArgs,
    slots: impl IntoIterator<Item = (u32, Percent)>,
) -> KilowattHours {
    slots.into_iter().map(|(local_hour, cloud_cover)| estimate_slot(args, local_hour, cloud_cover)).sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn args() -> EstimatorArgs {
        EstimatorArgs {
            daylight_start_hour: 6,
            daylight_end_hour: 20,
            peak_sun_hour: 13,
            clear_sky_slot_energy: KilowattHours(3.0),
        }
    }

    #[test]
    fn test_clear_sky_peaks_at_peak_hour() {
        assert_abs_diff_eq!(estimate_slot(&args(), 13, Percent::ZERO).0, 3.0);
    }

    #[test]
    fn test_zero_outside_daylight() {
        assert_eq!(estimate_slot(&args(), 2, Percent::ZERO), KilowattHours::ZERO);
        assert_eq!(estimate_slot(&args(), 20, Percent::ZERO), KilowattHours::ZERO);
        assert_eq!(estimate_slot(&args(), 23, Percent::ZERO), KilowattHours::ZERO);
    }

    #[test]
    fn test_overcast_sky_yields_nothing() {
        assert_eq!(estimate_slot(&args(), 13, Percent::HUNDRED), KilowattHours::ZERO);
    }

    #[test]
    fn test_monotonic_in_cloud_cover() {
        let args = args();
        for local_hour in 0..24 {
            assert!(
                estimate_slot(&args, local_hour, Percent(30.0))
                    >= estimate_slot(&args, local_hour, Percent(70.0)),
                "more cloud may never mean more generation (hour {local_hour})",
            );
        }
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let args = args();
        assert_eq!(estimate_slot(&args, 13, Percent(150.0)), KilowattHours::ZERO);
        assert_eq!(
            estimate_slot(&args, 13, Percent(-10.0)),
            estimate_slot(&args, 13, Percent::ZERO),
        );
        // An impossible hour falls back to the last hour of the day, which is night:
        assert_eq!(estimate_slot(&args, 42, Percent::ZERO), KilowattHours::ZERO);
    }

    #[test]
    fn test_total_is_the_sum_of_slots() {
        let args = args();
        let total = estimate_total(&args, [(10, Percent(20.0)), (13, Percent(50.0))]);
        let expected =
            estimate_slot(&args, 10, Percent(20.0)) + estimate_slot(&args, 13, Percent(50.0));
        assert_abs_diff_eq!(total.0, expected.0);
    }
}

//! Cross-period backfill: derive a missing period from a known sibling.
//!
//! Non-zero values are never overwritten. All-zero inputs stay all-zero.

use tracing::debug;

use crate::models::compensation::{PeriodAmount, PeriodAmounts};
use crate::models::config::WorkTimeConvention;

/// Fill hourly from monthly or monthly from hourly using 8 h/day and 20 days/month.
pub fn backfill(hourly: PeriodAmount, monthly: PeriodAmount) -> (PeriodAmount, PeriodAmount) {
    backfill_with(hourly, monthly, &WorkTimeConvention::default())
}

/// Same as [`backfill`] with an explicit convention.
///
/// Derived hourly values are rounded to the nearest unit; derived monthly
/// values are exact.
pub fn backfill_with(
    mut hourly: PeriodAmount,
    mut monthly: PeriodAmount,
    convention: &WorkTimeConvention,
) -> (PeriodAmount, PeriodAmount) {
    let hours = convention.hours_per_month();

    if !hourly.is_found() && monthly.is_found() {
        hourly.value = (monthly.value / hours).round();
        hourly.currency = monthly.currency;
        debug!("Derived hourly {} from monthly {}", hourly.value, monthly.value);
    } else if !monthly.is_found() && hourly.is_found() {
        monthly.value = hourly.value * hours;
        monthly.currency = hourly.currency;
        debug!("Derived monthly {} from hourly {}", monthly.value, hourly.value);
    }

    (hourly, monthly)
}

/// Backfill across hourly, monthly and annual amounts.
///
/// An annual-only figure first yields a rounded monthly one; the
/// hourly/monthly rule then runs, and a missing annual figure is derived
/// from the monthly one last.
pub fn backfill_periods(amounts: &mut PeriodAmounts, convention: &WorkTimeConvention) {
    if !amounts.hourly.is_found() && !amounts.monthly.is_found() && amounts.annual.is_found() {
        amounts.monthly.value = (amounts.annual.value / convention.months_per_year).round();
        amounts.monthly.currency = amounts.annual.currency;
        debug!(
            "Derived monthly {} from annual {}",
            amounts.monthly.value, amounts.annual.value
        );
    }

    let (hourly, monthly) = backfill_with(amounts.hourly, amounts.monthly, convention);
    amounts.hourly = hourly;
    amounts.monthly = monthly;

    if !amounts.annual.is_found() && amounts.monthly.is_found() {
        amounts.annual.value = amounts.monthly.value * convention.months_per_year;
        amounts.annual.currency = amounts.monthly.currency;
        debug!(
            "Derived annual {} from monthly {}",
            amounts.annual.value, amounts.monthly.value
        );
    }
}

use super::domain::Vehicle;

/// Daily fee for the deductible-reduction option, in minor units.
pub const DEDUCTIBLE_REDUCTION_DAILY_FEE: i64 = 400;

/// Tiered daily rate, expressed in tenths of the full rate so the whole
/// computation stays integral. The tier is keyed by the 1-based day
/// index within the rental, not by total duration: day 11 of any rental
/// is billed at half rate even though days 1..10 were not.
const fn day_rate_tenths(day_index: i64) -> i64 {
    match day_index {
        i if i > 10 => 5,
        i if i > 4 => 7,
        i if i > 1 => 9,
        _ => 10,
    }
}

/// Price of a rental in minor units: per-day charges discounted by day
/// index, summed in tenths and truncated toward zero once, plus a flat
/// per-kilometre charge that is never discounted.
pub fn rental_price(duration_days: i64, distance: i64, vehicle: Vehicle) -> i64 {
    let day_tenths: i64 = (1..=duration_days)
        .map(|day| vehicle.price_per_day * day_rate_tenths(day))
        .sum();
    day_tenths / 10 + distance * vehicle.price_per_km
}

/// Fee for the optional deductible reduction: a flat daily rate when the
/// driver opted in, zero otherwise.
pub fn deductible_reduction_fee(duration_days: i64, opted_in: bool) -> i64 {
    if opted_in {
        duration_days * DEDUCTIBLE_REDUCTION_DAILY_FEE
    } else {
        0
    }
}

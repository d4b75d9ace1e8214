use chrono::NaiveDate;
use thiserror::Error;

use super::commission::Commission;
use super::domain::{Action, Vehicle};
use super::ledger;
use super::pricing;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgreementError {
    #[error("rental end date {end} precedes start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// A priced rental. Everything derived (duration, price, option fee,
/// commission, ledger actions) is computed once at construction and
/// never mutated afterward; the batch is a pure transform, not a live
/// store.
#[derive(Debug, Clone)]
pub struct RentalAgreement {
    /// `None` for the synthetic agreements built to price a
    /// modification's amended state; those never reach the output on
    /// their own.
    pub id: Option<i64>,
    pub vehicle: Vehicle,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub distance: i64,
    pub deductible_reduction: bool,
    pub duration_days: i64,
    pub price: i64,
    pub deductible_reduction_fee: i64,
    pub commission: Commission,
    pub actions: Vec<Action>,
}

impl RentalAgreement {
    pub fn new(
        id: Option<i64>,
        vehicle: Vehicle,
        start_date: NaiveDate,
        end_date: NaiveDate,
        distance: i64,
        deductible_reduction: bool,
    ) -> Result<Self, AgreementError> {
        if end_date < start_date {
            return Err(AgreementError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        // Both endpoints are rented days, so the count is inclusive.
        let duration_days = (end_date - start_date).num_days() + 1;
        let price = pricing::rental_price(duration_days, distance, vehicle);
        let deductible_reduction_fee =
            pricing::deductible_reduction_fee(duration_days, deductible_reduction);
        let commission = Commission::compute(price, duration_days);
        let actions = ledger::rental_actions(price, deductible_reduction_fee, commission);

        Ok(Self {
            id,
            vehicle,
            start_date,
            end_date,
            distance,
            deductible_reduction,
            duration_days,
            price,
            deductible_reduction_fee,
            commission,
            actions,
        })
    }

    /// The agreement as it stands after a modification: same vehicle and
    /// opt-in flag, with each of dates and distance independently
    /// replaceable. Carries no id of its own.
    pub fn amended(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        distance: Option<i64>,
    ) -> Result<Self, AgreementError> {
        Self::new(
            None,
            self.vehicle,
            start_date.unwrap_or(self.start_date),
            end_date.unwrap_or(self.end_date),
            distance.unwrap_or(self.distance),
            self.deductible_reduction,
        )
    }
}

use super::agreement::RentalAgreement;
use super::commission::Commission;
use super::domain::{Action, Party};

/// The five actions reconciling one rental. Fixed order: the driver is
/// debited the full cost, then the owner, insurer, assistance, and
/// platform are credited their shares. The deductible-reduction fee
/// goes straight from the driver to the platform.
pub(crate) fn rental_actions(
    price: i64,
    deductible_reduction_fee: i64,
    commission: Commission,
) -> Vec<Action> {
    vec![
        Action::debit(Party::Driver, price + deductible_reduction_fee),
        Action::credit(Party::Owner, price - commission.total),
        Action::credit(Party::Insurance, commission.insurance_fee),
        Action::credit(Party::Assistance, commission.assistance_fee),
        Action::credit(
            Party::Platform,
            commission.platform_fee + deductible_reduction_fee,
        ),
    ]
}

/// Per-party deltas that move the ledger from the original agreement's
/// state to the amended one's. A party whose amount grew keeps its
/// direction; one whose amount shrank has it inverted.
pub fn delta_actions(original: &RentalAgreement, amended: &RentalAgreement) -> Vec<Action> {
    original
        .actions
        .iter()
        .zip(&amended.actions)
        .map(|(before, after)| {
            // Actions at the same index always share a party and
            // direction, so the raw difference is already expressed in
            // the original's sign convention.
            let raw = after.amount - before.amount;
            let direction = if raw < 0 {
                before.direction.inverted()
            } else {
                before.direction
            };
            Action {
                party: before.party,
                direction,
                amount: raw.abs(),
            }
        })
        .collect()
}

/// An amendment to an existing rental, with the delta actions needed to
/// rebalance the ledger.
#[derive(Debug, Clone)]
pub struct RentalModification {
    pub id: i64,
    pub rental_id: i64,
    pub original: RentalAgreement,
    pub amended: RentalAgreement,
    pub delta_actions: Vec<Action>,
}

impl RentalModification {
    pub fn new(
        id: i64,
        rental_id: i64,
        original: RentalAgreement,
        amended: RentalAgreement,
    ) -> Self {
        let delta_actions = delta_actions(&original, &amended);
        Self {
            id,
            rental_id,
            original,
            amended,
            delta_actions,
        }
    }
}

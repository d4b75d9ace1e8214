mod agreement;
mod commission;
mod ledger;
mod pricing;

pub mod domain;

pub use agreement::{AgreementError, RentalAgreement};
pub use commission::Commission;
pub use domain::{Action, Direction, Party, Vehicle};
pub use ledger::{delta_actions, RentalModification};
pub use pricing::{deductible_reduction_fee, rental_price};

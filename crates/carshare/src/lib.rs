//! Pricing and ledger derivation for a car-rental marketplace.
//!
//! The [`billing`] module holds the pure policy layer: tiered daily
//! pricing, the deductible-reduction option, the commission split, and
//! the debit/credit actions that reconcile a rental across its five
//! parties. The [`batch`] module materializes those policies from a raw
//! input document and projects the results into the output shapes the
//! marketplace consumes.

pub mod batch;
pub mod billing;

use serde::Serialize;

use super::Batch;
use crate::billing::{Action, Commission, RentalAgreement, RentalModification};

/// Output projection over a computed batch. The engine always computes
/// the full agreement; the narrower documents are just views of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// `{rentals: [{id, price}]}`
    Prices,
    /// `{rentals: [{id, price, options, commission}]}`
    Quotes,
    /// `{rentals: [{id, actions}]}`
    Actions,
    /// `{rental_modifications: [{id, rental_id, actions}]}`
    Modifications,
}

impl ReportKind {
    /// Default selection: modification deltas when the batch carries
    /// modifications, full quotes otherwise.
    pub fn auto_for(batch: &Batch) -> Self {
        if batch.modifications.is_empty() {
            Self::Quotes
        } else {
            Self::Modifications
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchReport {
    Rentals { rentals: Vec<RentalView> },
    Modifications { rental_modifications: Vec<ModificationView> },
}

#[derive(Debug, Serialize)]
pub struct RentalView {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<Commission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
}

/// Purchased options. `deductible_reduction` carries the fee charged
/// for the option (zero when not taken), matching the output contract.
#[derive(Debug, Serialize)]
pub struct OptionsView {
    pub deductible_reduction: i64,
}

#[derive(Debug, Serialize)]
pub struct ModificationView {
    pub id: i64,
    pub rental_id: i64,
    pub actions: Vec<Action>,
}

impl RentalView {
    fn price_only(id: i64, rental: &RentalAgreement) -> Self {
        Self {
            id,
            price: Some(rental.price),
            options: None,
            commission: None,
            actions: None,
        }
    }

    fn quote(id: i64, rental: &RentalAgreement) -> Self {
        Self {
            id,
            price: Some(rental.price),
            options: Some(OptionsView {
                deductible_reduction: rental.deductible_reduction_fee,
            }),
            commission: Some(rental.commission),
            actions: None,
        }
    }

    fn with_actions(id: i64, rental: &RentalAgreement) -> Self {
        Self {
            id,
            price: None,
            options: None,
            commission: None,
            actions: Some(rental.actions.clone()),
        }
    }
}

impl ModificationView {
    fn from_modification(modification: &RentalModification) -> Self {
        Self {
            id: modification.id,
            rental_id: modification.rental_id,
            actions: modification.delta_actions.clone(),
        }
    }
}

/// Projects the batch into the requested output document. Synthetic
/// agreements (no id) never appear in rental views.
pub fn render(batch: &Batch, kind: ReportKind) -> BatchReport {
    let rental_views = |view: fn(i64, &RentalAgreement) -> RentalView| {
        batch
            .rentals
            .iter()
            .filter_map(|rental| rental.id.map(|id| view(id, rental)))
            .collect()
    };

    match kind {
        ReportKind::Prices => BatchReport::Rentals {
            rentals: rental_views(RentalView::price_only),
        },
        ReportKind::Quotes => BatchReport::Rentals {
            rentals: rental_views(RentalView::quote),
        },
        ReportKind::Actions => BatchReport::Rentals {
            rentals: rental_views(RentalView::with_actions),
        },
        ReportKind::Modifications => BatchReport::Modifications {
            rental_modifications: batch
                .modifications
                .iter()
                .map(ModificationView::from_modification)
                .collect(),
        },
    }
}

mod input;

pub mod report;

pub use input::{CarRecord, InputDocument, ModificationRecord, RentalRecord};

use chrono::NaiveDate;
use thiserror::Error;

use crate::billing::{AgreementError, RentalAgreement, RentalModification, Vehicle};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("rental {rental_id} references unknown car {car_id}")]
    UnknownVehicle { rental_id: i64, car_id: i64 },
    #[error("modification {modification_id} references unknown rental {rental_id}")]
    UnknownRental {
        modification_id: i64,
        rental_id: i64,
    },
    #[error("unparseable date '{value}'")]
    MalformedDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("malformed input document")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Agreement(#[from] AgreementError),
}

/// A fully materialized batch: every rental priced, every modification
/// resolved against its rental and reduced to delta actions. Any
/// dangling reference or invalid record fails the whole batch.
#[derive(Debug)]
pub struct Batch {
    pub vehicles: Vec<Vehicle>,
    pub rentals: Vec<RentalAgreement>,
    pub modifications: Vec<RentalModification>,
}

/// Parses and transforms a raw JSON document in one step.
pub fn transform_json(text: &str) -> Result<Batch, BatchError> {
    let document = InputDocument::from_json(text)?;
    transform(&document)
}

/// Resolves the document's foreign keys (car by id, rental by id) and
/// constructs the priced batch. Lookups are exact-id linear scans;
/// first match wins.
pub fn transform(document: &InputDocument) -> Result<Batch, BatchError> {
    let vehicles: Vec<Vehicle> = document
        .cars
        .iter()
        .map(|car| Vehicle {
            id: car.id,
            price_per_day: car.price_per_day,
            price_per_km: car.price_per_km,
        })
        .collect();

    let mut rentals = Vec::with_capacity(document.rentals.len());
    for record in &document.rentals {
        let vehicle = *vehicles
            .iter()
            .find(|vehicle| vehicle.id == record.car_id)
            .ok_or(BatchError::UnknownVehicle {
                rental_id: record.id,
                car_id: record.car_id,
            })?;
        let start_date = parse_date(&record.start_date)?;
        let end_date = parse_date(&record.end_date)?;
        rentals.push(RentalAgreement::new(
            Some(record.id),
            vehicle,
            start_date,
            end_date,
            record.distance,
            record.deductible_reduction,
        )?);
    }

    let mut modifications = Vec::with_capacity(document.rental_modifications.len());
    for record in &document.rental_modifications {
        let original = rentals
            .iter()
            .find(|rental| rental.id == Some(record.rental_id))
            .ok_or(BatchError::UnknownRental {
                modification_id: record.id,
                rental_id: record.rental_id,
            })?
            .clone();
        let start_date = record.start_date.as_deref().map(parse_date).transpose()?;
        let end_date = record.end_date.as_deref().map(parse_date).transpose()?;
        let amended = original.amended(start_date, end_date, record.distance)?;
        modifications.push(RentalModification::new(
            record.id,
            record.rental_id,
            original,
            amended,
        ));
    }

    Ok(Batch {
        vehicles,
        rentals,
        modifications,
    })
}

// %Y-%m-%d with chrono's relaxed numeric parsing, so both `2015-07-03`
// and `2015-7-3` are accepted.
fn parse_date(value: &str) -> Result<NaiveDate, BatchError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        BatchError::MalformedDate {
            value: value.to_string(),
            source,
        }
    })
}

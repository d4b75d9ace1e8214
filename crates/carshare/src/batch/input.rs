use serde::Deserialize;

/// Raw batch document as supplied upstream. Dates stay textual here;
/// the transformer parses them, accepting unpadded months and days.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    pub cars: Vec<CarRecord>,
    pub rentals: Vec<RentalRecord>,
    #[serde(default)]
    pub rental_modifications: Vec<ModificationRecord>,
}

impl InputDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CarRecord {
    pub id: i64,
    pub price_per_day: i64,
    pub price_per_km: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RentalRecord {
    pub id: i64,
    pub car_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub distance: i64,
    /// Absent in documents predating the deductible-reduction option.
    #[serde(default)]
    pub deductible_reduction: bool,
}

/// Amendment to a rental. Each override is independently optional;
/// absent means the original value stands.
#[derive(Debug, Clone, Deserialize)]
pub struct ModificationRecord {
    pub id: i64,
    pub rental_id: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub distance: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document_without_options_or_modifications() {
        let document = InputDocument::from_json(
            r#"{
                "cars": [{"id": 1, "price_per_day": 2000, "price_per_km": 10}],
                "rentals": [{"id": 1, "car_id": 1, "start_date": "2015-12-8",
                             "end_date": "2015-12-8", "distance": 100}]
            }"#,
        )
        .expect("document parses");

        assert_eq!(document.cars.len(), 1);
        assert!(!document.rentals[0].deductible_reduction);
        assert!(document.rental_modifications.is_empty());
    }

    #[test]
    fn modification_overrides_are_independently_optional() {
        let document = InputDocument::from_json(
            r#"{
                "cars": [],
                "rentals": [],
                "rental_modifications": [
                    {"id": 1, "rental_id": 1, "end_date": "2017-12-10"},
                    {"id": 2, "rental_id": 1, "distance": 150}
                ]
            }"#,
        )
        .expect("document parses");

        let first = &document.rental_modifications[0];
        assert_eq!(first.end_date.as_deref(), Some("2017-12-10"));
        assert!(first.start_date.is_none() && first.distance.is_none());

        let second = &document.rental_modifications[1];
        assert_eq!(second.distance, Some(150));
        assert!(second.start_date.is_none() && second.end_date.is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = InputDocument::from_json(
            r#"{
                "cars": [{"id": 1, "price_per_day": 2000}],
                "rentals": []
            }"#,
        )
        .expect_err("missing price_per_km must fail");
        assert!(err.to_string().contains("price_per_km"));
    }
}

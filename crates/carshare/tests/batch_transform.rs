use carshare::batch::report::{render, BatchReport, ReportKind};
use carshare::batch::{transform_json, BatchError};
use carshare::billing::Direction;
use serde_json::json;

const DOCUMENT: &str = r#"{
    "cars": [
        {"id": 1, "price_per_day": 2000, "price_per_km": 10},
        {"id": 2, "price_per_day": 3000, "price_per_km": 15}
    ],
    "rentals": [
        {"id": 1, "car_id": 1, "start_date": "2015-12-8",
         "end_date": "2015-12-8", "distance": 100,
         "deductible_reduction": true},
        {"id": 2, "car_id": 1, "start_date": "2015-03-31",
         "end_date": "2015-04-01", "distance": 300,
         "deductible_reduction": false},
        {"id": 3, "car_id": 2, "start_date": "2015-7-3",
         "end_date": "2015-7-14", "distance": 1000,
         "deductible_reduction": true}
    ],
    "rental_modifications": [
        {"id": 1, "rental_id": 1, "end_date": "2015-12-10", "distance": 150},
        {"id": 2, "rental_id": 3, "start_date": "2015-7-4"}
    ]
}"#;

#[test]
fn prices_match_the_published_tier_schedule() {
    let batch = transform_json(DOCUMENT).expect("batch transforms");
    let prices: Vec<i64> = batch.rentals.iter().map(|r| r.price).collect();
    // Rental 3 uses the dearer car: 3000 + 3*2700 + 6*2100 + 2*1500 + 1000*15.
    assert_eq!(prices, vec![3000, 6800, 41700]);
}

#[test]
fn every_rental_and_modification_reconciles() {
    let batch = transform_json(DOCUMENT).expect("batch transforms");

    let balance = |actions: &[carshare::billing::Action]| -> i64 {
        actions
            .iter()
            .map(|a| match a.direction {
                Direction::Credit => a.amount,
                Direction::Debit => -a.amount,
            })
            .sum()
    };

    for rental in &batch.rentals {
        assert_eq!(balance(&rental.actions), 0, "rental {:?}", rental.id);
        assert_eq!(rental.actions.len(), 5);
    }
    for modification in &batch.modifications {
        assert_eq!(
            balance(&modification.delta_actions),
            0,
            "modification {}",
            modification.id
        );
        assert_eq!(modification.delta_actions.len(), 5);
    }
}

#[test]
fn commission_split_reconciles_for_every_rental() {
    let batch = transform_json(DOCUMENT).expect("batch transforms");
    for rental in &batch.rentals {
        let c = rental.commission;
        assert_eq!(c.insurance_fee + c.assistance_fee + c.platform_fee, c.total);
        assert_eq!(c.total, rental.price * 3 / 10);
    }
}

#[test]
fn modification_document_matches_expected_output() {
    let batch = transform_json(DOCUMENT).expect("batch transforms");
    let report = render(&batch, ReportKind::auto_for(&batch));
    assert!(matches!(report, BatchReport::Modifications { .. }));

    let value = serde_json::to_value(&report).expect("report serializes");
    let first = &value["rental_modifications"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["rental_id"], 1);
    assert_eq!(
        first["actions"][0],
        json!({"who": "driver", "type": "debit", "amount": 4900})
    );

    // Shrinking rental 3 by its first day refunds the driver.
    let second = &value["rental_modifications"][1];
    assert_eq!(second["rental_id"], 3);
    assert_eq!(second["actions"][0]["type"], "credit");
    assert_eq!(second["actions"][0]["who"], "driver");
}

#[test]
fn quote_document_is_emitted_when_no_modifications_exist() {
    let document = r#"{
        "cars": [{"id": 1, "price_per_day": 2000, "price_per_km": 10}],
        "rentals": [{"id": 1, "car_id": 1, "start_date": "2015-12-8",
                     "end_date": "2015-12-8", "distance": 100,
                     "deductible_reduction": true}]
    }"#;
    let batch = transform_json(document).expect("batch transforms");
    let report = render(&batch, ReportKind::auto_for(&batch));
    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(
        value,
        json!({"rentals": [{
            "id": 1,
            "price": 3000,
            "options": {"deductible_reduction": 400},
            "commission": {
                "insurance_fee": 450,
                "assistance_fee": 100,
                "drivy_fee": 350
            }
        }]})
    );
}

#[test]
fn malformed_document_fails_before_any_computation() {
    let err = transform_json(r#"{"cars": []}"#).expect_err("missing rentals must fail");
    assert!(matches!(err, BatchError::Malformed(_)));
}

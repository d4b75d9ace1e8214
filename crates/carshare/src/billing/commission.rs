use serde::Serialize;

/// Commission taken on a rental, split three ways. The platform share is
/// the residual after the insurance and assistance shares, so the three
/// fees always reconcile with the total exactly. Serializes in the
/// output shape (`insurance_fee`, `assistance_fee`, `drivy_fee`); the
/// total is internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Commission {
    pub insurance_fee: i64,
    pub assistance_fee: i64,
    #[serde(rename = "drivy_fee")]
    pub platform_fee: i64,
    #[serde(skip)]
    pub total: i64,
}

impl Commission {
    /// Splits 30% of the rental price: half of the commission to the
    /// insurer, a flat 100/day to roadside assistance, and whatever is
    /// left to the platform. All divisions truncate toward zero.
    pub fn compute(price: i64, duration_days: i64) -> Self {
        let total = price * 3 / 10;
        let insurance_fee = total / 2;
        let assistance_fee = duration_days * 100;
        let platform_fee = total - insurance_fee - assistance_fee;
        Self {
            insurance_fee,
            assistance_fee,
            platform_fee,
            total,
        }
    }
}

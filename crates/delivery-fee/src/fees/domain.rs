use serde::{Deserialize, Serialize};

use super::FeeError;

/// Order details submitted for a quote.
///
/// Amounts are in the smallest currency unit and distances in meters. The
/// numeric fields are signed so negative values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRequest {
    pub cart_value: i64,
    pub delivery_distance: i64,
    pub number_of_items: i64,
    #[serde(default)]
    pub time: Option<String>,
}

impl FeeRequest {
    pub fn new(
        cart_value: i64,
        delivery_distance: i64,
        number_of_items: i64,
        time: impl Into<String>,
    ) -> Self {
        Self {
            cart_value,
            delivery_distance,
            number_of_items,
            time: Some(time.into()),
        }
    }

    /// Check the structural constraints, reporting the first violation in
    /// field order.
    pub fn validate(&self) -> Result<ValidatedOrder<'_>, FeeError> {
        let cart_value = non_negative(self.cart_value, InputViolation::NegativeCartValue)?;
        let delivery_distance = non_negative(
            self.delivery_distance,
            InputViolation::NegativeDeliveryDistance,
        )?;
        let number_of_items =
            non_negative(self.number_of_items, InputViolation::NegativeNumberOfItems)?;
        let time = self
            .time
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or(InputViolation::MissingTime)?;

        Ok(ValidatedOrder {
            cart_value,
            delivery_distance,
            number_of_items,
            time,
        })
    }
}

fn non_negative(value: i64, violation: fn(i64) -> InputViolation) -> Result<u64, InputViolation> {
    u64::try_from(value).map_err(|_| violation(value))
}

/// Request fields after validation. The order time is still unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedOrder<'a> {
    pub cart_value: u64,
    pub delivery_distance: u64,
    pub number_of_items: u64,
    pub time: &'a str,
}

/// Quoted delivery fee in the same currency unit as the cart value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResult {
    pub delivery_fee: u32,
}

impl FeeResult {
    pub fn free() -> Self {
        Self { delivery_fee: 0 }
    }
}

/// Structural problems detected before any rule runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputViolation {
    #[error("cart value must be non-negative (found {0})")]
    NegativeCartValue(i64),
    #[error("delivery distance must be non-negative (found {0})")]
    NegativeDeliveryDistance(i64),
    #[error("number of items must be non-negative (found {0})")]
    NegativeNumberOfItems(i64),
    #[error("order time must be present and non-empty")]
    MissingTime,
}

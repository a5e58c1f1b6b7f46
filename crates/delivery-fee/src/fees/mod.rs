//! Delivery fee calculation.
//!
//! A quote runs as a single pass: validate the request, short-circuit on free
//! delivery, add the small-order, distance and item surcharges, apply the
//! Friday rush multiplier and finally cap the total.

pub mod domain;
pub mod rules;
pub mod rush;


pub use domain::{FeeRequest, FeeResult, InputViolation, ValidatedOrder};
pub use rules::{
    cap_fee, distance_surcharge, item_surcharge, qualifies_for_free_delivery,
    small_order_surcharge, FREE_DELIVERY_THRESHOLD, MAX_DELIVERY_FEE, SMALL_ORDER_MINIMUM,
};
pub use rush::{apply_friday_rush, is_friday_rush, parse_order_time};

/// Errors raised while quoting a delivery fee.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeeError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputViolation),
    #[error("order time '{value}' is not a valid ISO-8601 instant")]
    InvalidTimeFormat { value: String },
}

impl FeeError {
    /// Stable machine-readable label used in error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            FeeError::InvalidInput(_) => "invalid_input",
            FeeError::InvalidTimeFormat { .. } => "invalid_time_format",
        }
    }
}

/// Quote the delivery fee for an order.
///
/// Structural validation happens up front; the order time is only parsed once
/// the base surcharges are known, so a malformed timestamp on a free-delivery
/// cart still yields a zero fee.
pub fn calculate_fee(request: &FeeRequest) -> Result<FeeResult, FeeError> {
    let order = request.validate()?;

    if qualifies_for_free_delivery(order.cart_value) {
        return Ok(FeeResult::free());
    }

    let surcharges = small_order_surcharge(order.cart_value)
        .saturating_add(distance_surcharge(order.delivery_distance))
        .saturating_add(item_surcharge(order.number_of_items));

    let total = apply_friday_rush(surcharges, order.time)?;

    Ok(FeeResult {
        delivery_fee: cap_fee(total),
    })
}

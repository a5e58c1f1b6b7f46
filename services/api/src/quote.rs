use clap::Args;
use delivery_fee::error::AppError;
use delivery_fee::fees::{calculate_fee, FeeRequest};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Cart value in the smallest currency unit (e.g. cents)
    #[arg(long, allow_negative_numbers = true)]
    cart_value: i64,
    /// Delivery distance in meters
    #[arg(long, allow_negative_numbers = true)]
    delivery_distance: i64,
    /// Number of items in the cart
    #[arg(long, allow_negative_numbers = true)]
    number_of_items: i64,
    /// Order time as an ISO-8601 instant, e.g. 2024-01-19T16:00:00Z
    #[arg(long)]
    time: String,
}

impl QuoteArgs {
    pub(crate) fn into_request(self) -> FeeRequest {
        FeeRequest::new(
            self.cart_value,
            self.delivery_distance,
            self.number_of_items,
            self.time,
        )
    }
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let request = args.into_request();
    let result = calculate_fee(&request)?;

    println!("Delivery fee quote");
    println!(
        "Cart value {}, distance {} m, {} item(s), ordered {}",
        request.cart_value,
        request.delivery_distance,
        request.number_of_items,
        request.time.as_deref().unwrap_or_default()
    );
    println!("Delivery fee: {}", result.delivery_fee);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use delivery_fee::fees::{FeeError, InputViolation};

    fn args(cart_value: i64, time: &str) -> QuoteArgs {
        QuoteArgs {
            cart_value,
            delivery_distance: 1500,
            number_of_items: 4,
            time: time.to_string(),
        }
    }

    #[test]
    fn empty_time_is_invalid_input() {
        let err = run_quote(args(1000, "")).expect_err("missing time");
        assert!(matches!(
            err,
            AppError::Fee(FeeError::InvalidInput(InputViolation::MissingTime))
        ));
    }

    #[test]
    fn quote_succeeds_for_valid_order() {
        assert!(run_quote(args(1000, "2024-01-19T16:00:00Z")).is_ok());
    }

    #[test]
    fn quote_propagates_fee_errors() {
        let err = run_quote(args(1000, "next friday")).expect_err("invalid time");
        assert!(matches!(
            err,
            AppError::Fee(FeeError::InvalidTimeFormat { .. })
        ));
    }
}

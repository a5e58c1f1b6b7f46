//! Surcharge rules. Every amount is in the smallest currency unit.

/// Cart value at or above which delivery is free.
pub const FREE_DELIVERY_THRESHOLD: u64 = 20_000;
/// Effective minimum order value; smaller carts pay the difference.
pub const SMALL_ORDER_MINIMUM: u64 = 1_000;
/// Absolute maximum fee, applied after every other rule.
pub const MAX_DELIVERY_FEE: u32 = 1_500;

const SHORT_DISTANCE: u64 = 500;
const SHORT_DISTANCE_FEE: u64 = 100;
const BASE_DISTANCE: u64 = 1_000;
const BASE_DISTANCE_FEE: u64 = 200;
const ADDITIONAL_SEGMENT: u64 = 500;
const ADDITIONAL_SEGMENT_FEE: u64 = 100;

const ITEMS_WITHOUT_SURCHARGE: u64 = 4;
const ITEM_SURCHARGE: u64 = 50;
const BULK_THRESHOLD: u64 = 12;
const BULK_FEE: u64 = 120;

pub fn qualifies_for_free_delivery(cart_value: u64) -> bool {
    cart_value >= FREE_DELIVERY_THRESHOLD
}

pub fn small_order_surcharge(cart_value: u64) -> u64 {
    SMALL_ORDER_MINIMUM.saturating_sub(cart_value)
}

/// Flat fee up to one kilometer, then 100 per started 500 meters.
pub fn distance_surcharge(distance: u64) -> u64 {
    match distance {
        0..=SHORT_DISTANCE => SHORT_DISTANCE_FEE,
        meters if meters <= BASE_DISTANCE => BASE_DISTANCE_FEE,
        meters => {
            let segments = (meters - BASE_DISTANCE).div_ceil(ADDITIONAL_SEGMENT);
            BASE_DISTANCE_FEE.saturating_add(segments.saturating_mul(ADDITIONAL_SEGMENT_FEE))
        }
    }
}

/// 50 per item from the fifth onwards, plus a one-off bulk fee once the
/// count passes twelve.
pub fn item_surcharge(number_of_items: u64) -> u64 {
    match number_of_items {
        0..=ITEMS_WITHOUT_SURCHARGE => 0,
        items if items <= BULK_THRESHOLD => (items - ITEMS_WITHOUT_SURCHARGE) * ITEM_SURCHARGE,
        items => {
            let below_bulk = (BULK_THRESHOLD - ITEMS_WITHOUT_SURCHARGE) * ITEM_SURCHARGE;
            let beyond_bulk = (items - BULK_THRESHOLD).saturating_mul(ITEM_SURCHARGE);
            (below_bulk + BULK_FEE).saturating_add(beyond_bulk)
        }
    }
}

pub fn cap_fee(total: u64) -> u32 {
    u32::try_from(total)
        .unwrap_or(MAX_DELIVERY_FEE)
        .min(MAX_DELIVERY_FEE)
}

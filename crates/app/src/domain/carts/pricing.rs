//! Cart Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rustc_hash::FxHashMap;

use crate::domain::{carts::records::CartLine, products::records::ProductId};

/// Decimal places a checkout total is stored with.
pub const TOTAL_SCALE: u32 = 2;

/// Sum one price per unit in the cart and round half-up to cents.
///
/// Returns `None` if the sum overflows.
#[must_use]
pub fn checkout_total<I>(prices: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let sum = prices
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)?;

    let mut total = sum.round_dp_with_strategy(TOTAL_SCALE, RoundingStrategy::MidpointAwayFromZero);
    total.rescale(TOTAL_SCALE);

    Some(total)
}

/// Collapse repeated product references into counts, keeping first-seen order.
#[must_use]
pub fn project_quantities<I>(product_ids: I) -> Vec<CartLine>
where
    I: IntoIterator<Item = ProductId>,
{
    let mut positions: FxHashMap<ProductId, usize> = FxHashMap::default();
    let mut lines: Vec<CartLine> = Vec::new();

    for product_id in product_ids {
        match positions.get(&product_id).and_then(|&index| lines.get_mut(index)) {
            Some(line) => line.quantity += 1,
            None => {
                positions.insert(product_id, lines.len());
                lines.push(CartLine {
                    product_id,
                    quantity: 1,
                });
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn total_rounds_half_up() -> TestResult {
        let total = checkout_total([Decimal::new(1000, 2), Decimal::new(5005, 3)])
            .ok_or("overflow")?;

        assert_eq!(total, Decimal::new(1501, 2));
        assert_eq!(total.to_string(), "15.01");

        Ok(())
    }

    #[test]
    fn total_rounds_down_below_midpoint() -> TestResult {
        let total = checkout_total([Decimal::new(1004, 3)]).ok_or("overflow")?;

        assert_eq!(total.to_string(), "1.00");

        Ok(())
    }

    #[test]
    fn total_of_empty_cart_is_zero_with_cents() -> TestResult {
        let total = checkout_total(Vec::new()).ok_or("overflow")?;

        assert_eq!(total.to_string(), "0.00");

        Ok(())
    }

    #[test]
    fn repeated_units_multiply_price() -> TestResult {
        let total = checkout_total(std::iter::repeat_n(Decimal::new(333, 2), 3))
            .ok_or("overflow")?;

        assert_eq!(total.to_string(), "9.99");

        Ok(())
    }

    #[test]
    fn total_overflow_returns_none() {
        assert_eq!(checkout_total([Decimal::MAX, Decimal::MAX]), None);
    }

    #[test]
    fn projection_counts_units_in_first_seen_order() {
        let ids = [3, 1, 3, 2, 1, 3].map(ProductId::from_i64);

        let lines = project_quantities(ids);

        assert_eq!(
            lines,
            vec![
                CartLine {
                    product_id: ProductId::from_i64(3),
                    quantity: 3,
                },
                CartLine {
                    product_id: ProductId::from_i64(1),
                    quantity: 2,
                },
                CartLine {
                    product_id: ProductId::from_i64(2),
                    quantity: 1,
                },
            ]
        );
    }

    #[test]
    fn projection_of_nothing_is_empty() {
        assert!(project_quantities(Vec::new()).is_empty());
    }
}

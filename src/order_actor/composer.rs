//! Turns a validated cart into priced lines.
//!
//! Pure and synchronous: prices come from the [`PriceSnapshot`] the validator built, so a
//! catalog item that appears on several lines is priced the same on each of them.

use super::validator::PriceSnapshot;
use super::{EntityKind, OrderError};
use crate::model::{CatalogRef, Line, LineId, LineRequest, OrderCart, OrderId, PackageLine, ProductLine};
use rust_decimal::Decimal;

/// The priced lines of one order and their exact total.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub product_lines: Vec<ProductLine>,
    pub package_lines: Vec<PackageLine>,
    pub total_price: Decimal,
}

struct LineBuilder<'a> {
    order: OrderId,
    prices: &'a PriceSnapshot,
    next_seq: u32,
    total: Decimal,
}

impl LineBuilder<'_> {
    fn build<R: Copy + Into<CatalogRef>>(
        &mut self,
        request: &LineRequest<R>,
    ) -> Result<Line<R>, OrderError> {
        let item: CatalogRef = request.item.into();
        let unit_price = *self
            .prices
            .get(&item)
            .ok_or(OrderError::NotFound(EntityKind::Catalog))?;
        let id = LineId {
            order: self.order,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let line = Line::priced(
            id,
            request.item,
            request.quantity,
            unit_price,
            request.note.clone(),
        )
        .ok_or(OrderError::AmountOverflow(item))?;
        self.total = self
            .total
            .checked_add(line.line_total)
            .ok_or(OrderError::AmountOverflow(item))?;
        Ok(line)
    }
}

/// Products first, then packages, each in request order.
pub fn compose(
    order: OrderId,
    cart: &OrderCart,
    prices: &PriceSnapshot,
) -> Result<Composition, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    let mut builder = LineBuilder {
        order,
        prices,
        next_seq: 1,
        total: Decimal::ZERO,
    };
    let product_lines = cart
        .products
        .iter()
        .map(|request| builder.build(request))
        .collect::<Result<Vec<_>, _>>()?;
    let package_lines = cart
        .packages
        .iter()
        .map(|request| builder.build(request))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Composition {
        product_lines,
        package_lines,
        total_price: builder.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PackageId, ProductId};
    use rust_decimal_macros::dec;

    fn prices() -> PriceSnapshot {
        PriceSnapshot::from([
            (CatalogRef::Product(ProductId(1)), dec!(10.00)),
            (CatalogRef::Product(ProductId(2)), dec!(0.35)),
            (CatalogRef::Package(PackageId(1)), dec!(25.00)),
        ])
    }

    #[test]
    fn test_two_products_and_a_package_total_45() {
        let cart = OrderCart {
            rider_id: None,
            products: vec![LineRequest::new(ProductId(1), 2)],
            packages: vec![LineRequest::new(PackageId(1), 1)],
        };
        let composition = compose(OrderId(1), &cart, &prices()).unwrap();

        assert_eq!(composition.total_price, dec!(45.00));
        assert_eq!(composition.product_lines[0].line_total, dec!(20.00));
        assert_eq!(composition.package_lines[0].unit_price_snapshot, dec!(25.00));
    }

    #[test]
    fn test_sequence_is_shared_and_ordered() {
        let cart = OrderCart {
            rider_id: None,
            products: vec![
                LineRequest::new(ProductId(2), 3),
                LineRequest::new(ProductId(1), 1).with_note("no onions"),
            ],
            packages: vec![LineRequest::new(PackageId(1), 2)],
        };
        let composition = compose(OrderId(7), &cart, &prices()).unwrap();

        let seqs: Vec<u32> = composition
            .product_lines
            .iter()
            .map(|l| l.id.seq)
            .chain(composition.package_lines.iter().map(|l| l.id.seq))
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(composition.product_lines[0].item, ProductId(2));
        assert_eq!(composition.product_lines[1].note.as_deref(), Some("no onions"));
        // 3 * 0.35 + 1 * 10.00 + 2 * 25.00
        assert_eq!(composition.total_price, dec!(61.05));
    }

    #[test]
    fn test_repeated_item_uses_one_price() {
        let cart = OrderCart {
            rider_id: None,
            products: vec![
                LineRequest::new(ProductId(1), 1),
                LineRequest::new(ProductId(1), 4),
            ],
            packages: vec![],
        };
        let composition = compose(OrderId(1), &cart, &prices()).unwrap();
        assert!(composition
            .product_lines
            .iter()
            .all(|l| l.unit_price_snapshot == dec!(10.00)));
        assert_eq!(composition.total_price, dec!(50.00));
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        let prices = PriceSnapshot::from([(CatalogRef::Product(ProductId(1)), Decimal::MAX)]);
        let cart = OrderCart {
            rider_id: None,
            products: vec![LineRequest::new(ProductId(1), 2)],
            packages: vec![],
        };
        assert_eq!(
            compose(OrderId(1), &cart, &prices),
            Err(OrderError::AmountOverflow(ProductId(1).into()))
        );
    }

    #[test]
    fn test_order_total_overflow_is_an_error() {
        let prices = PriceSnapshot::from([
            (CatalogRef::Product(ProductId(1)), Decimal::MAX),
            (CatalogRef::Package(PackageId(1)), dec!(1)),
        ]);
        let cart = OrderCart {
            rider_id: None,
            products: vec![LineRequest::new(ProductId(1), 1)],
            packages: vec![LineRequest::new(PackageId(1), 1)],
        };
        assert_eq!(
            compose(OrderId(1), &cart, &prices),
            Err(OrderError::AmountOverflow(PackageId(1).into()))
        );
    }

    #[test]
    fn test_empty_cart() {
        let cart = OrderCart::default();
        assert_eq!(
            compose(OrderId(1), &cart, &prices()),
            Err(OrderError::EmptyOrder)
        );
    }

    #[test]
    fn test_unpriced_item_fails() {
        let cart = OrderCart {
            rider_id: None,
            products: vec![LineRequest::new(ProductId(99), 1)],
            packages: vec![],
        };
        assert_eq!(
            compose(OrderId(1), &cart, &prices()),
            Err(OrderError::NotFound(EntityKind::Catalog))
        );
    }
}

use crate::model::{OrderId, PackageId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifies a line within its order. Product and package lines share one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId {
    pub order: OrderId,
    pub seq: u32,
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/line_{}", self.order, self.seq)
    }
}

/// A committed order line. The unit price is frozen when the order is composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line<R> {
    pub id: LineId,
    pub item: R,
    pub quantity: u32,
    pub unit_price_snapshot: Decimal,
    pub line_total: Decimal,
    pub note: Option<String>,
}

impl<R> Line<R> {
    /// Prices a line at `unit_price`. `None` if the line total does not fit in a `Decimal`.
    pub fn priced(
        id: LineId,
        item: R,
        quantity: u32,
        unit_price: Decimal,
        note: Option<String>,
    ) -> Option<Self> {
        let line_total = unit_price.checked_mul(Decimal::from(quantity))?;
        Some(Self {
            id,
            item,
            quantity,
            unit_price_snapshot: unit_price,
            line_total,
            note,
        })
    }
}

pub type ProductLine = Line<ProductId>;
pub type PackageLine = Line<PackageId>;

/// One requested cart line: which item, how many, and an optional note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRequest<R> {
    pub item: R,
    pub quantity: u32,
    pub note: Option<String>,
}

impl<R> LineRequest<R> {
    pub fn new(item: R, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total_is_quantity_times_snapshot() {
        let id = LineId {
            order: OrderId(1),
            seq: 1,
        };
        let line = ProductLine::priced(id, ProductId(3), 3, dec!(2.50), None).unwrap();
        assert_eq!(line.line_total, dec!(7.50));
        assert_eq!(line.unit_price_snapshot, dec!(2.50));
        assert_eq!(id.to_string(), "order_1/line_1");
    }

    #[test]
    fn test_line_total_out_of_range() {
        let id = LineId {
            order: OrderId(1),
            seq: 1,
        };
        assert!(ProductLine::priced(id, ProductId(3), 2, Decimal::MAX, None).is_none());
        assert!(ProductLine::priced(id, ProductId(3), 1, Decimal::MAX, None).is_some());
    }
}

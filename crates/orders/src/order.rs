use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chaintrack_core::{DomainError, ItemId, OrderId, Record, SupplierId};

/// Purchase order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::validation(format!("unknown order status: {other}"))),
        }
    }
}

/// One ordered position referencing a stocked item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub inventory_id: ItemId,
    pub quantity: i64,
    pub unit_price: f64,
}

/// A purchase order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub supplier_id: SupplierId,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    /// Derived: sum of `quantity * unit_price` over all lines.
    pub total_amount: f64,
    pub payment_terms: Option<String>,
    pub shipping_address: Option<String>,
    pub notes: Option<String>,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating or replacing an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderDraft {
    pub supplier_id: SupplierId,
    #[serde(default)]
    pub status: OrderStatus,
    /// Defaults to the request time when omitted.
    pub order_date: Option<DateTime<Utc>>,
    pub payment_terms: Option<String>,
    pub shipping_address: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

fn line_total(lines: &[OrderLine]) -> f64 {
    lines
        .iter()
        .map(|l| l.quantity as f64 * l.unit_price)
        .sum()
}

impl Order {
    /// Build a new record from a draft, assigning identity and timestamps.
    ///
    /// The total is derived from the lines rather than accepted from the
    /// client, so the stored record is always internally consistent.
    pub fn create(id: OrderId, draft: OrderDraft, now: DateTime<Utc>) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            supplier_id: draft.supplier_id,
            status: draft.status,
            order_date: draft.order_date.unwrap_or(now),
            total_amount: line_total(&draft.lines),
            payment_terms: draft.payment_terms,
            shipping_address: draft.shipping_address,
            notes: draft.notes,
            lines: draft.lines,
            created_at: now,
            updated_at: now,
        })
    }

    /// Full replacement: same identity and creation time, fresh `updated_at`.
    ///
    /// An omitted `order_date` keeps the existing one.
    pub fn replace_with(&self, draft: OrderDraft, now: DateTime<Utc>) -> Result<Self, DomainError> {
        Ok(Self {
            id: self.id,
            supplier_id: draft.supplier_id,
            status: draft.status,
            order_date: draft.order_date.unwrap_or(self.order_date),
            total_amount: line_total(&draft.lines),
            payment_terms: draft.payment_terms,
            shipping_address: draft.shipping_address,
            notes: draft.notes,
            lines: draft.lines,
            created_at: self.created_at,
            updated_at: now,
        })
    }
}

impl Record for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(lines: Vec<OrderLine>) -> OrderDraft {
        OrderDraft {
            supplier_id: SupplierId::new(),
            status: OrderStatus::default(),
            order_date: None,
            payment_terms: Some("net 30".to_string()),
            shipping_address: None,
            notes: None,
            lines,
        }
    }

    fn line(quantity: i64, unit_price: f64) -> OrderLine {
        OrderLine {
            inventory_id: ItemId::new(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn create_derives_total_from_lines() {
        let now = Utc::now();
        let order = Order::create(OrderId::new(), draft(vec![line(10, 2.5), line(4, 1.0)]), now)
            .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.order_date, now);
        assert!((order.total_amount - 29.0).abs() < f64::EPSILON);
    }

    #[test]
    fn create_with_no_lines_totals_zero() {
        let order = Order::create(OrderId::new(), draft(vec![]), Utc::now()).unwrap();
        assert_eq!(order.total_amount, 0.0);
        assert!(order.lines.is_empty());
    }

    #[test]
    fn replace_recomputes_total_and_keeps_order_date() {
        let placed = Utc::now();
        let order = Order::create(OrderId::new(), draft(vec![line(1, 5.0)]), placed).unwrap();

        let later = placed + chrono::Duration::minutes(1);
        let mut update = draft(vec![line(3, 5.0)]);
        update.status = OrderStatus::Shipped;
        let replaced = order.replace_with(update, later).unwrap();

        assert_eq!(replaced.id, order.id);
        assert_eq!(replaced.order_date, placed);
        assert_eq!(replaced.status, OrderStatus::Shipped);
        assert!((replaced.total_amount - 15.0).abs() < f64::EPSILON);
        assert_eq!(replaced.updated_at, later);
    }
}

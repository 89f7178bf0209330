use serde::Deserialize;
use serde_json::{Value, json};

use chaintrack_activity::ActivityLogEntry;
use chaintrack_auth::User;
use chaintrack_infra::Page;
use chaintrack_inventory::InventoryItem;
use chaintrack_orders::Order;
use chaintrack_suppliers::Supplier;

// -------------------------
// Request DTOs
// -------------------------

/// Login form (`application/x-www-form-urlencoded`), OAuth2 password style.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LogActivityRequest {
    pub action: String,
}

/// Offset/limit query parameters for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl From<ListQuery> for Page {
    fn from(q: ListQuery) -> Self {
        let defaults = Page::default();
        Page::new(
            q.offset.unwrap_or(defaults.offset),
            q.limit.unwrap_or(defaults.limit),
        )
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn user_to_json(user: &User) -> Value {
    json!({
        "id": user.id.to_string(),
        "email": user.email,
        "is_active": user.is_active,
    })
}

pub fn item_to_json(item: &InventoryItem) -> Value {
    json!({
        "id": item.id.to_string(),
        "product_name": item.product_name,
        "description": item.description,
        "quantity": item.quantity,
        "unit_price": item.unit_price,
        "category": item.category,
        "location": item.location,
        "created_at": item.created_at.to_rfc3339(),
        "updated_at": item.updated_at.to_rfc3339(),
    })
}

pub fn order_to_json(order: &Order) -> Value {
    json!({
        "id": order.id.to_string(),
        "supplier_id": order.supplier_id.to_string(),
        "status": order.status.as_str(),
        "order_date": order.order_date.to_rfc3339(),
        "total_amount": order.total_amount,
        "payment_terms": order.payment_terms,
        "shipping_address": order.shipping_address,
        "notes": order.notes,
        "lines": order.lines.iter().map(|l| json!({
            "inventory_id": l.inventory_id.to_string(),
            "quantity": l.quantity,
            "unit_price": l.unit_price,
        })).collect::<Vec<_>>(),
        "created_at": order.created_at.to_rfc3339(),
        "updated_at": order.updated_at.to_rfc3339(),
    })
}

pub fn supplier_to_json(supplier: &Supplier) -> Value {
    json!({
        "id": supplier.id.to_string(),
        "name": supplier.name,
        "contact_person": supplier.contact_person,
        "email": supplier.email,
        "phone": supplier.phone,
        "address": supplier.address,
        "certification": supplier.certification,
        "performance_score": supplier.performance_score,
        "last_delivery_date": supplier.last_delivery_date.map(|d| d.to_rfc3339()),
        "created_at": supplier.created_at.to_rfc3339(),
        "updated_at": supplier.updated_at.to_rfc3339(),
    })
}

pub fn log_entry_to_json(entry: &ActivityLogEntry) -> Value {
    json!({
        "id": entry.id.to_string(),
        "user_id": entry.user_id.to_string(),
        "action": entry.action,
        "recorded_at": entry.recorded_at.to_rfc3339(),
    })
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chaintrack_core::{DomainError, ItemId, Record};

/// A stocked inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub product_name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub category: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating or replacing an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDraft {
    pub product_name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl InventoryItem {
    /// Build a new record from a draft, assigning identity and timestamps.
    ///
    /// Validation is required-field presence only; domain rules such as
    /// non-negative quantities are out of scope.
    pub fn create(id: ItemId, draft: ItemDraft, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let draft = draft.validated()?;
        Ok(Self {
            id,
            product_name: draft.product_name,
            description: draft.description,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            category: draft.category,
            location: draft.location,
            created_at: now,
            updated_at: now,
        })
    }

    /// Full replacement: same identity and creation time, fresh `updated_at`.
    pub fn replace_with(&self, draft: ItemDraft, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let draft = draft.validated()?;
        Ok(Self {
            id: self.id,
            product_name: draft.product_name,
            description: draft.description,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            category: draft.category,
            location: draft.location,
            created_at: self.created_at,
            updated_at: now,
        })
    }
}

impl ItemDraft {
    fn validated(mut self) -> Result<Self, DomainError> {
        self.product_name = self.product_name.trim().to_string();
        if self.product_name.is_empty() {
            return Err(DomainError::validation("product_name cannot be empty"));
        }
        Ok(self)
    }
}

impl Record for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ItemDraft {
        ItemDraft {
            product_name: name.to_string(),
            description: Some("14mm hex bolt".to_string()),
            quantity: 250,
            unit_price: 0.12,
            category: Some("fasteners".to_string()),
            location: Some("aisle 4".to_string()),
        }
    }

    #[test]
    fn create_assigns_identity_and_timestamps() {
        let id = ItemId::new();
        let now = Utc::now();
        let item = InventoryItem::create(id, draft("Hex bolt"), now).unwrap();

        assert_eq!(item.id, id);
        assert_eq!(item.product_name, "Hex bolt");
        assert_eq!(item.quantity, 250);
        assert_eq!(item.created_at, now);
        assert_eq!(item.updated_at, now);
    }

    #[test]
    fn create_rejects_blank_product_name() {
        let result = InventoryItem::create(ItemId::new(), draft("   "), Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn replace_preserves_identity_and_creation_time() {
        let created = Utc::now();
        let item = InventoryItem::create(ItemId::new(), draft("Hex bolt"), created).unwrap();

        let later = created + chrono::Duration::seconds(5);
        let replaced = item.replace_with(draft("Hex bolt M14"), later).unwrap();

        assert_eq!(replaced.id, item.id);
        assert_eq!(replaced.created_at, created);
        assert_eq!(replaced.updated_at, later);
        assert_eq!(replaced.product_name, "Hex bolt M14");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chaintrack_core::{DomainError, Record, SupplierId};

/// A supplying party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub certification: Option<String>,
    pub performance_score: Option<f64>,
    pub last_delivery_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating or replacing a supplier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupplierDraft {
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub certification: Option<String>,
    pub performance_score: Option<f64>,
    pub last_delivery_date: Option<DateTime<Utc>>,
}

impl Supplier {
    /// Build a new record from a draft, assigning identity and timestamps.
    pub fn create(
        id: SupplierId,
        draft: SupplierDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let draft = draft.validated()?;
        Ok(Self {
            id,
            name: draft.name,
            contact_person: draft.contact_person,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            certification: draft.certification,
            performance_score: draft.performance_score,
            last_delivery_date: draft.last_delivery_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Full replacement: same identity and creation time, fresh `updated_at`.
    pub fn replace_with(
        &self,
        draft: SupplierDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let draft = draft.validated()?;
        Ok(Self {
            id: self.id,
            name: draft.name,
            contact_person: draft.contact_person,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            certification: draft.certification,
            performance_score: draft.performance_score,
            last_delivery_date: draft.last_delivery_date,
            created_at: self.created_at,
            updated_at: now,
        })
    }
}

impl SupplierDraft {
    fn validated(mut self) -> Result<Self, DomainError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(self)
    }
}

impl Record for Supplier {
    type Id = SupplierId;

    fn id(&self) -> SupplierId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> SupplierDraft {
        SupplierDraft {
            name: name.to_string(),
            contact_person: Some("Dana Reyes".to_string()),
            email: Some("dana@acme-metals.example".to_string()),
            phone: None,
            address: None,
            certification: Some("ISO 9001".to_string()),
            performance_score: Some(4.6),
            last_delivery_date: None,
        }
    }

    #[test]
    fn create_keeps_contact_fields() {
        let supplier = Supplier::create(SupplierId::new(), draft("Acme Metals"), Utc::now()).unwrap();

        assert_eq!(supplier.name, "Acme Metals");
        assert_eq!(supplier.contact_person.as_deref(), Some("Dana Reyes"));
        assert_eq!(supplier.performance_score, Some(4.6));
    }

    #[test]
    fn create_rejects_blank_name() {
        let result = Supplier::create(SupplierId::new(), draft("  "), Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn replace_preserves_identity() {
        let supplier = Supplier::create(SupplierId::new(), draft("Acme Metals"), Utc::now()).unwrap();
        let replaced = supplier
            .replace_with(draft("Acme Metals Ltd"), Utc::now())
            .unwrap();

        assert_eq!(replaced.id, supplier.id);
        assert_eq!(replaced.created_at, supplier.created_at);
        assert_eq!(replaced.name, "Acme Metals Ltd");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chaintrack_core::{DomainError, LogEntryId, Record, UserId};

/// One "user X performed action Y" audit entry.
///
/// Entries are append-only: never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: LogEntryId,
    pub user_id: UserId,
    pub action: String,
    pub recorded_at: DateTime<Utc>,
}

impl ActivityLogEntry {
    /// Build an entry attributing `action` to `user_id`.
    pub fn record(
        id: LogEntryId,
        user_id: UserId,
        action: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let action = action.trim();
        if action.is_empty() {
            return Err(DomainError::validation("action cannot be empty"));
        }
        Ok(Self {
            id,
            user_id,
            action: action.to_string(),
            recorded_at: now,
        })
    }
}

impl Record for ActivityLogEntry {
    type Id = LogEntryId;

    fn id(&self) -> LogEntryId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_attributes_action_to_user() {
        let user_id = UserId::new();
        let entry =
            ActivityLogEntry::record(LogEntryId::new(), user_id, "created order", Utc::now())
                .unwrap();

        assert_eq!(entry.user_id, user_id);
        assert_eq!(entry.action, "created order");
    }

    #[test]
    fn record_rejects_blank_action() {
        let result = ActivityLogEntry::record(LogEntryId::new(), UserId::new(), "  ", Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Role assigned to every self-registered account.
pub const DEFAULT_ROLE: &str = "owner";

/// A `users` row, including the password hash. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub role: String,
    pub store_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            role: record.role,
            store_id: record.store_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        let now = Utc::now();
        UserRecord {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            email: "ada@example.com".to_string(),
            role: DEFAULT_ROLE.to_string(),
            store_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_public_user_never_contains_password_hash() {
        let user = User::from(record());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("$2b$"));
        assert_eq!(json["role"], "owner");
    }

    #[test]
    fn test_store_id_omitted_until_linked() {
        let mut rec = record();
        let json = serde_json::to_value(User::from(rec.clone())).unwrap();
        assert!(json.get("storeId").is_none());

        let store_id = Uuid::new_v4();
        rec.store_id = Some(store_id);
        let json = serde_json::to_value(User::from(rec)).unwrap();
        assert_eq!(json["storeId"], store_id.to_string());
    }
}

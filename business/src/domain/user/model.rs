use chrono::{DateTime, Utc};

use super::value_objects::UserRole;
use crate::domain::shared::value_objects::{Email, UserId};

/// A registered account. `password_hash` is an encoded hash string and never
/// leaves the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl User {
    pub fn new(props: NewUserProps) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            email: props.email,
            password_hash: props.password_hash,
            first_name: props.first_name.trim().to_string(),
            last_name: props.last_name.trim().to_string(),
            role: props.role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_names_on_creation() {
        let user = User::new(NewUserProps {
            email: Email::parse("ada@example.com").unwrap(),
            password_hash: "hash".to_string(),
            first_name: "  Ada ".to_string(),
            last_name: " Lovelace".to_string(),
            role: UserRole::Customer,
        });

        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}

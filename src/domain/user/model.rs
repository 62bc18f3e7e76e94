//! User domain entity

use chrono::{DateTime, NaiveDate, Utc};

/// Member account.
///
/// Accounts are created inactive (unless auto-activation is configured) and
/// become active when an activation token is consumed. Deletion through the
/// API only clears `is_active`; rows are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub other_phone: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    /// Organization the member studies at
    pub university_id: Option<i32>,
    pub academic_level_id: Option<i32>,
    pub academic_field_id: Option<i32>,
    pub membership_end: Option<NaiveDate>,
    pub tickets: i32,
    pub is_active: bool,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash: password_hash.into(),
            first_name: String::new(),
            last_name: String::new(),
            phone: None,
            other_phone: None,
            birthdate: None,
            gender: None,
            university_id: None,
            academic_level_id: None,
            academic_field_id: None,
            membership_end: None,
            tickets: 0,
            is_active: false,
            is_staff: false,
            date_joined: Utc::now(),
            last_login: None,
        }
    }

    /// Activate the account (activation-token consumption or auto-activation).
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Soft-delete: the account is kept but can no longer authenticate.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

// ── Tests ──────────────────────────────────────────────────────

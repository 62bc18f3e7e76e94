//! User DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::user::User;

/// User API representation. The password hash never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub other_phone: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub university: Option<i32>,
    pub academic_level: Option<i32>,
    pub academic_field: Option<i32>,
    pub membership_end: Option<NaiveDate>,
    pub tickets: i32,
    pub is_active: bool,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            phone: u.phone,
            other_phone: u.other_phone,
            birthdate: u.birthdate,
            gender: u.gender,
            university: u.university_id,
            academic_level: u.academic_level_id,
            academic_field: u.academic_field_id,
            membership_end: u.membership_end,
            tickets: u.tickets,
            is_active: u.is_active,
            is_staff: u.is_staff,
            date_joined: u.date_joined,
            last_login: u.last_login,
        }
    }
}

/// A user plus an optional degraded-delivery warning
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: UserDto,
    /// Warning set when a notification email could not be delivered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Signup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub first_name: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub last_name: String,
    pub phone: Option<String>,
    pub other_phone: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub university: Option<i32>,
    pub academic_level: Option<i32>,
    pub academic_field: Option<i32>,
}

/// Profile update request. Absent fields are left untouched; `email`
/// triggers the confirmation-token flow instead of switching directly.
/// `tickets` and `membership_end` are admin-only.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub other_phone: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub university: Option<i32>,
    pub academic_level: Option<i32>,
    pub academic_field: Option<i32>,
    pub membership_end: Option<NaiveDate>,
    pub tickets: Option<i32>,
}

/// Account activation / email-change confirmation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ActivateRequest {
    pub activation_token: String,
}

/// Activation response: the activated user and a session token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivationResponse {
    pub token: String,
    pub user: UserDto,
}

/// Forgot-password request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
}

/// Password-change request carrying the emailed token
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    pub token: String,
    pub new_password: String,
}

//! User entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,

    #[sea_orm(nullable)]
    pub phone: Option<String>,
    #[sea_orm(nullable)]
    pub other_phone: Option<String>,
    #[sea_orm(nullable)]
    pub birthdate: Option<Date>,
    #[sea_orm(nullable)]
    pub gender: Option<String>,

    #[sea_orm(nullable)]
    pub university_id: Option<i32>,
    #[sea_orm(nullable)]
    pub academic_level_id: Option<i32>,
    #[sea_orm(nullable)]
    pub academic_field_id: Option<i32>,

    #[sea_orm(nullable)]
    pub membership_end: Option<Date>,

    pub tickets: i32,
    pub is_active: bool,
    pub is_staff: bool,

    pub date_joined: DateTimeUtc,
    #[sea_orm(nullable)]
    pub last_login: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
    #[sea_orm(has_many = "super::payment_profile::Entity")]
    PaymentProfiles,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl Related<super::payment_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

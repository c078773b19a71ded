use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// An instructor-submitted class. Status only moves through admin moderation;
/// `feedback` holds the denial payload verbatim and exists only for denied
/// classes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classes")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    pub class_name: String,
    pub image: Option<String>,
    pub price: f64,
    #[serde(rename = "availableSeat")]
    pub available_seats: i32,
    pub description: Option<String>,
    pub status: Status,
    pub feedback: Option<Json>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "class_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "denied")]
    Denied,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::selection::Entity")]
    Selection,
}

impl Related<super::selection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Selection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::packages;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = packages)]
pub struct PackageEntity {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub features: serde_json::Value,
    pub popular: bool,
    pub discord_role_id: Option<String>,
    pub payment_link: Option<String>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = packages)]
#[diesel(treat_none_as_null = true)]
pub struct InsertPackageEntity {
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub features: serde_json::Value,
    pub popular: bool,
    pub discord_role_id: Option<String>,
    pub payment_link: Option<String>,
}

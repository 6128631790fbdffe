use diesel::prelude::*;

use crate::infrastructure::postgres::schema::features;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = features)]
pub struct FeatureEntity {
    pub id: i32,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = features)]
pub struct InsertFeatureEntity {
    pub icon: String,
    pub title: String,
    pub description: String,
}

use diesel::prelude::*;

use crate::infrastructure::postgres::schema::testimonials;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = testimonials)]
pub struct TestimonialEntity {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: i32,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = testimonials)]
#[diesel(treat_none_as_null = true)]
pub struct InsertTestimonialEntity {
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: i32,
}

use diesel::prelude::*;

use crate::infrastructure::postgres::schema::faqs;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = faqs)]
pub struct FaqEntity {
    pub id: i32,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = faqs)]
pub struct InsertFaqEntity {
    pub question: String,
    pub answer: String,
}

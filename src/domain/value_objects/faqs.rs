use serde::{Deserialize, Serialize};

use crate::domain::entities::faqs::{FaqEntity, InsertFaqEntity};

#[derive(Debug, Clone, Serialize)]
pub struct FaqModel {
    pub id: i32,
    pub question: String,
    pub answer: String,
}

impl From<FaqEntity> for FaqModel {
    fn from(value: FaqEntity) -> Self {
        Self {
            id: value.id,
            question: value.question,
            answer: value.answer,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertFaqModel {
    pub question: String,
    pub answer: String,
}

impl InsertFaqModel {
    pub fn to_entity(self) -> InsertFaqEntity {
        InsertFaqEntity {
            question: self.question,
            answer: self.answer,
        }
    }
}

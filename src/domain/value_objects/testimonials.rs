use serde::{Deserialize, Serialize};

use crate::domain::entities::testimonials::{InsertTestimonialEntity, TestimonialEntity};

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialModel {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: i32,
}

impl From<TestimonialEntity> for TestimonialModel {
    fn from(value: TestimonialEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            role: value.role,
            content: value.content,
            rating: value.rating,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertTestimonialModel {
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
}

fn default_rating() -> i32 {
    5
}

impl InsertTestimonialModel {
    pub fn to_entity(self) -> InsertTestimonialEntity {
        InsertTestimonialEntity {
            name: self.name,
            role: self.role,
            content: self.content,
            rating: self.rating,
        }
    }
}

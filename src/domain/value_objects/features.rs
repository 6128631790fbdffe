use serde::{Deserialize, Serialize};

use crate::domain::entities::features::{FeatureEntity, InsertFeatureEntity};

#[derive(Debug, Clone, Serialize)]
pub struct FeatureModel {
    pub id: i32,
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl From<FeatureEntity> for FeatureModel {
    fn from(value: FeatureEntity) -> Self {
        Self {
            id: value.id,
            icon: value.icon,
            title: value.title,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertFeatureModel {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl InsertFeatureModel {
    pub fn to_entity(self) -> InsertFeatureEntity {
        InsertFeatureEntity {
            icon: self.icon,
            title: self.title,
            description: self.description,
        }
    }
}

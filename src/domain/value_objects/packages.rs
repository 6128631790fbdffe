use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::packages::{InsertPackageEntity, PackageEntity};

#[derive(Debug, Clone, Serialize)]
pub struct PackageModel {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub popular: bool,
    pub discord_role_id: Option<String>,
    pub payment_link: Option<String>,
}

impl From<PackageEntity> for PackageModel {
    fn from(value: PackageEntity) -> Self {
        // The features column predates the typed model; tolerate rows that
        // hold something other than a string array.
        let features = serde_json::from_value(value.features).unwrap_or_default();

        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
            features,
            popular: value.popular,
            discord_role_id: value.discord_role_id,
            payment_link: value.payment_link,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertPackageModel {
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    pub discord_role_id: Option<String>,
    pub payment_link: Option<String>,
}

impl InsertPackageModel {
    pub fn to_entity(self) -> InsertPackageEntity {
        InsertPackageEntity {
            name: self.name,
            price: self.price,
            description: self.description,
            features: json!(self.features),
            popular: self.popular,
            discord_role_id: self.discord_role_id,
            payment_link: self.payment_link,
        }
    }
}

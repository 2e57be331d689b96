use crate::{Identified, ResourceId};
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A training or exam center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    pub id: ResourceId,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub duration_hours: u32,
    /// First day of the next scheduled session, if one is planned.
    #[serde(default)]
    pub next_session: Option<Date>,
}

/// A vehicle of the rental fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: ResourceId,
    pub brand: String,
    pub model: String,
    pub daily_rate: Decimal,
    pub available: bool,
}

impl Identified for Center {
    fn resource_id(&self) -> &ResourceId {
        &self.id
    }
}

impl Identified for Formation {
    fn resource_id(&self) -> &ResourceId {
        &self.id
    }
}

impl Identified for Vehicle {
    fn resource_id(&self) -> &ResourceId {
        &self.id
    }
}

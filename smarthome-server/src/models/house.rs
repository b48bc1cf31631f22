use serde::{Deserialize, Serialize};

use super::Table;
use crate::domain::values::{
    Address, GpsCoordinates, HouseId, Latitude, Location, Longitude, ZipCode,
};
use crate::domain::{AggregateRoot, DomainError, House};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HouseRow {
    pub id: String,
    pub address: String,
    pub country: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&House> for HouseRow {
    fn from(house: &House) -> Self {
        let location = house.location();
        Self {
            id: house.identity().to_string(),
            address: location.address().to_string(),
            country: location.zip_code().country().to_string(),
            zip_code: location.zip_code().code().to_string(),
            latitude: location.gps().latitude().value(),
            longitude: location.gps().longitude().value(),
        }
    }
}

impl TryFrom<HouseRow> for House {
    type Error = DomainError;

    fn try_from(row: HouseRow) -> Result<Self, Self::Error> {
        let location = Location::new(
            Address::new(row.address)?,
            ZipCode::new(&row.country, row.zip_code)?,
            GpsCoordinates::new(Latitude::new(row.latitude)?, Longitude::new(row.longitude)?),
        );
        Ok(House::new(HouseId::new(row.id)?, location))
    }
}

#[derive(Clone)]
pub struct HouseTable;

impl Table for HouseTable {
    fn name(&self) -> &'static str {
        "houses"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS houses (
                id VARCHAR(64) PRIMARY KEY,
                address VARCHAR(255) NOT NULL,
                country VARCHAR(32) NOT NULL,
                zip_code VARCHAR(16) NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS houses;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}

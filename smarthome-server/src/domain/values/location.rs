use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;
use crate::domain::values::Address;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude(f64);

impl Latitude {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NotFinite("Latitude"));
        }
        if !(-90.0..=90.0).contains(&value) {
            return Err(DomainError::OutOfRange {
                field: "Latitude",
                min: -90.0,
                max: 90.0,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude(f64);

impl Longitude {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NotFinite("Longitude"));
        }
        if !(-180.0..=180.0).contains(&value) {
            return Err(DomainError::OutOfRange {
                field: "Longitude",
                min: -180.0,
                max: 180.0,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    latitude: Latitude,
    longitude: Longitude,
}

impl GpsCoordinates {
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self { latitude, longitude }
    }

    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    pub fn longitude(&self) -> Longitude {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Portugal,
    France,
    Usa,
    Canada,
}

impl Country {
    /// Zip code layout, `d` a digit and `a` a letter.
    fn zip_pattern(&self) -> &'static str {
        match self {
            Country::Portugal => "dddd-ddd",
            Country::France => "ddddd",
            Country::Usa => "ddddd-dddd",
            Country::Canada => "ada dad",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Portugal => "Portugal",
            Country::France => "France",
            Country::Usa => "USA",
            Country::Canada => "Canada",
        }
    }
}

impl FromStr for Country {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "portugal" => Ok(Country::Portugal),
            "france" => Ok(Country::France),
            "usa" => Ok(Country::Usa),
            "canada" => Ok(Country::Canada),
            _ => Err(DomainError::UnsupportedCountry(value.to_string())),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCode {
    country: Country,
    code: String,
}

impl ZipCode {
    pub fn new(country: &str, code: impl Into<String>) -> Result<Self, DomainError> {
        let country: Country = country.parse()?;
        let code = code.into();

        if !matches_pattern(country.zip_pattern(), &code) {
            return Err(DomainError::InvalidZipCode {
                country: country.to_string(),
                code,
            });
        }

        Ok(Self { country, code })
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    pattern.len() == value.len()
        && pattern.chars().zip(value.chars()).all(|(p, c)| match p {
            'd' => c.is_ascii_digit(),
            'a' => c.is_ascii_alphabetic(),
            other => other == c,
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    address: Address,
    zip_code: ZipCode,
    gps: GpsCoordinates,
}

impl Location {
    pub fn new(address: Address, zip_code: ZipCode, gps: GpsCoordinates) -> Self {
        Self {
            address,
            zip_code,
            gps,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }

    pub fn gps(&self) -> GpsCoordinates {
        self.gps
    }
}

use crate::domain::DomainError;

fn positive(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NotFinite(field));
    }
    if value <= 0.0 {
        return Err(DomainError::NotPositive(field));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(f64);

impl Length {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        positive("Length", value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Width(f64);

impl Width {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        positive("Width", value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Height(f64);

impl Height {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        positive("Height", value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: Length,
    pub width: Width,
    pub height: Height,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, DomainError> {
        Ok(Self {
            length: Length::new(length)?,
            width: Width::new(width)?,
            height: Height::new(height)?,
        })
    }
}

/// Any integer, basements included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FloorNumber(i32);

impl FloorNumber {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationStatus(bool);

impl ActivationStatus {
    pub fn active() -> Self {
        Self(true)
    }

    pub fn inactive() -> Self {
        Self(false)
    }

    pub fn is_active(&self) -> bool {
        self.0
    }
}

impl From<bool> for ActivationStatus {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_must_be_positive() {
        assert!(Dimensions::new(4.0, 3.0, 2.5).is_ok());
        assert_eq!(Dimensions::new(0.0, 3.0, 2.5), Err(DomainError::NotPositive("Length")));
        assert_eq!(Dimensions::new(4.0, -1.0, 2.5), Err(DomainError::NotPositive("Width")));
        assert_eq!(
            Dimensions::new(4.0, 3.0, f64::INFINITY),
            Err(DomainError::NotFinite("Height"))
        );
    }

    #[test]
    fn test_negative_floor_is_allowed() {
        assert_eq!(FloorNumber::new(-2).value(), -2);
    }
}

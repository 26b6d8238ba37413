//! Vehicle domain entity

/// A registered vehicle
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// Plate number, immutable identity key
    pub plate_number: String,
    /// Driver's full name
    pub driver_name: String,
    /// Driver's contact phone
    pub phone_number: String,
}

impl Vehicle {
    pub fn new(
        plate_number: impl Into<String>,
        driver_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            plate_number: plate_number.into(),
            driver_name: driver_name.into(),
            phone_number: phone_number.into(),
        }
    }
}

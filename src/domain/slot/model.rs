//! Parking slot domain entity

/// Slot availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Free and bookable
    Available,
    /// Holds a vehicle with an open occupancy record
    Occupied,
    /// Taken out of service by an operator
    Maintenance,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(Self::Available),
            "Occupied" => Some(Self::Occupied),
            "Maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

/// A physical parking space
#[derive(Debug, Clone)]
pub struct ParkingSlot {
    /// Slot identity code (e.g. "A1"), immutable
    pub slot_number: String,
    /// Current availability status
    pub status: SlotStatus,
}

impl ParkingSlot {
    pub fn new(slot_number: impl Into<String>, status: SlotStatus) -> Self {
        Self {
            slot_number: slot_number.into(),
            status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            SlotStatus::Available,
            SlotStatus::Occupied,
            SlotStatus::Maintenance,
        ] {
            assert_eq!(SlotStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_string_is_rejected() {
        assert_eq!(SlotStatus::from_str("Free"), None);
        assert_eq!(SlotStatus::from_str("available"), None);
        assert_eq!(SlotStatus::from_str(""), None);
    }

    #[test]
    fn only_available_slots_accept_vehicles() {
        assert!(ParkingSlot::new("A1", SlotStatus::Available).is_available());
        assert!(!ParkingSlot::new("A2", SlotStatus::Occupied).is_available());
        assert!(!ParkingSlot::new("A3", SlotStatus::Maintenance).is_available());
    }
}

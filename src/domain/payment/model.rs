//! Payment domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// An amount collected against a parking record. Append-only; the amount is
/// whatever the operator recorded and is not reconciled with the computed
/// fare.
#[derive(Debug, Clone)]
pub struct Payment {
    /// Sequential payment ID assigned by the store
    pub id: i32,
    /// The parking record this payment was collected for
    pub record_id: i32,
    /// Amount collected
    pub amount_paid: Decimal,
    /// When the payment was taken
    pub payment_time: DateTime<Utc>,
}

/// Payment enriched with its record and driver context for listings
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    pub payment: Payment,
    pub plate_number: String,
    pub driver_name: String,
    pub phone_number: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
}

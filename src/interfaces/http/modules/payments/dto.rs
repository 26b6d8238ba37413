//! Payment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{Bill, DailyReport};
use crate::domain::payment::PaymentDetails;

/// Payment enriched with its record and driver context
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i32,
    pub record_id: i32,
    pub amount_paid: Decimal,
    pub payment_time: DateTime<Utc>,
    pub plate_number: String,
    pub driver_name: String,
    pub phone_number: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
}

impl From<PaymentDetails> for PaymentResponse {
    fn from(d: PaymentDetails) -> Self {
        Self {
            id: d.payment.id,
            record_id: d.payment.record_id,
            amount_paid: d.payment.amount_paid,
            payment_time: d.payment.payment_time,
            plate_number: d.plate_number,
            driver_name: d.driver_name,
            phone_number: d.phone_number,
            entry_time: d.entry_time,
            exit_time: d.exit_time,
            duration_minutes: d.duration_minutes,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentRequest {
    pub record_id: i32,
    pub amount_paid: Decimal,
    /// Defaults to the server clock when omitted
    pub payment_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentCreatedResponse {
    pub payment_id: i32,
}

/// Revenue summary for one calendar date, or for the whole log
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyReportResponse {
    /// The reported date, or "All time" when none was given
    pub date: String,
    pub total_payments: u64,
    pub total_amount: Decimal,
    pub payments: Vec<PaymentResponse>,
}

impl From<DailyReport> for DailyReportResponse {
    fn from(r: DailyReport) -> Self {
        Self {
            date: r
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "All time".to_string()),
            total_payments: r.payments.len() as u64,
            total_amount: r.total_amount,
            payments: r.payments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Bill for one parking record: stored payment if any, computed fee otherwise
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillResponse {
    pub record_id: i32,
    pub plate_number: String,
    pub driver_name: String,
    pub slot_number: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub duration_minutes: i64,
    pub billed_hours: i64,
    pub rate_per_hour: i64,
    pub amount: Decimal,
    /// "Paid" when a payment row exists, "Pending" otherwise
    pub status: String,
    pub payment_time: Option<DateTime<Utc>>,
}

impl From<Bill> for BillResponse {
    fn from(b: Bill) -> Self {
        Self {
            record_id: b.record_id,
            plate_number: b.plate_number,
            driver_name: b.driver_name,
            slot_number: b.slot_number,
            entry_time: b.entry_time,
            exit_time: b.exit_time,
            duration_minutes: b.duration_minutes,
            billed_hours: b.billed_hours,
            rate_per_hour: b.rate_per_hour,
            amount: b.amount,
            status: b.status,
            payment_time: b.payment_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal::Decimal;

    fn bill(amount: Decimal, status: &str, payment_time: Option<DateTime<Utc>>) -> Bill {
        Bill {
            record_id: 7,
            plate_number: "ABC-123".to_string(),
            driver_name: "Jane Doe".to_string(),
            slot_number: "A1".to_string(),
            entry_time: Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap(),
            exit_time: Some(Utc.with_ymd_and_hms(2024, 3, 10, 10, 1, 0).unwrap()),
            duration_minutes: 61,
            billed_hours: 2,
            rate_per_hour: 500,
            amount,
            status: status.to_string(),
            payment_time,
        }
    }

    #[test]
    fn report_with_date_is_labeled_with_it() {
        let report = DailyReport {
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
            payments: vec![],
            total_amount: Decimal::ZERO,
        };
        let resp = DailyReportResponse::from(report);
        assert_eq!(resp.date, "2024-03-10");
        assert_eq!(resp.total_payments, 0);
    }

    #[test]
    fn report_without_date_is_labeled_all_time() {
        let report = DailyReport {
            date: None,
            payments: vec![],
            total_amount: Decimal::from(1500),
        };
        let resp = DailyReportResponse::from(report);
        assert_eq!(resp.date, "All time");
        assert_eq!(resp.total_amount, Decimal::from(1500));
    }

    #[test]
    fn paid_bill_keeps_the_stored_amount() {
        let paid_at = Utc.with_ymd_and_hms(2024, 3, 10, 10, 5, 0).unwrap();
        let resp = BillResponse::from(bill(Decimal::from(450), "Paid", Some(paid_at)));

        assert_eq!(resp.amount, Decimal::from(450));
        assert_eq!(resp.status, "Paid");
        assert_eq!(resp.payment_time, Some(paid_at));
    }

    #[test]
    fn pending_bill_carries_the_computed_fee() {
        let resp = BillResponse::from(bill(Decimal::from(1000), "Pending", None));

        assert_eq!(resp.amount, Decimal::from(1000));
        assert_eq!(resp.status, "Pending");
        assert_eq!(resp.billed_hours, 2);
        assert_eq!(resp.rate_per_hour, 500);
        assert!(resp.payment_time.is_none());
    }
}

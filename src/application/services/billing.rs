//! Billing service: payments, the daily revenue report and printable bills

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::payment::{Payment, PaymentDetails};
use crate::domain::record::{FareBreakdown, RATE_PER_HOUR};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};

/// Revenue summary for one calendar date, or for the whole log when no date
/// was requested.
#[derive(Debug, Clone)]
pub struct DailyReport {
    /// The requested date; None means the report covers everything
    pub date: Option<NaiveDate>,
    pub payments: Vec<PaymentDetails>,
    pub total_amount: Decimal,
}

/// Printable bill for one parking record.
///
/// When a payment exists the bill reports the collected amount and date with
/// status "Paid"; otherwise the amount falls back to the computed fee on the
/// stored duration and the status is "Pending".
#[derive(Debug, Clone)]
pub struct Bill {
    pub record_id: i32,
    pub plate_number: String,
    pub driver_name: String,
    pub slot_number: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    /// Stored duration; 0 while the vehicle is still parked
    pub duration_minutes: i64,
    pub billed_hours: i64,
    pub rate_per_hour: i64,
    pub amount: Decimal,
    pub status: String,
    pub payment_time: Option<DateTime<Utc>>,
}

/// Orchestrates the payment log and derived reporting.
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Record a collected amount against a parking record. The record is not
    /// verified here; the payment time defaults to now when omitted.
    pub async fn record_payment(
        &self,
        record_id: i32,
        amount_paid: Decimal,
        payment_time: Option<DateTime<Utc>>,
    ) -> DomainResult<i32> {
        let payment_time = payment_time.unwrap_or_else(Utc::now);
        let payment_id = self
            .repos
            .payments()
            .create(record_id, amount_paid, payment_time)
            .await?;
        info!(payment_id, record_id, %amount_paid, "Payment recorded");
        Ok(payment_id)
    }

    pub async fn list_payments(&self) -> DomainResult<Vec<PaymentDetails>> {
        self.repos.payments().find_all_detailed().await
    }

    pub async fn get_payment(&self, payment_id: i32) -> DomainResult<Option<PaymentDetails>> {
        self.repos.payments().find_detailed_by_id(payment_id).await
    }

    /// Payments for one calendar date, or the full log when `date` is None,
    /// with the summed amount.
    pub async fn daily_report(&self, date: Option<NaiveDate>) -> DomainResult<DailyReport> {
        let payments = match date {
            Some(d) => self.repos.payments().find_detailed_on_date(d).await?,
            None => self.repos.payments().find_all_detailed().await?,
        };
        let total_amount = payments
            .iter()
            .map(|p| p.payment.amount_paid)
            .sum::<Decimal>();

        Ok(DailyReport {
            date,
            payments,
            total_amount,
        })
    }

    /// Build the bill for a record: stored fee data plus the first payment
    /// collected against it, if any.
    pub async fn generate_bill(&self, record_id: i32) -> DomainResult<Bill> {
        let details = self
            .repos
            .records()
            .find_detailed_by_id(record_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found("Parking record", "id", record_id.to_string())
            })?;

        let payment = self.repos.payments().find_first_by_record(record_id).await?;

        let record = details.record;
        let fare = FareBreakdown::for_duration_minutes(record.duration_minutes.unwrap_or(0));

        let (amount, status, payment_time) = match payment {
            Some(Payment {
                amount_paid,
                payment_time,
                ..
            }) => (amount_paid, "Paid".to_string(), Some(payment_time)),
            None => (Decimal::from(fare.amount), "Pending".to_string(), None),
        };

        Ok(Bill {
            record_id: record.id,
            plate_number: record.plate_number,
            driver_name: details.driver_name,
            slot_number: record.slot_number,
            entry_time: record.entry_time,
            exit_time: record.exit_time,
            duration_minutes: fare.duration_minutes,
            billed_hours: fare.billed_hours,
            rate_per_hour: RATE_PER_HOUR,
            amount,
            status,
            payment_time,
        })
    }
}

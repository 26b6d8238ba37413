//! Payment repository interface

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::model::{Payment, PaymentDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Inserts unconditionally; a missing record surfaces only as the
    /// store's foreign-key rejection. Returns the new payment id.
    async fn create(
        &self,
        record_id: i32,
        amount_paid: Decimal,
        payment_time: DateTime<Utc>,
    ) -> DomainResult<i32>;
    /// All payments with record/driver context, payment time descending.
    async fn find_all_detailed(&self) -> DomainResult<Vec<PaymentDetails>>;
    /// Payments whose payment time falls on the given calendar date (UTC),
    /// payment time descending.
    async fn find_detailed_on_date(&self, date: NaiveDate) -> DomainResult<Vec<PaymentDetails>>;
    async fn find_detailed_by_id(&self, id: i32) -> DomainResult<Option<PaymentDetails>>;
    /// First payment recorded against the given record, if any.
    async fn find_first_by_record(&self, record_id: i32) -> DomainResult<Option<Payment>>;
}

//! SeaORM implementation of PaymentRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::payment::{Payment, PaymentDetails, PaymentRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{parking_record, payment, vehicle};

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach record and driver context to (payment, record) pairs coming out
    /// of a joined query. Vehicles are fetched in one batched lookup.
    async fn assemble_details(
        &self,
        rows: Vec<(payment::Model, Option<parking_record::Model>)>,
    ) -> DomainResult<Vec<PaymentDetails>> {
        let plates: Vec<String> = rows
            .iter()
            .filter_map(|(_, r)| r.as_ref().map(|r| r.plate_number.clone()))
            .collect();
        let vehicles: HashMap<String, vehicle::Model> = vehicle::Entity::find()
            .filter(vehicle::Column::PlateNumber.is_in(plates))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|v| (v.plate_number.clone(), v))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(pay, rec)| {
                let rec = rec?;
                let veh = vehicles.get(&rec.plate_number)?;
                Some(PaymentDetails {
                    payment: model_to_domain(pay),
                    plate_number: rec.plate_number.clone(),
                    driver_name: veh.driver_name.clone(),
                    phone_number: veh.phone_number.clone(),
                    entry_time: rec.entry_time,
                    exit_time: rec.exit_time,
                    duration_minutes: rec.duration_minutes,
                })
            })
            .collect())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: payment::Model) -> Payment {
    Payment {
        id: m.id,
        record_id: m.record_id,
        amount_paid: m.amount_paid,
        payment_time: m.payment_time,
    }
}

// ── PaymentRepository impl ──────────────────────────────────────

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn create(
        &self,
        record_id: i32,
        amount_paid: Decimal,
        payment_time: DateTime<Utc>,
    ) -> DomainResult<i32> {
        debug!("Recording payment of {} for record {}", amount_paid, record_id);

        // No existence pre-check: a dangling record id is rejected by the
        // foreign key and surfaces as a storage failure.
        let model = payment::ActiveModel {
            record_id: Set(record_id),
            amount_paid: Set(amount_paid),
            payment_time: Set(payment_time),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await?;
        Ok(inserted.id)
    }

    async fn find_all_detailed(&self) -> DomainResult<Vec<PaymentDetails>> {
        let rows = payment::Entity::find()
            .find_also_related(parking_record::Entity)
            .order_by_desc(payment::Column::PaymentTime)
            .all(&self.db)
            .await?;
        self.assemble_details(rows).await
    }

    async fn find_detailed_on_date(&self, date: NaiveDate) -> DomainResult<Vec<PaymentDetails>> {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = (date + Days::new(1)).and_time(NaiveTime::MIN).and_utc();

        let rows = payment::Entity::find()
            .filter(payment::Column::PaymentTime.gte(start))
            .filter(payment::Column::PaymentTime.lt(end))
            .find_also_related(parking_record::Entity)
            .order_by_desc(payment::Column::PaymentTime)
            .all(&self.db)
            .await?;
        self.assemble_details(rows).await
    }

    async fn find_detailed_by_id(&self, id: i32) -> DomainResult<Option<PaymentDetails>> {
        let row = payment::Entity::find_by_id(id)
            .find_also_related(parking_record::Entity)
            .one(&self.db)
            .await?;
        match row {
            Some(pair) => Ok(self.assemble_details(vec![pair]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_first_by_record(&self, record_id: i32) -> DomainResult<Option<Payment>> {
        let model = payment::Entity::find()
            .filter(payment::Column::RecordId.eq(record_id))
            .order_by_asc(payment::Column::Id)
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }
}

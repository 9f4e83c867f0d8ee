use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use super::RecordSink;
use crate::db::queries;
use crate::models::BookingRecord;

/// Local stand-in for the spreadsheet, same row shape.
pub struct SqliteSink {
    db: Arc<Mutex<Connection>>,
}

impl SqliteSink {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordSink for SqliteSink {
    async fn append_row(&self, record: &BookingRecord) -> anyhow::Result<()> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("database lock poisoned"))?;
        let id = queries::insert_train_booking(&db, record)?;
        tracing::debug!(id = %id, "train booking stored");
        Ok(())
    }
}

pub mod sheets;
pub mod sqlite;

use async_trait::async_trait;

use crate::models::BookingRecord;

/// Durable destination for completed bookings. Rows are appended, never
/// updated or deduplicated.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn append_row(&self, record: &BookingRecord) -> anyhow::Result<()>;

    /// Failures stop here: they are logged and reported as `false`.
    async fn append(&self, record: &BookingRecord) -> bool {
        match self.append_row(record).await {
            Ok(()) => {
                tracing::info!(phone = %record.phone, date = %record.date, "booking row appended");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, phone = %record.phone, "sheet error");
                false
            }
        }
    }
}

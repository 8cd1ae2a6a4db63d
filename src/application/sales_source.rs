// Data-source trait for the monthly sales dataset
use crate::domain::sales::SalesRecord;
use async_trait::async_trait;

/// Loads the full dataset, already normalized and validated. Called once at
/// startup; the loaded records are immutable afterwards.
#[async_trait]
pub trait SalesDataSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<SalesRecord>>;
}

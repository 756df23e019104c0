use crate::domain::model::ContactForm;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
}

/// Outbound delivery of a validated contact-form submission. The page only
/// ever talks to this boundary; the default adapter is a logging no-op, so
/// real delivery can be swapped in without touching rendering code.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<()>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

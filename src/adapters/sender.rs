use crate::domain::model::ContactForm;
use crate::domain::ports::MessageSender;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Default `MessageSender`: acknowledges the submission without delivering
/// it anywhere. The log line is the only observable effect.
#[derive(Debug, Clone, Default)]
pub struct NoopSender;

#[async_trait]
impl MessageSender for NoopSender {
    async fn send(&self, form: &ContactForm) -> Result<()> {
        tracing::info!(
            from = %form.email,
            subject = %form.subject,
            "Contact message accepted (no delivery backend configured)"
        );
        Ok(())
    }
}

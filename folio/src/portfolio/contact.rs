use std::time::Duration;

use tracing::info;
use validator::Validate;

use crate::config::ContactConfig;
use crate::error::Result;
use crate::models::{ContactReceipt, ContactSubmission};

/// Accepts contact-form messages.
///
/// Submissions are validated and acknowledged after a simulated delivery
/// delay. Nothing is stored or forwarded; the receipt and a log line are the
/// only trace.
#[derive(Debug, Clone)]
pub struct ContactDesk {
    ack_delay: Duration,
}

impl ContactDesk {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            ack_delay: Duration::from_millis(config.ack_delay_ms),
        }
    }

    pub async fn submit(&self, submission: &ContactSubmission) -> Result<ContactReceipt> {
        submission.validate()?;

        tokio::time::sleep(self.ack_delay).await;

        let receipt = ContactReceipt::new();
        info!(
            receipt_id = %receipt.id,
            message_chars = submission.message.chars().count(),
            "Contact message received"
        );
        Ok(receipt)
    }
}

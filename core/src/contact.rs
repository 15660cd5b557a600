use crate::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Contact view scratch state. Submission is simulated; nothing leaves the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Acknowledgement for a simulated submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub submission: ContactForm,
    pub received_at: DateTime<Utc>,
}

impl ContactForm {
    /// Every field is required; the first blank one is reported
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        match fields.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((field, _)) => Err(FolioError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Validate, hand back a receipt and clear the form.
    /// On error the form is left as it was.
    pub fn submit(&mut self) -> Result<ContactReceipt> {
        self.validate()?;
        let submission = std::mem::take(self);
        info!(target: "contact", subject = %submission.subject, "contact message received");
        Ok(ContactReceipt {
            submission,
            received_at: Utc::now(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

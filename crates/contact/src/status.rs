/// Outcome banner shown in the form panel. Replaced wholesale on every
/// new attempt, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Error(_))
    }

    /// CSS class for the status banner.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Success(_) => "success",
            SubmissionStatus::Error(_) => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Success(text) | SubmissionStatus::Error(text) => text,
        }
    }
}

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

pub fn send_failed_message(contact_address: &str) -> String {
    format!("Failed to send message. Please try again later or email me directly at {contact_address}.")
}

pub fn not_configured_message(contact_address: &str) -> String {
    format!("The contact form is not set up yet. Please reach out directly at {contact_address}.")
}

use folio_relay::SendForm;
use validator::Validate;

/// One in-progress contact message. Created empty, mutated one field at a
/// time, and reset only after a successful send so a failed attempt never
/// loses typed input.
///
/// `name`, `email` and `message` must be non-empty before a send is
/// permitted. The email address is deliberately not format-checked.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Field identifiers for [`ContactSubmission::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactSubmission {
    /// Replace exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn as_send_form(&self) -> SendForm {
        SendForm {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_must_be_non_empty() {
        let submission = ContactSubmission {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            subject: String::new(),
            message: "hi".to_string(),
        };
        assert!(submission.validate().is_ok());

        let mut missing_name = submission.clone();
        missing_name.name.clear();
        assert!(missing_name.validate().is_err());

        let mut missing_email = submission.clone();
        missing_email.email.clear();
        assert!(missing_email.validate().is_err());

        let mut missing_message = submission;
        missing_message.message.clear();
        assert!(missing_message.validate().is_err());
    }

    #[test]
    fn test_email_format_is_not_checked() {
        let submission = ContactSubmission {
            name: "A".to_string(),
            email: "not-an-address".to_string(),
            subject: String::new(),
            message: "hi".to_string(),
        };

        assert!(submission.validate().is_ok());
    }
}

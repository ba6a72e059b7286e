#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{ContactForm, Field};
use folio_relay::{Relay, RelayConfig, RelayError, SendForm, SendResponse};

pub const CONTACT_ADDRESS: &str = "hello@folio.localhost";

/// Deterministic relay stand-in: records every call and answers with a
/// canned outcome.
pub struct StubRelay {
    response: Result<u16, String>,
    calls: AtomicUsize,
    sent: Mutex<Option<SendForm>>,
    init_keys: Mutex<Vec<String>>,
}

impl StubRelay {
    pub fn ok() -> Arc<Self> {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(status),
            calls: AtomicUsize::new(0),
            sent: Mutex::new(None),
            init_keys: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Err("connection reset".to_string()),
            calls: AtomicUsize::new(0),
            sent: Mutex::new(None),
            init_keys: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_sent(&self) -> Option<SendForm> {
        self.sent.lock().unwrap().clone()
    }

    pub fn init_keys(&self) -> Vec<String> {
        self.init_keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl Relay for StubRelay {
    fn init(&self, public_key: &str) {
        self.init_keys.lock().unwrap().push(public_key.to_string());
    }

    async fn send_form(
        &self,
        _service_id: &str,
        _template_id: &str,
        form: &SendForm,
        _public_key: &str,
    ) -> Result<SendResponse, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.sent.lock().unwrap() = Some(form.clone());

        match &self.response {
            Ok(status) => Ok(SendResponse { status: *status }),
            Err(message) => Err(RelayError::Server(message.clone())),
        }
    }
}

pub fn relay_config() -> RelayConfig {
    RelayConfig {
        service_id: "service_demo".to_string(),
        template_id: "template_demo".to_string(),
        public_key: "pk_demo".to_string(),
    }
}

/// Form with complete credentials, already initialized.
pub fn mounted_form(relay: Arc<StubRelay>) -> ContactForm {
    let mut form = ContactForm::new(relay, relay_config(), CONTACT_ADDRESS);
    form.initialize_service();
    form
}

/// Form mounted without any relay credentials.
pub fn unconfigured_form(relay: Arc<StubRelay>) -> ContactForm {
    let mut form = ContactForm::new(relay, RelayConfig::default(), CONTACT_ADDRESS);
    form.initialize_service();
    form
}

pub fn fill(form: &mut ContactForm) {
    form.update_field(Field::Name, "A");
    form.update_field(Field::Email, "a@x.com");
    form.update_field(Field::Subject, "");
    form.update_field(Field::Message, "hi");
}

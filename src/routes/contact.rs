use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use folio_contact::{ContactForm, ContactSubmission, Field, SubmissionStatus};
use serde::Deserialize;

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub submission: ContactSubmission,
    pub status: SubmissionStatus,
    pub disabled: bool,
    pub sending: bool,
    pub contact_address: String,
}

impl ContactTemplate {
    fn from_form(form: &ContactForm, contact_address: String) -> Self {
        Self {
            submission: form.submission().clone(),
            status: form.status().clone(),
            disabled: !form.is_ready(),
            sending: form.is_sending(),
            contact_address,
        }
    }
}

/// One form instance per request pass, mounted the same way the page is.
fn mount_form(state: &AppState) -> ContactForm {
    let mut form = ContactForm::new(
        state.relay.clone(),
        state.config.relay.clone(),
        state.config.site.contact_address.clone(),
    );
    form.initialize_service();
    form
}

pub async fn page(template: Template, State(state): State<AppState>) -> impl IntoResponse {
    let form = mount_form(&state);
    let contact_address = template.config.site.contact_address.clone();

    template.render(ContactTemplate::from_form(&form, contact_address))
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

pub async fn action(
    template: Template,
    State(state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let mut form = mount_form(&state);
    form.update_field(Field::Name, input.name);
    form.update_field(Field::Email, input.email);
    form.update_field(Field::Subject, input.subject);
    form.update_field(Field::Message, input.message);

    form.submit().await;

    let contact_address = template.config.site.contact_address.clone();

    template.render(ContactTemplate::from_form(&form, contact_address))
}

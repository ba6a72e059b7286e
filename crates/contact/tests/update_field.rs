use folio_contact::Field;

mod helpers;

#[test]
fn test_update_field_replaces_only_the_named_field() {
    let relay = helpers::StubRelay::ok();
    let mut form = helpers::mounted_form(relay);

    form.update_field(Field::Name, "A");
    form.update_field(Field::Email, "a@x.com");
    form.update_field(Field::Message, "hi");

    let submission = form.submission();
    assert_eq!(submission.name, "A");
    assert_eq!(submission.email, "a@x.com");
    assert_eq!(submission.subject, "");
    assert_eq!(submission.message, "hi");
}

#[test]
fn test_update_field_last_write_wins() {
    let relay = helpers::StubRelay::ok();
    let mut form = helpers::mounted_form(relay);

    form.update_field(Field::Name, "first");
    form.update_field(Field::Name, "second");
    form.update_field(Field::Subject, "question");

    let submission = form.submission();
    assert_eq!(submission.name, "second");
    assert_eq!(submission.subject, "question");
    assert_eq!(submission.email, "");
}

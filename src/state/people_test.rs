use super::*;

fn record() -> PersonRecord {
    PersonRecord {
        id: 8,
        username: Some("lsoto".to_owned()),
        email: Some("l@x.pe".to_owned()),
        full_name: "Luis".to_owned(),
        last_names: None,
        dni: Some("12345678".to_owned()),
        address: None,
        phone: Some("987654321".to_owned()),
        status: Some(0),
    }
}

// =============================================================
// Phone rules
// =============================================================

#[test]
fn phone_hint_flags_letters_and_wrong_length() {
    assert_eq!(phone_hint(""), None);
    assert_eq!(phone_hint("987654321"), None);
    assert_eq!(phone_hint("98a"), Some("Digits only."));
    assert_eq!(phone_hint("98765"), Some("The phone number must have 9 digits."));
    assert_eq!(phone_hint("9876543210"), Some("The phone number must have 9 digits."));
}

// =============================================================
// PersonForm
// =============================================================

#[test]
fn form_copies_record_and_status() {
    let form = PersonForm::from_record(&record());
    assert_eq!(form.full_name, "Luis");
    assert_eq!(form.last_names, "");
    assert!(!form.active);
}

#[test]
fn blank_name_is_rejected() {
    let form = PersonForm { full_name: "  ".to_owned(), ..PersonForm::from_record(&record()) };
    assert_eq!(form.validate(), Err("Enter a name."));
}

#[test]
fn client_update_carries_active_flag() {
    let mut form = PersonForm::from_record(&record());
    form.active = true;
    let update = form.client_update().unwrap();
    assert_eq!(update.status, 1);
    assert_eq!(update.person.dni, "12345678");
}

#[test]
fn merge_writes_trimmed_values_back() {
    let mut listed = record();
    let form = PersonForm { full_name: " Luis Soto ".to_owned(), active: true, ..PersonForm::from_record(&listed) };
    form.merge_into(&mut listed);
    assert_eq!(listed.full_name, "Luis Soto");
    assert!(listed.is_active());
}

// =============================================================
// ProfileForm
// =============================================================

#[test]
fn profile_requires_name_then_nine_digit_phone() {
    let mut form = ProfileForm { full_name: String::new(), phone: "987654321".to_owned(), ..ProfileForm::default() };
    assert_eq!(form.validate(), Err("Enter your name."));
    form.full_name = "Ada".to_owned();
    for phone in ["", "12345678", "1234567890", "12345678a"] {
        form.phone = phone.to_owned();
        assert_eq!(form.validate(), Err("Enter a 9-digit phone number."), "{phone}");
    }
    form.phone = " 912345678 ".to_owned();
    assert_eq!(form.validate().unwrap().phone, "912345678");
}

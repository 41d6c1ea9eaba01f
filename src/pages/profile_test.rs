use super::*;

#[test]
fn identity_fills_blanks_with_a_dash() {
    let profile = Profile {
        username: Some("ana".into()),
        email: Some(String::new()),
        dni: None,
        ..Profile::default()
    };
    let rows = identity(&profile);
    assert_eq!(rows[0], ("Username", "ana".to_owned()));
    assert_eq!(rows[1], ("Email", "-".to_owned()));
    assert_eq!(rows[2], ("DNI", "-".to_owned()));
}

#[test]
fn editable_fields_write_back_to_the_form() {
    let mut form = ProfileForm::default();
    for (label, _, set) in FIELDS {
        set(&mut form, format!("{label}!"));
    }
    assert_eq!(form.full_name, "Name!");
    assert_eq!(form.last_names, "Last names!");
    assert_eq!(form.address, "Address!");
    assert_eq!((FIELDS[0].1)(&form), "Name!");
}

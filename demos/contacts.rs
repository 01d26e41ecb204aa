use mailtrap::models::contacts::{
    ContactFieldDataType, ContactFields, ContactListParams, CreateContactFieldParams,
    CreateContactParams, FieldValue, ImportContactParams, UpdateContactParams,
};

pub fn main() -> mailtrap::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("mailtrap")).init();

    let client = mailtrap::ClientConfig::from_env()?.to_client()?;
    let contacts_api = client.contacts_api()?;

    let list = contacts_api
        .contact_lists()
        .create(&ContactListParams::new("Rust demo list"))?;
    let field = contacts_api.contact_fields().create(&CreateContactFieldParams::new(
        "Nickname",
        ContactFieldDataType::Text,
        "nickname",
    ))?;

    let fields = ContactFields::from([(field.merge_tag.clone(), FieldValue::from("Johnny"))]);
    let contact = contacts_api.contacts().create(
        &CreateContactParams::new("john.smith@example.com")
            .with_fields(fields)
            .with_list_ids(vec![list.id]),
    )?;
    println!("Created contact {} ({:?})", contact.email, contact.status);

    let contact = contacts_api.contacts().update(
        &contact.email,
        &UpdateContactParams::builder().unsubscribed(true).build()?,
    )?;
    println!("Contact is now {:?}", contact.status);

    let import = contacts_api.contact_imports().import_contacts(&[
        ImportContactParams::new("customer1@example.com").with_list_ids_included(vec![list.id]),
        ImportContactParams::new("customer2@example.com"),
    ])?;
    println!("Import {} is {:?}", import.id, import.status);

    contacts_api.contacts().delete(&contact.id)?;
    contacts_api.contact_fields().delete(field.id)?;
    contacts_api.contact_lists().delete(list.id)?;

    Ok(())
}

mod common;

use common::{account_path, StubServer};
use mailtrap::{
    models::{
        contacts::{
            ContactFieldDataType, ContactImportStatus, ContactListParams, ContactStatus,
            CreateContactFieldParams, CreateContactParams, ImportContactParams,
            UpdateContactFieldParams, UpdateContactParams,
        },
        ObjectId,
    },
    Error,
};
use serde_json::{json, Value};

fn contact(email: &str) -> Value {
    json!({"data": {
        "id": "018dd5e3-f6d2-7c00-8f9b-e5c3f2d8a132",
        "status": "subscribed",
        "email": email,
        "fields": {},
        "list_ids": [],
        "created_at": 1742820600230_i64,
        "updated_at": 1742820600230_i64
    }})
}

#[test]
fn create_contact_sends_only_email() {
    let server = StubServer::start();
    server.respond_json(201, contact("a@b.com"));

    let created = server
        .client()
        .contacts_api()
        .unwrap()
        .contacts()
        .create(&CreateContactParams::new("a@b.com"))
        .unwrap();

    assert_eq!(created.email, "a@b.com");
    assert_eq!(created.id, "018dd5e3-f6d2-7c00-8f9b-e5c3f2d8a132");
    assert_eq!(created.status, ContactStatus::Subscribed);

    let request = server.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, account_path("contacts"));
    assert_eq!(request.json(), json!({"contact": {"email": "a@b.com"}}));
}

#[test]
fn contact_email_is_encoded_in_path() {
    let server = StubServer::start();
    let contacts = server.client().contacts_api().unwrap().contacts();

    server.respond_json(200, contact("john+smith@example.com"));
    contacts.get_by_id("john+smith@example.com").unwrap();
    assert_eq!(
        server.last_request().path,
        account_path("contacts/john%2Bsmith%40example.com")
    );

    server.respond_json(200, contact("john+smith@example.com"));
    let params = UpdateContactParams::builder()
        .unsubscribed(true)
        .list_ids_excluded(vec![3])
        .build()
        .unwrap();
    contacts.update("john+smith@example.com", &params).unwrap();
    let request = server.last_request();
    assert_eq!(request.method, "PATCH");
    assert_eq!(
        request.json(),
        json!({"contact": {"list_ids_excluded": [3], "unsubscribed": true}})
    );
}

#[test]
fn delete_contact_without_body_echoes_requested_id() {
    let server = StubServer::start();
    server.respond(204, "");

    let deleted = server
        .client()
        .contacts_api()
        .unwrap()
        .contacts()
        .delete("a@b.com")
        .unwrap();

    assert_eq!(deleted.id, ObjectId::from("a@b.com"));
    assert_eq!(server.last_request().path, account_path("contacts/a%40b.com"));
}

#[test]
fn contact_fields_crud() {
    let server = StubServer::start();
    let fields = server.client().contacts_api().unwrap().contact_fields();
    let field = json!({"id": 4134, "name": "First name", "data_type": "text", "merge_tag": "first_name"});

    server.respond_json(200, json!([field.clone()]));
    assert_eq!(fields.get_list().unwrap()[0].data_type, ContactFieldDataType::Text);
    assert_eq!(server.last_request().path, account_path("contacts/fields"));

    server.respond_json(201, field.clone());
    fields
        .create(&CreateContactFieldParams::new(
            "First name",
            ContactFieldDataType::Text,
            "first_name",
        ))
        .unwrap();
    assert_eq!(
        server.last_request().json(),
        json!({"name": "First name", "data_type": "text", "merge_tag": "first_name"})
    );

    server.respond_json(200, field);
    fields
        .update(
            4134,
            &UpdateContactFieldParams::builder().name("Name").build().unwrap(),
        )
        .unwrap();
    let request = server.last_request();
    assert_eq!(request.path, account_path("contacts/fields/4134"));
    assert_eq!(request.json(), json!({"name": "Name"}));

    server.respond(204, "");
    assert_eq!(fields.delete(4134).unwrap().id, ObjectId::Number(4134));
}

#[test]
fn contact_lists_crud() {
    let server = StubServer::start();
    let lists = server.client().contacts_api().unwrap().contact_lists();

    server.respond_json(200, json!([{"id": 1, "name": "Customers"}]));
    assert_eq!(lists.get_list().unwrap()[0].name, "Customers");

    server.respond_json(200, json!({"id": 1, "name": "Customers"}));
    assert_eq!(lists.get_by_id(1).unwrap().id, 1);
    assert_eq!(server.last_request().path, account_path("contacts/lists/1"));

    server.respond_json(200, json!({"id": 1, "name": "VIP"}));
    lists.update(1, &ContactListParams::new("VIP")).unwrap();
    assert_eq!(server.last_request().json(), json!({"name": "VIP"}));

    server.respond(204, "");
    assert_eq!(lists.delete(1).unwrap().id, ObjectId::Number(1));
}

#[test]
fn contact_imports() {
    let server = StubServer::start();
    let imports = server.client().contacts_api().unwrap().contact_imports();

    server.respond_json(201, json!({"id": 1, "status": "created"}));
    let started = imports
        .import_contacts(&[
            ImportContactParams::new("customer1@example.com").with_list_ids_included(vec![1]),
            ImportContactParams::new("customer2@example.com"),
        ])
        .unwrap();
    assert_eq!(started.status, ContactImportStatus::Created);
    assert_eq!(started.created_contacts_count, None);
    let request = server.last_request();
    assert_eq!(request.path, account_path("contacts/imports"));
    assert_eq!(
        request.json(),
        json!({"contacts": [
            {"email": "customer1@example.com", "list_ids_included": [1]},
            {"email": "customer2@example.com"}
        ]})
    );

    server.respond_json(
        200,
        json!({
            "id": 1,
            "status": "finished",
            "created_contacts_count": 1,
            "updated_contacts_count": 1,
            "contacts_over_limit_count": 0
        }),
    );
    let finished = imports.get_by_id(1).unwrap();
    assert_eq!(finished.status, ContactImportStatus::Finished);
    assert_eq!(finished.updated_contacts_count, Some(1));
}

#[test]
fn oversized_import_is_rejected_locally() {
    let server = StubServer::start();
    let contacts: Vec<_> = (0..50_001)
        .map(|i| ImportContactParams::new(format!("c{i}@example.com")))
        .collect();

    let err = server
        .client()
        .contacts_api()
        .unwrap()
        .contact_imports()
        .import_contacts(&contacts)
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(server.requests().is_empty());
}

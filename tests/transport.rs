mod common;

use common::{account_path, StubServer, TOKEN};
use mailtrap::{ClientConfig, Error};
use serde_json::json;

#[test]
fn requests_carry_auth_and_json_headers() {
    let server = StubServer::start();
    server.respond_json(200, json!([]));

    server
        .client()
        .testing_api()
        .unwrap()
        .projects()
        .get_list()
        .unwrap();

    let request = server.last_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, account_path("projects"));
    assert_eq!(
        request.header("authorization"),
        Some(format!("Bearer {TOKEN}").as_str())
    );
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert!(request
        .header("user-agent")
        .is_some_and(|agent| agent.starts_with("mailtrap-rust/")));
}

#[test]
fn unauthorized_is_authorization_error() {
    let server = StubServer::start();
    server.respond_json(401, json!({"error": "Incorrect API token"}));

    let err = server
        .client()
        .testing_api()
        .unwrap()
        .inboxes()
        .get_list()
        .unwrap_err();

    assert!(matches!(&err, Error::Authorization { errors } if errors == &["Incorrect API token"]));
    assert_eq!(err.status(), Some(401));
}

#[test]
fn validation_errors_are_flattened() {
    let server = StubServer::start();
    server.respond_json(
        422,
        json!({"errors": {"name": ["is too short", "has already been taken"]}}),
    );

    let err = server
        .client()
        .contacts_api()
        .unwrap()
        .contact_lists()
        .create(&mailtrap::models::contacts::ContactListParams::new("x"))
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(
        err.errors(),
        ["name: is too short", "name: has already been taken"]
    );
    assert_eq!(
        err.to_string(),
        "name: is too short; name: has already been taken"
    );
}

#[test]
fn not_found_without_body() {
    let server = StubServer::start();
    server.respond(404, "");

    let err = server
        .client()
        .email_templates_api()
        .unwrap()
        .templates()
        .get_by_id(404)
        .unwrap_err();

    assert!(matches!(&err, Error::Api { status: 404, errors } if errors == &["Not Found"]));
}

#[test]
fn server_error_with_html_body() {
    let server = StubServer::start();
    server.respond(502, "<html>Bad Gateway</html>");

    let err = server
        .client()
        .suppressions_api()
        .unwrap()
        .suppressions()
        .get_list(None)
        .unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.errors(), ["Invalid JSON"]);
}

#[test]
fn wrong_response_shape_is_json_error() {
    let server = StubServer::start();
    server.respond_json(200, json!({"unexpected": true}));

    let err = server
        .client()
        .testing_api()
        .unwrap()
        .projects()
        .get_by_id(1)
        .unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn connection_failure_is_network_error() {
    let unused = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", unused.local_addr().unwrap());
    drop(unused);

    let client = ClientConfig::from_token(TOKEN)
        .account_id(1)
        .general_host(url)
        .to_client()
        .unwrap();
    let err = client.testing_api().unwrap().projects().get_list().unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn unauthorized_without_json_is_authorization_error() {
    let server = StubServer::start();
    server.respond(401, "");
    server.respond(401, "<html><body>401 Authorization Required</body></html>");
    let projects = server.client().testing_api().unwrap().projects();

    let err = projects.get_list().unwrap_err();
    assert!(matches!(&err, Error::Authorization { errors } if errors == &["Empty response body"]));

    let err = projects.get_list().unwrap_err();
    assert!(matches!(&err, Error::Authorization { errors } if errors == &["Invalid JSON"]));
    assert_eq!(err.status(), Some(401));
}

#[test]
fn host_override_keeps_path_prefix() {
    let server = StubServer::start();
    server.respond_json(200, json!([]));

    let client = ClientConfig::from_token(TOKEN)
        .account_id(common::ACCOUNT_ID)
        .general_host(format!("{}/mailtrap/", server.url()))
        .to_client()
        .unwrap();
    client.testing_api().unwrap().projects().get_list().unwrap();

    assert_eq!(
        server.last_request().path,
        format!("/mailtrap{}", account_path("projects"))
    );
}

//! Blocking HTTP transport shared by every resource client.
use std::time::Duration;

use reqwest::{
    blocking::RequestBuilder,
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Method, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{Error, Result};

mod error_body;

use error_body::extract_errors;

const LIBRARY_USER_AGENT: &str = concat!(
    "mailtrap-rust/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/railsware/mailtrap-rust)"
);

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body was empty or whitespace only.
    Empty,
    /// The body was valid JSON.
    Json(Value),
    /// The body was not JSON (raw message sources, plain text bodies).
    Text(String),
}

impl ResponseBody {
    /// Map a JSON body onto a response model.
    pub fn into_model<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Empty => Err(Error::UnexpectedResponse(
                "expected a JSON body, got an empty response".to_owned(),
            )),
            ResponseBody::Text(_) => Err(Error::UnexpectedResponse(
                "expected a JSON body, got plain text".to_owned(),
            )),
        }
    }

    /// Take the body as text. JSON bodies are rendered back into JSON text, except bare JSON
    /// strings which are returned unquoted.
    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Empty => String::new(),
            ResponseBody::Json(Value::String(s)) => s,
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text,
        }
    }

    /// Look up a top-level key of a JSON object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => value.get(key),
            _ => None,
        }
    }
}

/// HTTP client bound to a single host.
///
/// Every request carries the bearer token, a JSON content type and the library user agent.
/// The underlying connection pool is reused between calls, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpClient {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client for `host`.
    ///
    /// `host` is either a bare host name (`mailtrap.io`), which is reached over HTTPS, or a full
    /// base URL with a scheme (`http://127.0.0.1:8080`).
    pub fn new(host: &str, token: &str, timeout: Duration) -> Result<HttpClient> {
        let base_url = base_url(host)?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::configuration("api token contains invalid characters"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(LIBRARY_USER_AGENT));

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(HttpClient { client, base_url })
    }

    /// Base URL all paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET request.
    pub fn get(&self, path: &str) -> Result<ResponseBody> {
        self.request(Method::GET, path, &[], None)
    }

    /// Issue a GET request with query parameters.
    pub fn get_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<ResponseBody> {
        self.request(Method::GET, path, query, None)
    }

    /// Issue a POST request with a JSON body.
    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ResponseBody> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, &[], Some(&body))
    }

    /// Issue a PUT request with a JSON body.
    pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ResponseBody> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, &[], Some(&body))
    }

    /// Issue a PATCH request with a JSON body.
    pub fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ResponseBody> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, path, &[], Some(&body))
    }

    /// Issue a PATCH request without a body (inbox actions).
    pub fn patch_empty(&self, path: &str) -> Result<ResponseBody> {
        self.request(Method::PATCH, path, &[], None)
    }

    /// Issue a DELETE request.
    pub fn delete(&self, path: &str) -> Result<ResponseBody> {
        self.request(Method::DELETE, path, &[], None)
    }

    /// Resolve `path` against the base URL. A leading slash is optional.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(Error::InvalidBaseUrl)
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<ResponseBody> {
        let url = self.url(path)?;

        let mut request: RequestBuilder = self.client.request(method.clone(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        log::debug!(target: "mailtrap", method = method.as_str(), path; "sending request");
        let response = request.send()?;

        let status = response.status();
        let text = response.text()?;
        log::debug!(target: "mailtrap",
                    method = method.as_str(),
                    path,
                    status = status.as_u16();
                    "received response");

        process_response(status, &text).inspect_err(|err| {
            log::warn!(target: "mailtrap",
                       method = method.as_str(),
                       path,
                       status = status.as_u16();
                       "request failed: {}", err);
        })
    }
}

/// Turn a bare host or a full URL into the base URL requests are resolved against.
///
/// The base always ends with `/`, so a path prefix such as `http://proxy/mailtrap` is kept.
fn base_url(host: &str) -> Result<Url> {
    let host = host.trim_end_matches('/');
    let url = if host.contains("://") {
        Url::parse(&format!("{host}/"))
    } else {
        Url::parse(&format!("https://{host}/"))
    };
    url.map_err(Error::InvalidBaseUrl)
}

/// Interpret the status and body of a response.
fn process_response(status: StatusCode, body: &str) -> Result<ResponseBody> {
    if !status.is_success() {
        return Err(failed_response(status, body));
    }

    if body.trim().is_empty() {
        return Ok(ResponseBody::Empty);
    }

    Ok(match serde_json::from_str(body) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(body.to_owned()),
    })
}

fn failed_response(status: StatusCode, body: &str) -> Error {
    let status = status.as_u16();

    let errors = if body.is_empty() {
        let message = if status == 404 {
            "Not Found"
        } else {
            "Empty response body"
        };
        vec![message.to_owned()]
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(data) => extract_errors(&data),
            Err(_) => vec!["Invalid JSON".to_owned()],
        }
    };

    if status == 401 {
        Error::Authorization { errors }
    } else {
        Error::Api { status, errors }
    }
}

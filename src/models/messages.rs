use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::{bool_as_str, RequestParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlacklistsResult {
    Success,
    Pending,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistsReport {
    pub name: String,
    pub url: String,
    pub in_black_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blacklists {
    pub result: BlacklistsResult,
    pub domain: String,
    pub ip: String,
    pub report: Vec<BlacklistsReport>,
}

/// `false` when the blacklist check is disabled for the inbox, a full report otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlacklistsReportInfo {
    Disabled(bool),
    Report(Blacklists),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpData {
    pub mail_from_addr: String,
    pub client_ip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpInformation {
    pub ok: bool,
    pub data: Option<SmtpData>,
}

/// A message captured by a sandbox inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub id: u64,
    pub inbox_id: u64,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
    pub to_name: String,
    pub email_size: u64,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub html_body_size: u64,
    pub text_body_size: u64,
    pub human_size: String,
    pub html_path: String,
    pub txt_path: String,
    pub raw_path: String,
    pub download_path: String,
    pub html_source_path: String,
    pub blacklists_report_info: BlacklistsReportInfo,
    pub smtp_information: SmtpInformation,
}

/// Read-state update of a message.
///
/// The endpoint takes `is_read` as the string `"true"` or `"false"`, not a JSON boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateEmailMessageParams {
    #[serde(serialize_with = "bool_as_str")]
    is_read: bool,
}

impl UpdateEmailMessageParams {
    pub fn new(is_read: bool) -> Self {
        UpdateEmailMessageParams { is_read }
    }
}

impl RequestParams for UpdateEmailMessageParams {}

/// Filters and pagination for message listing.
///
/// The service returns at most 30 messages per call. `last_id` returns the page of messages
/// before that id and takes precedence over `page` when both are sent. Fetching further pages
/// is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMessagesParams {
    pub search: Option<String>,
    pub last_id: Option<u64>,
    pub page: Option<u32>,
}

impl ListMessagesParams {
    /// Maximum number of messages returned per call.
    pub const PAGE_SIZE: usize = 30;

    pub fn new() -> Self {
        Self::default()
    }

    /// Match `subject`, `to_email` and `to_name`.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_last_id(mut self, last_id: u64) -> Self {
        self.last_id = Some(last_id);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = self.search.as_ref().filter(|search| !search.is_empty()) {
            query.push(("search", search.clone()));
        }
        if let Some(last_id) = self.last_id {
            query.push(("last_id", last_id.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardedMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpamDetail {
    pub pts: f64,
    pub rule_name: String,
    pub description: String,
}

/// SpamAssassin report of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpamReport {
    pub response_code: i64,
    pub response_message: String,
    pub response_version: String,
    pub score: f64,
    pub spam: bool,
    pub threshold: i64,
    pub details: Vec<SpamDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailClients {
    pub desktop: Vec<String>,
    pub mobile: Vec<String>,
    pub web: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    pub error_line: u64,
    pub rule_name: String,
    pub email_clients: EmailClients,
}

/// HTML compatibility analysis of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisReport {
    Success { errors: Vec<ErrorItem> },
    Error { msg: String },
}

/// Wrapper the service puts around single reports.
#[derive(Deserialize)]
pub(crate) struct ReportEnvelope<T> {
    pub report: T,
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{
        AnalysisReport, BlacklistsReportInfo, EmailMessage, ListMessagesParams, SpamReport,
        UpdateEmailMessageParams,
    };
    use crate::params::RequestParams;

    #[test]
    fn read_state_is_sent_as_string() {
        assert_eq!(
            Value::Object(UpdateEmailMessageParams::new(true).api_data().unwrap()),
            json!({"is_read": "true"})
        );
        assert_eq!(
            Value::Object(UpdateEmailMessageParams::new(false).api_data().unwrap()),
            json!({"is_read": "false"})
        );
    }

    #[test]
    fn list_query_sends_both_cursor_and_page() {
        let params = ListMessagesParams::new().with_last_id(123).with_page(5);

        assert_eq!(
            params.to_query(),
            vec![("last_id", "123".to_owned()), ("page", "5".to_owned())]
        );
    }

    #[test]
    fn list_query_skips_empty_search() {
        assert!(ListMessagesParams::new().with_search("").to_query().is_empty());
        assert_eq!(
            ListMessagesParams::new().with_search("welcome").to_query(),
            vec![("search", "welcome".to_owned())]
        );
    }

    #[test]
    fn parses_message_without_blacklist_report() {
        let message: EmailMessage = serde_json::from_value(json!({
            "id": 2323,
            "inbox_id": 3538,
            "subject": "Test email",
            "sent_at": "2022-07-01T19:29:59.295Z",
            "from_email": "john@mailtrap.io",
            "from_name": "John",
            "to_email": "mary@mailtrap.io",
            "to_name": "Mary",
            "email_size": 300,
            "is_read": false,
            "created_at": "2022-07-01T19:29:59.295Z",
            "updated_at": "2022-07-01T19:29:59.295Z",
            "html_body_size": 150,
            "text_body_size": 100,
            "human_size": "300 Bytes",
            "html_path": "/api/accounts/321/inboxes/3538/messages/2323/body.html",
            "txt_path": "/api/accounts/321/inboxes/3538/messages/2323/body.txt",
            "raw_path": "/api/accounts/321/inboxes/3538/messages/2323/body.raw",
            "download_path": "/api/accounts/321/inboxes/3538/messages/2323/body.eml",
            "html_source_path": "/api/accounts/321/inboxes/3538/messages/2323/body.htmlsource",
            "blacklists_report_info": false,
            "smtp_information": {
                "ok": true,
                "data": {"mail_from_addr": "john@mailtrap.io", "client_ip": "193.62.62.184"}
            }
        }))
        .unwrap();

        assert_eq!(message.id, 2323);
        assert_eq!(message.blacklists_report_info, BlacklistsReportInfo::Disabled(false));
        assert_eq!(
            message.smtp_information.data.unwrap().client_ip,
            "193.62.62.184"
        );
    }

    #[test]
    fn parses_spam_report_wire_names() {
        let report: SpamReport = serde_json::from_value(json!({
            "ResponseCode": 2,
            "ResponseMessage": "Not spam",
            "ResponseVersion": "1.2",
            "Score": 1.2,
            "Spam": false,
            "Threshold": 5,
            "Details": [
                {"Pts": 0, "RuleName": "HTML_MESSAGE", "Description": "BODY: HTML included in message"}
            ]
        }))
        .unwrap();

        assert_eq!(report.response_message, "Not spam");
        assert_eq!(report.details[0].rule_name, "HTML_MESSAGE");
    }

    #[test]
    fn analysis_report_is_tagged_by_status() {
        let error: AnalysisReport =
            serde_json::from_value(json!({"status": "error", "msg": "Analysis failed"})).unwrap();
        assert_eq!(
            error,
            AnalysisReport::Error {
                msg: "Analysis failed".to_owned()
            }
        );

        let success: AnalysisReport = serde_json::from_value(json!({
            "status": "success",
            "errors": [{
                "error_line": 15,
                "rule_name": "style",
                "email_clients": {"desktop": ["Notes 6 / 7"], "mobile": ["Gmail"], "web": []}
            }]
        }))
        .unwrap();
        assert!(matches!(success, AnalysisReport::Success { errors } if errors[0].error_line == 15));
    }
}

//! Asynchronous abuse API client implementation.

use crate::models::{
    AbuseMessages, AbuseReport, AbuseReportListParams, AbuseReports, CreateMessageRequest,
    ResolveRequest, Resolutions,
};
use crate::Result;
use leaseweb_core::client::{ClientConfig, ServiceClient, ServiceClientBuilder, Transport};
use leaseweb_core::{encode_segment, LeasewebConfig, LeasewebService, Pagination};
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("leaseweb-abuse/", env!("CARGO_PKG_VERSION"));

/// Builder for [`AbuseClient`].
#[derive(Debug, Clone)]
pub struct AbuseClientBuilder {
    inner: ServiceClientBuilder,
}

impl AbuseClientBuilder {
    /// Create a builder from a configuration.
    #[must_use]
    pub fn new(config: LeasewebConfig) -> Self {
        let builder =
            ServiceClientBuilder::new(LeasewebService::Abuse, config).with_user_agent(USER_AGENT);
        Self { inner: builder }
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Send requests through a custom transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.inner = self.inner.with_transport(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<AbuseClient> {
        let inner = self.inner.build()?;
        Ok(AbuseClient { inner })
    }
}

/// Asynchronous abuse API client.
#[derive(Debug, Clone)]
pub struct AbuseClient {
    inner: ServiceClient,
}

impl AbuseClient {
    /// Construct a client directly from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: LeasewebConfig) -> Result<Self> {
        AbuseClientBuilder::new(config).build()
    }

    /// List abuse reports, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list_reports(&self, params: &AbuseReportListParams) -> Result<AbuseReports> {
        self.inner.get_json("reports", &params.to_pairs()).await
    }

    /// Fetch a single report with its full details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_report(&self, report_id: &str) -> Result<AbuseReport> {
        let path = format!("reports/{}", encode_segment(report_id));
        self.inner.get_json(&path, &[]).await
    }

    /// List the message thread of a report.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list_messages(
        &self,
        report_id: &str,
        pagination: &Pagination,
    ) -> Result<AbuseMessages> {
        let path = format!("reports/{}/messages", encode_segment(report_id));
        self.inner.get_json(&path, &pagination.to_pairs()).await
    }

    /// Post a message to a report thread.
    ///
    /// The API accepts the message asynchronously and answers with a list of
    /// informational strings rather than the created message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create_message(&self, report_id: &str, body: &str) -> Result<Vec<String>> {
        let path = format!("reports/{}/messages", encode_segment(report_id));
        let request = CreateMessageRequest { body };
        self.inner
            .execute(Method::POST, &path, &[], Some(&request))
            .await
    }

    /// List the resolutions that can be applied to a report.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list_resolution_options(&self, report_id: &str) -> Result<Resolutions> {
        let path = format!("reports/{}/resolutions", encode_segment(report_id));
        self.inner.get_json(&path, &[]).await
    }

    /// Resolve a report with one or more resolution codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn resolve_report(&self, report_id: &str, resolutions: &[&str]) -> Result<()> {
        let path = format!("reports/{}/resolve", encode_segment(report_id));
        debug!(report_id, ?resolutions, "Resolving abuse report");
        let request = ResolveRequest { resolutions };
        self.inner
            .execute_unit(Method::POST, &path, &[], Some(&request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbuseReportStatus;
    use leaseweb_core::{Error, LeasewebError};
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ACCESS_DENIED: &str = r#"{"errorCode": "ACCESS_DENIED", "errorMessage": "The access token is expired or invalid."}"#;
    const SERVER_ERROR: &str = r#"{"errorCode": "SERVER_ERROR", "errorMessage": "The server encountered an unexpected condition that prevented it from fulfilling the request."}"#;
    const UNAVAILABLE: &str = r#"{"errorCode": "TEMPORARILY_UNAVAILABLE", "errorMessage": "The server is currently unable to handle the request due to a temporary overloading or maintenance of the server."}"#;

    fn test_client(server: &MockServer) -> AbuseClient {
        let config = LeasewebConfig::new("test-api-key")
            .unwrap()
            .with_base_url(server.uri());
        AbuseClient::new(config).unwrap()
    }

    fn expected_error(body: &str) -> LeasewebError {
        serde_json::from_str(body).unwrap()
    }

    async fn mount_error(server: &MockServer, http_method: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    fn assert_api_error(err: &Error, status: u16, expected: &LeasewebError) {
        assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
        assert_eq!(err.api_error(), Some(expected));
    }

    #[tokio::test]
    async fn list_reports_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports"))
            .and(header("X-LSW-Auth", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_metadata": {"limit": 10, "offset": 0, "totalCount": 2},
                "reports": [
                    {
                        "id": "000000",
                        "subject": "Report description 1",
                        "status": "OPEN",
                        "reportedAt": "2022-01-01T00:00:00+00:00",
                        "updatedAt": "2022-02-01T00:00:00+00:00",
                        "notifier": "notifier1@email.com",
                        "customerId": "10000001",
                        "legalEntityId": "2000",
                        "deadline": "2022-03-01T00:00:00+00:00"
                    },
                    {
                        "id": "000001",
                        "subject": "Report description 2",
                        "status": "CLOSED",
                        "reportedAt": "2022-03-01T00:00:00+00:00",
                        "updatedAt": "2022-04-01T00:00:00+00:00",
                        "notifier": "notifier2@email.com",
                        "customerId": "10000001",
                        "legalEntityId": "2600",
                        "deadline": "2022-05-01T00:00:00+00:00"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .list_reports(&AbuseReportListParams::default())
            .await
            .unwrap();

        assert_eq!(response.reports.len(), 2);
        assert_eq!(response.metadata.total_count, 2);
        assert_eq!(response.metadata.offset, 0);
        assert_eq!(response.metadata.limit, 10);

        let second = &response.reports[1];
        assert_eq!(second.id, "000001");
        assert_eq!(second.status, "CLOSED");
        assert_eq!(second.legal_entity_id, "2600");
        assert_eq!(second.deadline, "2022-05-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn list_reports_paginates_and_filters_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports"))
            .and(query_param("offset", "1"))
            .and(query_param("status", "OPEN,WAITING"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_metadata": {"limit": 10, "offset": 1, "totalCount": 11},
                "reports": [{"id": "000000", "status": "OPEN"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = AbuseReportListParams {
            offset: Some(1),
            statuses: vec![AbuseReportStatus::Open, AbuseReportStatus::Waiting],
            ..AbuseReportListParams::default()
        };
        let response = client.list_reports(&params).await.unwrap();

        assert_eq!(response.reports.len(), 1);
        assert_eq!(response.metadata.total_count, 11);
        assert_eq!(response.metadata.offset, 1);
    }

    #[tokio::test]
    async fn list_reports_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_metadata": {"limit": 10, "offset": 0, "totalCount": 0},
                "reports": []
            })))
            .mount(&server)
            .await;

        let response = test_client(&server)
            .list_reports(&AbuseReportListParams::default())
            .await
            .unwrap();
        assert!(response.reports.is_empty());
        assert_eq!(response.metadata.limit, 10);
    }

    #[tokio::test]
    async fn list_reports_server_errors() {
        for (status, body) in [(403, ACCESS_DENIED), (500, SERVER_ERROR), (503, UNAVAILABLE)] {
            let server = MockServer::start().await;
            mount_error(&server, "GET", status, body).await;

            let err = test_client(&server)
                .list_reports(&AbuseReportListParams::default())
                .await
                .unwrap_err();
            assert_api_error(&err, status, &expected_error(body));
        }
    }

    #[tokio::test]
    async fn get_report_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports/000005"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "000005",
                "subject": "Report description",
                "status": "CLOSED",
                "reopened": false,
                "reportedAt": "2015-01-01T00:00:00+0100",
                "updatedAt": "2015-02-01T00:00:00+0100",
                "notifier": "notifier@email.com",
                "customerId": "10000001",
                "legalEntityId": "2000",
                "body": "string with content",
                "deadline": "2015-01-01T00:00:00+0100",
                "detectedIpAddresses": ["127.0.0.1"],
                "detectedDomainNames": [
                    {"name": "example.com", "ipAddresses": ["93.184.216.34"]}
                ],
                "attachments": [
                    {
                        "id": "1abd8e7f-0fdf-453c-b1f5-8fef436acbbe",
                        "mimeType": "part/xml",
                        "filename": "000001.xml"
                    }
                ],
                "totalMessagesCount": 2,
                "latestMessages": [
                    {
                        "postedBy": "CUSTOMER",
                        "postedAt": "2015-09-30T06:23:40+00:00",
                        "body": "Hello, this is my first message!"
                    },
                    {
                        "postedBy": "ABUSE_AGENT",
                        "postedAt": "2015-10-08T08:25:29+00:00",
                        "body": "Hi, this is our first reply.",
                        "attachment": {
                            "id": "436acbbe-0fdf-453c-b1f5-1abd8e7f8fef",
                            "mimeType": "image/png",
                            "filename": "notification.png"
                        }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let report = test_client(&server).get_report("000005").await.unwrap();

        assert_eq!(report.id, "000005");
        assert!(!report.reopened);
        assert_eq!(report.body, "string with content");
        assert_eq!(report.detected_ip_addresses, vec!["127.0.0.1"]);
        assert_eq!(report.detected_domain_names[0].name, "example.com");
        assert_eq!(
            report.detected_domain_names[0].ip_addresses[0],
            "93.184.216.34"
        );
        assert_eq!(report.attachments[0].mime_type, "part/xml");
        assert_eq!(report.total_messages_count, 2);
        assert_eq!(report.latest_messages.len(), 2);
        assert!(report.latest_messages[0].attachment.is_none());

        let attachment = report.latest_messages[1].attachment.as_ref().unwrap();
        assert_eq!(attachment.id, "436acbbe-0fdf-453c-b1f5-1abd8e7f8fef");
        assert_eq!(attachment.filename, "notification.png");
    }

    #[tokio::test]
    async fn get_report_not_found_with_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports/123456"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
            .mount(&server)
            .await;

        let err = test_client(&server).get_report("123456").await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.api_error().unwrap().is_empty());
        assert_eq!(err.to_string(), "");
    }

    #[tokio::test]
    async fn get_report_tolerates_null_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports/000005"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "000005",
                "subject": "Spam report",
                "status": "OPEN",
                "deadline": null,
                "legalEntityId": null,
                "detectedDomainNames": [{"name": "example.com", "ipAddresses": null}]
            })))
            .mount(&server)
            .await;

        let report = test_client(&server).get_report("000005").await.unwrap();
        assert_eq!(report.subject, "Spam report");
        assert!(report.deadline.is_empty());
        assert!(report.legal_entity_id.is_empty());
        assert!(report.detected_domain_names[0].ip_addresses.is_empty());
    }

    #[tokio::test]
    async fn error_body_with_null_correlation_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports/404404"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"errorCode": "404", "errorMessage": "Report not found", "correlationId": null}"#,
            ))
            .mount(&server)
            .await;

        let err = test_client(&server).get_report("404404").await.unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.error_code, "404");
        assert!(api.correlation_id.is_empty());
        assert_eq!(err.to_string(), "Report not found");
    }

    #[tokio::test]
    async fn list_messages_paginates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports/123456789/messages"))
            .and(query_param("offset", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_metadata": {"limit": 10, "offset": 1, "totalCount": 11},
                "messages": [
                    {
                        "postedBy": "ABUSE_AGENT",
                        "postedAt": "2015-10-08T08:25:29+00:00",
                        "body": "Hi, this is our first reply.",
                        "attachment": {
                            "id": "436acbbe-0fdf-453c-b1f5-1abd8e7f8fef",
                            "mimeType": "image/png",
                            "filename": "notification.png"
                        }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let response = test_client(&server)
            .list_messages("123456789", &Pagination::new().with_offset(1))
            .await
            .unwrap();

        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.metadata.total_count, 11);
        assert_eq!(response.messages[0].posted_by, "ABUSE_AGENT");
        assert_eq!(
            response.messages[0].attachment.as_ref().unwrap().mime_type,
            "image/png"
        );
    }

    #[tokio::test]
    async fn list_messages_server_errors() {
        for (status, body) in [(403, ACCESS_DENIED), (404, "{}"), (500, SERVER_ERROR)] {
            let server = MockServer::start().await;
            mount_error(&server, "GET", status, body).await;

            let err = test_client(&server)
                .list_messages("123456789", &Pagination::default())
                .await
                .unwrap_err();
            assert_api_error(&err, status, &expected_error(body));
        }
    }

    #[tokio::test]
    async fn create_message_returns_acknowledgement() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/abuse/v1/reports/123456789/messages"))
            .and(body_json(json!({"body": "message body..."})))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!([
                "To make sure the request has been processed please see if the message is added to the list."
            ])))
            .mount(&server)
            .await;

        let ack = test_client(&server)
            .create_message("123456789", "message body...")
            .await
            .unwrap();
        assert_eq!(
            ack[0],
            "To make sure the request has been processed please see if the message is added to the list."
        );
    }

    #[tokio::test]
    async fn create_message_server_errors() {
        for (status, body) in [(403, ACCESS_DENIED), (500, SERVER_ERROR), (503, UNAVAILABLE)] {
            let server = MockServer::start().await;
            mount_error(&server, "POST", status, body).await;

            let err = test_client(&server)
                .create_message("123456789", "message body...")
                .await
                .unwrap_err();
            assert_api_error(&err, status, &expected_error(body));
        }
    }

    #[tokio::test]
    async fn list_resolution_options() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports/123456789/resolutions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resolutions": [
                    {"id": "CONTENT_REMOVED", "description": "The mentioned content has been removed."},
                    {"id": "DOMAINS_REMOVED", "description": "The mentioned domain(s) has/have been removed from the LeaseWeb network."},
                    {"id": "SUSPENDED", "description": "The end customer (or responsible user) has been suspended."},
                    {"id": "DUPLICATE", "description": "This is either a duplicate or old notification and has already been resolved."}
                ]
            })))
            .mount(&server)
            .await;

        let response = test_client(&server)
            .list_resolution_options("123456789")
            .await
            .unwrap();
        let ids: Vec<&str> = response
            .resolutions
            .iter()
            .map(|resolution| resolution.id.as_str())
            .collect();
        assert_eq!(
            ids,
            ["CONTENT_REMOVED", "DOMAINS_REMOVED", "SUSPENDED", "DUPLICATE"]
        );
    }

    #[tokio::test]
    async fn list_resolution_options_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/abuse/v1/reports/123456789/resolutions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resolutions": []})))
            .mount(&server)
            .await;

        let response = test_client(&server)
            .list_resolution_options("123456789")
            .await
            .unwrap();
        assert!(response.resolutions.is_empty());
    }

    #[tokio::test]
    async fn resolve_report_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/abuse/v1/reports/123456789/resolve"))
            .and(body_json(json!({"resolutions": ["CONTENT_REMOVED", "DUPLICATE"]})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server)
            .resolve_report("123456789", &["CONTENT_REMOVED", "DUPLICATE"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn resolve_report_server_errors() {
        for (status, body) in [(403, ACCESS_DENIED), (500, SERVER_ERROR), (503, UNAVAILABLE)] {
            let server = MockServer::start().await;
            mount_error(&server, "POST", status, body).await;

            let err = test_client(&server)
                .resolve_report("123456789", &["CONTENT_REMOVED"])
                .await
                .unwrap_err();
            assert_api_error(&err, status, &expected_error(body));
        }
    }
}

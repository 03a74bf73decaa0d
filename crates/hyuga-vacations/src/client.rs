//! HTTP client for the vacation backend.

use serde::Deserialize;
use tracing::instrument;

use crate::error::GatewayError;
use crate::types::{DepartmentVacationList, Holiday, PersonalVacation};

/// Fixed fallback messages, one per operation, used whenever the backend
/// does not supply its own.
const MY_VACATIONS_FALLBACK: &str = "내 휴가 목록 조회 실패";
const DEPARTMENT_VACATIONS_FALLBACK: &str = "내 부서 휴가 목록 조회 실패";
const HOLIDAYS_FALLBACK: &str = "공휴일 목록 조회 실패";

/// Error envelope the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Read-only client for the vacation backend.
///
/// Every call is a fresh round trip: no caching, no retries. A failed
/// attempt surfaces immediately as a [`GatewayError`].
pub struct VacationClient {
    client: reqwest::Client,
    base_url: String,
}

impl VacationClient {
    /// Build a client against an API base such as `http://localhost:8088/api`.
    ///
    /// The cookie store carries the session credentials the authenticated
    /// endpoints expect; timeouts are left to transport defaults.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List the caller's own vacation requests (authenticated read).
    #[instrument(skip(self), level = "info")]
    pub async fn my_vacations(&self) -> Result<Vec<PersonalVacation>, GatewayError> {
        let url = format!("{}/vacations/my-vacations", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport(MY_VACATIONS_FALLBACK, e))?;

        handle_response(response, MY_VACATIONS_FALLBACK).await
    }

    /// List the vacations of everyone in the caller's department
    /// (authenticated read).
    #[instrument(skip(self), level = "info")]
    pub async fn department_vacations(&self) -> Result<DepartmentVacationList, GatewayError> {
        let url = format!("{}/vacations/my-department", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport(DEPARTMENT_VACATIONS_FALLBACK, e))?;

        handle_response(response, DEPARTMENT_VACATIONS_FALLBACK).await
    }

    /// List public holidays for an inclusive year/month range
    /// (unauthenticated read).
    #[instrument(skip(self), level = "info")]
    pub async fn holidays(
        &self,
        start_year: i32,
        start_month: u32,
        end_year: i32,
        end_month: u32,
    ) -> Result<Vec<Holiday>, GatewayError> {
        let url = format!("{}/holidays/get-holiday", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("startYear", start_year.to_string()),
                ("startMonth", start_month.to_string()),
                ("endYear", end_year.to_string()),
                ("endMonth", end_month.to_string()),
            ])
            .send()
            .await
            .map_err(|e| transport(HOLIDAYS_FALLBACK, e))?;

        handle_response(response, HOLIDAYS_FALLBACK).await
    }
}

fn transport(fallback: &'static str, source: reqwest::Error) -> GatewayError {
    GatewayError::Transport { fallback, source }
}

/// Decode a 2xx body, or normalize a failure response into the backend's
/// `{ "message": ... }` envelope with the operation fallback.
async fn handle_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    fallback: &'static str,
) -> Result<T, GatewayError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    } else {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| fallback.to_string());

        Err(GatewayError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> VacationClient {
        VacationClient::new(&format!("{}/api", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_my_vacations() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/vacations/my-vacations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "startAt": "2024-03-10", "endAt": "2024-03-12", "status": "PENDING" },
                { "startAt": "2024-04-01", "endAt": "2024-04-01", "status": "APPROVED" }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let vacations = client.my_vacations().await.unwrap();

        assert_eq!(vacations.len(), 2);
        assert_eq!(
            vacations[0].start_at,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
    }

    #[tokio::test]
    async fn test_department_vacations() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/vacations/my-department"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    { "vacationId": 1, "userName": "김철수", "start_at": "2024-03-04", "end_at": "2024-03-05" }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let list = client.department_vacations().await.unwrap();

        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].user_name, "김철수");
    }

    #[tokio::test]
    async fn test_holidays_query_range() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/holidays/get-holiday"))
            .and(query_param("startYear", "2024"))
            .and(query_param("startMonth", "2"))
            .and(query_param("endYear", "2024"))
            .and(query_param("endMonth", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "name": "삼일절", "holidayDate": "2024-03-01" }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let holidays = client.holidays(2024, 2, 2024, 4).await.unwrap();

        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "삼일절");
    }

    #[tokio::test]
    async fn test_server_message_is_preferred() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/vacations/my-vacations"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "message": "unauthorized" })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.my_vacations().await.unwrap_err();

        assert_eq!(err.message(), "unauthorized");
    }

    #[tokio::test]
    async fn test_fallback_without_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/vacations/my-department"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.department_vacations().await.unwrap_err();

        assert_eq!(err.message(), "내 부서 휴가 목록 조회 실패");
    }

    #[tokio::test]
    async fn test_malformed_payload_fails_loud() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/holidays/get-holiday"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "unexpected": true }])),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.holidays(2024, 1, 2024, 2).await.unwrap_err();

        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        // Unroutable port: the request never reaches a server.
        let client = VacationClient::new("http://127.0.0.1:1/api").unwrap();
        let err = client.my_vacations().await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.message(), "내 휴가 목록 조회 실패");
    }
}

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::RecordSink;
use crate::models::BookingRecord;

const SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

/// The fields of a Google service-account key file that token exchange needs.
#[derive(Debug, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

impl ServiceAccountKey {
    pub fn from_json(blob: &str) -> anyhow::Result<Self> {
        anyhow::ensure!(!blob.trim().is_empty(), "GOOGLE_CREDENTIALS is not set");
        serde_json::from_str(blob).context("invalid service account credentials")
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Appends rows to the first sheet of a spreadsheet found by name.
///
/// Credentials are parsed and exchanged on every append, so a bad or missing
/// blob surfaces as a failed write rather than a startup error.
pub struct GoogleSheetsSink {
    credentials: String,
    spreadsheet_name: String,
    sheets_url: String,
    drive_url: String,
    client: reqwest::Client,
}

impl GoogleSheetsSink {
    pub fn new(
        credentials: String,
        spreadsheet_name: String,
        sheets_url: String,
        drive_url: String,
    ) -> Self {
        Self {
            credentials,
            spreadsheet_name,
            sheets_url: sheets_url.trim_end_matches('/').to_string(),
            drive_url: drive_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn access_token(&self, key: &ServiceAccountKey) -> anyhow::Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: &key.client_email,
            scope: SCOPES,
            aud: &key.token_uri,
            iat: now,
            exp: now + 3600,
        };

        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .context("service account private key is not a valid RSA PEM")?;
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
            .context("failed to sign service account assertion")?;

        let token: TokenResponse = self
            .client
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .context("failed to call Google token endpoint")?
            .error_for_status()
            .context("Google token endpoint returned error")?
            .json()
            .await
            .context("failed to parse Google token response")?;

        Ok(token.access_token)
    }

    async fn find_spreadsheet(&self, access_token: &str) -> anyhow::Result<String> {
        let query = format!(
            "name = '{}' and mimeType = '{SPREADSHEET_MIME}' and trashed = false",
            self.spreadsheet_name.replace('\'', "\\'")
        );

        let data: serde_json::Value = self
            .client
            .get(format!("{}/drive/v3/files", self.drive_url))
            .bearer_auth(access_token)
            .query(&[("q", query.as_str()), ("fields", "files(id,name)"), ("pageSize", "1")])
            .send()
            .await
            .context("failed to call Google Drive API")?
            .error_for_status()
            .context("Google Drive API returned error")?
            .json()
            .await
            .context("failed to parse Google Drive response")?;

        data["files"][0]["id"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("spreadsheet {:?} not found", self.spreadsheet_name))
    }
}

#[async_trait]
impl RecordSink for GoogleSheetsSink {
    async fn append_row(&self, record: &BookingRecord) -> anyhow::Result<()> {
        let key = ServiceAccountKey::from_json(&self.credentials)?;
        let access_token = self.access_token(&key).await?;
        let spreadsheet_id = self.find_spreadsheet(&access_token).await?;

        // A bare A1 range resolves to the first sheet.
        let url = format!(
            "{}/v4/spreadsheets/{}/values/A1:append",
            self.sheets_url, spreadsheet_id
        );

        self.client
            .post(&url)
            .bearer_auth(&access_token)
            .query(&[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")])
            .json(&json!({ "values": [record.row()] }))
            .send()
            .await
            .context("failed to call Google Sheets API")?
            .error_for_status()
            .context("Google Sheets API returned error")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_fail_at_use() {
        let err = ServiceAccountKey::from_json("").unwrap_err();
        assert!(err.to_string().contains("GOOGLE_CREDENTIALS"));

        assert!(ServiceAccountKey::from_json("{not json").is_err());
    }

    #[test]
    fn test_token_uri_defaults_to_google() {
        let key = ServiceAccountKey::from_json(
            r#"{"type":"service_account","client_email":"bot@x.iam.gserviceaccount.com","private_key":"k"}"#,
        )
        .unwrap();
        assert_eq!(key.token_uri, "https://oauth2.googleapis.com/token");
        assert_eq!(key.client_email, "bot@x.iam.gserviceaccount.com");
    }

    #[tokio::test]
    async fn test_append_reports_false_without_credentials() {
        let sink = GoogleSheetsSink::new(
            String::new(),
            "TrainBookings".to_string(),
            "http://127.0.0.1:9".to_string(),
            "http://127.0.0.1:9".to_string(),
        );
        let record = BookingRecord {
            date: "2024-05-01".to_string(),
            phone: "336".to_string(),
            origin: "Paris".to_string(),
            destination: "Lyon".to_string(),
            travel_class: "first".to_string(),
            status: crate::models::BookingStatus::Pending,
        };
        assert!(!sink.append(&record).await);
    }
}

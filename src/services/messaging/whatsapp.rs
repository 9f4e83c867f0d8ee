use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::MessagingProvider;

pub struct WhatsAppProvider {
    token: String,
    phone_id: String,
    base_url: String,
    api_version: String,
    client: reqwest::Client,
}

impl WhatsAppProvider {
    pub fn new(token: String, phone_id: String, base_url: String, api_version: String) -> Self {
        Self {
            token,
            phone_id,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MessagingProvider for WhatsAppProvider {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
        let url = format!(
            "{}/{}/{}/messages",
            self.base_url, self.api_version, self.phone_id
        );

        let payload = json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "text",
            "text": { "body": body },
        });

        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .context("failed to send WhatsApp message")?
            .error_for_status()
            .context("WhatsApp API returned error")?;

        Ok(())
    }
}

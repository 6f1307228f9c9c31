//! HTTP classifier client
//!
//! Posts raw image bytes to a model-serving endpoint that answers with
//! `[{"label": "...", "probability": 0.42}, ...]`, best first.

use std::time::Duration;

use async_trait::async_trait;

use super::classifier::ImageClassifier;
use super::remap::LabelScore;
use crate::error::ClassifierError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ImageClassifier for RemoteClassifier {
    async fn classify(&self, image: &[u8], top_n: usize) -> Result<Vec<LabelScore>, ClassifierError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .query(&[("top", top_n)])
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let mut labels: Vec<LabelScore> = resp.json().await?;
        labels.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        Ok(labels)
    }
}

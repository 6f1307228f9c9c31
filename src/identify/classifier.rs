//! Classifier seam
//!
//! The pretrained model lives outside this crate. Callers construct a
//! classifier client, hand it to [`CropIdentifier`], and own its lifetime.

use std::sync::Arc;

use async_trait::async_trait;

use super::remap::{remap, CropIdentificationResult, LabelScore};
use crate::error::ClassifierError;

/// Upload limit for a single image
pub const MAX_IMAGE_BYTES: usize = 6 * 1024 * 1024;

/// Number of ranked labels requested from the classifier
pub const DEFAULT_TOP_N: usize = 10;

/// A pretrained image classifier returning labels ranked by probability
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, image: &[u8], top_n: usize) -> Result<Vec<LabelScore>, ClassifierError>;
}

/// Identifies crops in photos using an injected classifier
#[derive(Clone)]
pub struct CropIdentifier {
    classifier: Arc<dyn ImageClassifier>,
    top_n: usize,
}

impl CropIdentifier {
    pub fn new(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self {
            classifier,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1);
        self
    }

    pub async fn identify(&self, image: &[u8]) -> Result<CropIdentificationResult, ClassifierError> {
        if image.is_empty() {
            return Err(ClassifierError::EmptyImage);
        }
        if image.len() > MAX_IMAGE_BYTES {
            return Err(ClassifierError::ImageTooLarge {
                size: image.len(),
                limit: MAX_IMAGE_BYTES,
            });
        }

        let mut top = self.classifier.classify(image, self.top_n).await?;
        top.truncate(self.top_n);

        let result = remap(&top);
        tracing::debug!(
            crop = %result.crop,
            confidence = result.confidence,
            raw_label = %result.raw_label,
            "Image identified"
        );
        Ok(result)
    }
}

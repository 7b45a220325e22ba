//! Collaborators injected into the engine.
//!
//! User-facing notices and ride publishing are side effects the engine does
//! not perform itself. Both are traits so screens can swap in real
//! implementations and tests can use mocks.

use std::sync::Arc;

use async_trait::async_trait;
use rideshare_core::{PublishError, User};
use serde::Serialize;

use crate::catalog::RideCatalog;
use crate::wizard::RideOfferDraft;

// =============================================================================
// Notices
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the user (toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Shows notices to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        let description = notice.description.as_deref().unwrap_or("");
        match notice.kind {
            NoticeKind::Error => tracing::warn!("{} {}", notice.title, description),
            NoticeKind::Success => tracing::info!("{} {}", notice.title, description),
        }
    }
}

// =============================================================================
// Publishing
// =============================================================================

/// Acknowledgement of a published offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    pub ride_id: String,
}

/// Accepts finished ride offers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RidePublisher: Send + Sync {
    async fn publish(&self, draft: RideOfferDraft) -> Result<PublishReceipt, PublishError>;
}

/// Publisher that lists offers in the in-memory catalog.
pub struct CatalogPublisher {
    catalog: Arc<RideCatalog>,
    driver: User,
}

impl CatalogPublisher {
    pub fn new(catalog: Arc<RideCatalog>, driver: User) -> Self {
        Self { catalog, driver }
    }
}

#[async_trait]
impl RidePublisher for CatalogPublisher {
    async fn publish(&self, draft: RideOfferDraft) -> Result<PublishReceipt, PublishError> {
        if !draft.is_complete() {
            return Err(PublishError::Rejected("draft is incomplete".to_string()));
        }

        let ride_id = uuid::Uuid::new_v4().to_string();
        let ride = draft.to_ride(ride_id.clone(), self.driver.clone());
        if !self.catalog.insert(ride) {
            return Err(PublishError::Rejected(format!("duplicate ride id {}", ride_id)));
        }

        tracing::info!(
            "Published ride {} ({} -> {}, {} seats)",
            ride_id,
            draft.from_city,
            draft.to_city,
            draft.seats
        );
        Ok(PublishReceipt { ride_id })
    }
}

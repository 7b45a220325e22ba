//! Ride Offer Wizard
//!
//! A three-step form that accumulates a [`RideOfferDraft`]:
//!
//! ```text
//! Route ──Next──▶ Vehicle ──Next──▶ Pricing ──Submit──▶ Published
//!   ▲               │  ▲               │
//!   └─────Back──────┘  └─────Back──────┘
//! ```
//!
//! Forward transitions are gated on the current step's predicate; going back
//! keeps every field. [`reduce`] is the pure transition function and
//! [`RideOfferWizard`] drives it, applying the publish effect through an
//! injected [`RidePublisher`].

use std::sync::Arc;

use rideshare_core::{OfferConfig, PublishError};

use crate::collab::{Notice, Notifier, PublishReceipt, RidePublisher};

mod draft;
mod state;

pub use draft::{parse_leading_int, DraftField, RideOfferDraft, StopDraft};
pub use state::{
    reduce, Rejection, WizardEffect, WizardEvent, WizardPhase, WizardState, WizardStep,
};

/// What a dispatched event did, after effects were applied.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    /// A field changed.
    Updated,
    Advanced(WizardStep),
    WentBack(WizardStep),
    Rejected(Rejection),
    Published(PublishReceipt),
    /// The publisher failed; the wizard is back on the pricing step.
    PublishFailed(PublishError),
}

/// Drives the wizard reducer and applies its effects.
pub struct RideOfferWizard {
    state: WizardState,
    publisher: Arc<dyn RidePublisher>,
    notifier: Arc<dyn Notifier>,
}

impl RideOfferWizard {
    pub fn new(
        config: &OfferConfig,
        publisher: Arc<dyn RidePublisher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: WizardState::new(config),
            publisher,
            notifier,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn draft(&self) -> &RideOfferDraft {
        &self.state.draft
    }

    /// Apply `event`, publishing when it completes the wizard.
    pub async fn dispatch(&mut self, event: WizardEvent) -> WizardOutcome {
        let (next, effect) = reduce(std::mem::take(&mut self.state), event);
        self.state = next;

        match effect {
            None => WizardOutcome::Updated,
            Some(WizardEffect::Advanced(step)) => WizardOutcome::Advanced(step),
            Some(WizardEffect::WentBack(step)) => WizardOutcome::WentBack(step),
            Some(WizardEffect::Rejected(rejection)) => {
                tracing::debug!("Wizard event rejected: {:?}", rejection);
                WizardOutcome::Rejected(rejection)
            }
            Some(WizardEffect::Publish(draft)) => self.publish(draft).await,
        }
    }

    async fn publish(&mut self, draft: RideOfferDraft) -> WizardOutcome {
        match self.publisher.publish(draft).await {
            Ok(receipt) => {
                tracing::info!("Ride offer published as {}", receipt.ride_id);
                self.notifier.notify(
                    Notice::success("Ride published successfully!")
                        .with_description("Your ride is now visible to passengers."),
                );
                WizardOutcome::Published(receipt)
            }
            Err(err) => {
                tracing::warn!("Publishing ride offer failed: {}", err);
                self.state.phase = WizardPhase::Editing(WizardStep::Pricing);
                self.notifier.notify(
                    Notice::error("Could not publish ride").with_description(err.to_string()),
                );
                WizardOutcome::PublishFailed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{MockNotifier, MockRidePublisher, NoticeKind};

    fn edit(field: DraftField, value: &str) -> WizardEvent {
        WizardEvent::Edit {
            field,
            value: value.to_string(),
        }
    }

    fn filling_events() -> Vec<WizardEvent> {
        vec![
            edit(DraftField::FromCity, "Pune"),
            edit(DraftField::ToCity, "Mumbai"),
            edit(DraftField::Date, "2026-01-10"),
            edit(DraftField::Time, "08:00"),
            WizardEvent::AddStop,
            WizardEvent::SetStopCity {
                index: 0,
                city: "Lonavala".to_string(),
            },
            WizardEvent::Next,
            edit(DraftField::VehicleName, "Honda City"),
            edit(DraftField::VehicleNumber, "MH 12 AB 1234"),
            WizardEvent::Next,
            edit(DraftField::Price, "400"),
        ]
    }

    fn wizard(publisher: MockRidePublisher, notifier: MockNotifier) -> RideOfferWizard {
        RideOfferWizard::new(&OfferConfig::default(), Arc::new(publisher), Arc::new(notifier))
    }

    async fn fill(wizard: &mut RideOfferWizard) {
        for event in filling_events() {
            let outcome = wizard.dispatch(event).await;
            assert!(!matches!(outcome, WizardOutcome::Rejected(_)), "{:?}", outcome);
        }
    }

    #[tokio::test]
    async fn test_publishes_exactly_once() {
        let mut publisher = MockRidePublisher::new();
        publisher
            .expect_publish()
            .withf(|draft| draft.is_complete() && draft.stops.len() == 1)
            .times(1)
            .returning(|_| {
                Ok(PublishReceipt {
                    ride_id: "r42".to_string(),
                })
            });

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notice| {
                notice.kind == NoticeKind::Success
                    && notice.title == "Ride published successfully!"
            })
            .times(1)
            .return_const(());

        let mut wizard = wizard(publisher, notifier);
        fill(&mut wizard).await;

        let outcome = wizard.dispatch(WizardEvent::Submit).await;
        assert_eq!(
            outcome,
            WizardOutcome::Published(PublishReceipt {
                ride_id: "r42".to_string()
            })
        );
        assert!(wizard.state().is_published());

        let outcome = wizard.dispatch(WizardEvent::Submit).await;
        assert_eq!(outcome, WizardOutcome::Rejected(Rejection::AlreadyPublished));
    }

    #[tokio::test]
    async fn test_incomplete_draft_never_reaches_publisher() {
        let mut publisher = MockRidePublisher::new();
        publisher.expect_publish().times(0);
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);

        let mut wizard = wizard(publisher, notifier);
        let outcome = wizard.dispatch(WizardEvent::Next).await;
        assert_eq!(
            outcome,
            WizardOutcome::Rejected(Rejection::IncompleteStep(WizardStep::Route))
        );
        let outcome = wizard.dispatch(WizardEvent::Submit).await;
        assert_eq!(outcome, WizardOutcome::Rejected(Rejection::NotOnFinalStep));
    }

    #[tokio::test]
    async fn test_publish_failure_returns_to_pricing() {
        let mut publisher = MockRidePublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_| Err(PublishError::Unavailable));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notice| notice.kind == NoticeKind::Error)
            .times(1)
            .return_const(());

        let mut wizard = wizard(publisher, notifier);
        fill(&mut wizard).await;
        let before = wizard.draft().clone();

        let outcome = wizard.dispatch(WizardEvent::Submit).await;
        assert_eq!(outcome, WizardOutcome::PublishFailed(PublishError::Unavailable));
        assert_eq!(wizard.state().step(), Some(WizardStep::Pricing));
        assert_eq!(wizard.draft(), &before);
    }
}

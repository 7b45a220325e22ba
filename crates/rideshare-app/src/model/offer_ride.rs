//! Offer-ride screen built on the offer wizard.

use rideshare_core::{OfferConfig, VehicleType};
use rideshare_engine::mock::AMENITIES;
use rideshare_engine::{
    city_suggestions, DraftField, RideOfferDraft, RideOfferWizard, WizardEvent, WizardOutcome,
    WizardState, WizardStep,
};

use crate::backend::Backend;
use crate::format::format_price;

/// One dot of the progress header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub number: usize,
    pub title: &'static str,
    /// Current or already completed.
    pub reached: bool,
    /// Completed; shown with a check mark.
    pub passed: bool,
}

/// A selectable amenity and whether the draft includes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// State behind the offer-ride screen.
pub struct OfferRideScreen {
    wizard: RideOfferWizard,
    max_seats: u32,
}

impl OfferRideScreen {
    pub fn new(config: &OfferConfig, backend: &dyn Backend) -> Self {
        Self {
            wizard: RideOfferWizard::new(config, backend.publisher(), backend.notifier()),
            max_seats: config.max_seats,
        }
    }

    pub fn state(&self) -> &WizardState {
        self.wizard.state()
    }

    pub fn draft(&self) -> &RideOfferDraft {
        self.wizard.draft()
    }

    pub async fn dispatch(&mut self, event: WizardEvent) -> WizardOutcome {
        self.wizard.dispatch(event).await
    }

    /// Edit a text field. Vehicle numbers are upper-cased as typed.
    pub async fn edit(&mut self, field: DraftField, value: &str) -> WizardOutcome {
        let value = match field {
            DraftField::VehicleNumber => value.to_uppercase(),
            _ => value.to_string(),
        };
        self.dispatch(WizardEvent::Edit { field, value }).await
    }

    // =========================================================================
    // Progress
    // =========================================================================

    pub fn progress(&self) -> Vec<StepIndicator> {
        let state = self.wizard.state();
        WizardStep::ALL
            .iter()
            .map(|step| StepIndicator {
                number: step.number(),
                title: step.title(),
                reached: state.reached(*step),
                passed: state.passed(*step),
            })
            .collect()
    }

    /// Heading of the current step; `None` once published.
    pub fn title(&self) -> Option<&'static str> {
        self.wizard.state().step().map(|step| step.title())
    }

    /// Whether "Continue" (or "Publish Ride" on the last step) is enabled.
    pub fn can_continue(&self) -> bool {
        self.wizard.state().can_advance()
    }

    // =========================================================================
    // Field helpers
    // =========================================================================

    pub fn from_suggestions(&self) -> Vec<&'static str> {
        city_suggestions(&self.draft().from_city, None)
    }

    pub fn to_suggestions(&self) -> Vec<&'static str> {
        city_suggestions(&self.draft().to_city, None)
    }

    pub fn seat_options(&self) -> Vec<u32> {
        (1..=self.max_seats).collect()
    }

    pub fn vehicle_options(&self) -> Vec<(VehicleType, &'static str, bool)> {
        VehicleType::ALL
            .iter()
            .map(|v| (*v, v.description(), self.draft().vehicle_type == *v))
            .collect()
    }

    pub fn amenity_options(&self) -> Vec<AmenityOption> {
        AMENITIES
            .iter()
            .map(|&(id, label)| AmenityOption {
                id,
                label,
                selected: self.draft().amenities.contains(id),
            })
            .collect()
    }

    // =========================================================================
    // Earnings
    // =========================================================================

    /// Projected earnings, e.g. `"₹1200"`.
    pub fn earnings_label(&self) -> String {
        format_price(self.draft().projected_earnings() as f64)
    }

    pub fn earnings_caption(&self) -> String {
        format!("If all {} seats are booked", self.draft().seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use rideshare_engine::{NoticeKind, Rejection};

    async fn fill_route(screen: &mut OfferRideScreen) {
        screen.edit(DraftField::FromCity, "Pune").await;
        screen.edit(DraftField::ToCity, "Mumbai").await;
        screen.edit(DraftField::Date, "2026-01-10").await;
        screen.edit(DraftField::Time, "08:00").await;
    }

    #[tokio::test]
    async fn test_progress_indicators() {
        let backend = MockBackend::new();
        let mut screen = OfferRideScreen::new(&OfferConfig::default(), &backend);

        let progress = screen.progress();
        assert_eq!(progress.len(), 3);
        assert!(progress[0].reached && !progress[0].passed);
        assert!(!progress[1].reached);
        assert_eq!(screen.title(), Some("Route Details"));

        fill_route(&mut screen).await;
        assert!(screen.can_continue());
        screen.dispatch(WizardEvent::Next).await;

        let progress = screen.progress();
        assert!(progress[0].passed);
        assert!(progress[1].reached && !progress[1].passed);
        assert_eq!(screen.title(), Some("Vehicle Details"));
    }

    #[tokio::test]
    async fn test_vehicle_number_uppercased() {
        let backend = MockBackend::new();
        let mut screen = OfferRideScreen::new(&OfferConfig::default(), &backend);
        screen.edit(DraftField::VehicleNumber, "mh 12 ab 1234").await;
        assert_eq!(screen.draft().vehicle_number, "MH 12 AB 1234");
        screen.edit(DraftField::VehicleName, "Honda City").await;
        assert_eq!(screen.draft().vehicle_name, "Honda City");
    }

    #[tokio::test]
    async fn test_earnings_follow_price_and_seats() {
        let backend = MockBackend::new();
        let mut screen = OfferRideScreen::new(&OfferConfig::default(), &backend);
        assert_eq!(screen.earnings_label(), "₹0");

        screen.edit(DraftField::Price, "400").await;
        assert_eq!(screen.earnings_label(), "₹1200");
        assert_eq!(screen.earnings_caption(), "If all 3 seats are booked");

        screen.dispatch(WizardEvent::SetSeats(5)).await;
        assert_eq!(screen.earnings_label(), "₹2000");

        let outcome = screen.dispatch(WizardEvent::SetSeats(9)).await;
        assert_eq!(
            outcome,
            WizardOutcome::Rejected(Rejection::SeatsOutOfRange {
                requested: 9,
                max: 6
            })
        );
        assert_eq!(screen.seat_options(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_amenity_and_vehicle_options() {
        let backend = MockBackend::new();
        let mut screen = OfferRideScreen::new(&OfferConfig::default(), &backend);

        let selected: Vec<&str> = screen
            .amenity_options()
            .into_iter()
            .filter(|a| a.selected)
            .map(|a| a.id)
            .collect();
        assert_eq!(selected, vec!["ac", "music"]);

        screen
            .dispatch(WizardEvent::ToggleAmenity("firstaid".to_string()))
            .await;
        assert!(screen.amenity_options().iter().any(|a| a.id == "firstaid" && a.selected));

        screen
            .dispatch(WizardEvent::SetVehicleType(VehicleType::Suv))
            .await;
        let options = screen.vehicle_options();
        assert_eq!(options[1], (VehicleType::Suv, "SUV/MUV", true));
    }

    #[tokio::test]
    async fn test_suggestions_do_not_exclude() {
        let backend = MockBackend::new();
        let mut screen = OfferRideScreen::new(&OfferConfig::default(), &backend);
        screen.edit(DraftField::FromCity, "Pune").await;
        screen.edit(DraftField::ToCity, "pune").await;
        assert_eq!(screen.to_suggestions(), vec!["Pune"]);
    }

    #[tokio::test]
    async fn test_publish_through_backend() {
        let backend = MockBackend::new();
        let mut screen = OfferRideScreen::new(&OfferConfig::default(), &backend);

        fill_route(&mut screen).await;
        screen.dispatch(WizardEvent::AddStop).await;
        screen
            .dispatch(WizardEvent::SetStopCity {
                index: 0,
                city: "Lonavala".to_string(),
            })
            .await;
        screen.dispatch(WizardEvent::Next).await;
        screen.edit(DraftField::VehicleName, "Honda City").await;
        screen.edit(DraftField::VehicleNumber, "mh12ab1234").await;
        screen.dispatch(WizardEvent::Next).await;
        screen.edit(DraftField::Price, "450").await;

        let outcome = screen.dispatch(WizardEvent::Submit).await;
        assert!(matches!(outcome, WizardOutcome::Published(_)));
        assert_eq!(screen.title(), None);
        assert!(screen.progress().iter().all(|s| s.passed));

        let drafts = backend.publisher.drafts.lock();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].stops[0].city, "Lonavala");
        assert_eq!(drafts[0].vehicle_number, "MH12AB1234");

        let notices = backend.notifier.notices.lock();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
    }
}

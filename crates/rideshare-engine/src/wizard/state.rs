//! Offer wizard state machine.
//!
//! The wizard is a pure reducer: `reduce(state, event)` returns the next
//! state and at most one effect. It never performs I/O; publishing is an
//! effect the driver hands to a collaborator.

use rideshare_core::{OfferConfig, VehicleType};

use super::draft::{DraftField, RideOfferDraft, StopDraft};

// =============================================================================
// Steps and Phases
// =============================================================================

/// One screen of the wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Route,
    Vehicle,
    Pricing,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] =
        [WizardStep::Route, WizardStep::Vehicle, WizardStep::Pricing];

    /// 1-based position for progress indicators.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Route => 1,
            WizardStep::Vehicle => 2,
            WizardStep::Pricing => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Route => "Route Details",
            WizardStep::Vehicle => "Vehicle Details",
            WizardStep::Pricing => "Set Your Price",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Route => Some(WizardStep::Vehicle),
            WizardStep::Vehicle => Some(WizardStep::Pricing),
            WizardStep::Pricing => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Route => None,
            WizardStep::Vehicle => Some(WizardStep::Route),
            WizardStep::Pricing => Some(WizardStep::Vehicle),
        }
    }

    /// Whether the draft satisfies this step's gate.
    pub fn is_satisfied_by(&self, draft: &RideOfferDraft) -> bool {
        match self {
            WizardStep::Route => draft.route_complete(),
            WizardStep::Vehicle => draft.vehicle_complete(),
            WizardStep::Pricing => draft.pricing_complete(),
        }
    }
}

/// Top-level wizard phase. `Published` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Editing(WizardStep),
    Published,
}

impl Default for WizardPhase {
    fn default() -> Self {
        WizardPhase::Editing(WizardStep::Route)
    }
}

// =============================================================================
// Events, Effects, Rejections
// =============================================================================

/// User input fed to the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    Edit { field: DraftField, value: String },
    SetVehicleType(VehicleType),
    SetSeats(u32),
    ToggleAmenity(String),
    AddStop,
    SetStopCity { index: usize, city: String },
    SetStopAddress { index: usize, address: String },
    RemoveStop(usize),
    Next,
    Back,
    Submit,
}

/// Why an event left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The gate of this step does not hold.
    IncompleteStep(WizardStep),
    /// Stops can only be edited on the route step.
    StopsLocked,
    StopIndexOutOfRange { index: usize, len: usize },
    SeatsOutOfRange { requested: u32, max: u32 },
    AtFirstStep,
    /// `Next` on the last step; use `Submit`.
    AtFinalStep,
    NotOnFinalStep,
    AlreadyPublished,
}

/// Outcome of a transition that the driver must act on or report.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEffect {
    Advanced(WizardStep),
    WentBack(WizardStep),
    Rejected(Rejection),
    /// Hand the finished draft to the publisher.
    Publish(RideOfferDraft),
}

// =============================================================================
// Wizard State
// =============================================================================

/// Wizard state: the phase plus the draft accumulated so far.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub phase: WizardPhase,
    pub draft: RideOfferDraft,
    pub max_seats: u32,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(&OfferConfig::default())
    }
}

impl WizardState {
    pub fn new(config: &OfferConfig) -> Self {
        Self {
            phase: WizardPhase::default(),
            draft: RideOfferDraft::new(config),
            max_seats: config.max_seats,
        }
    }

    /// Current step, or `None` once published.
    pub fn step(&self) -> Option<WizardStep> {
        match self.phase {
            WizardPhase::Editing(step) => Some(step),
            WizardPhase::Published => None,
        }
    }

    pub fn is_published(&self) -> bool {
        self.phase == WizardPhase::Published
    }

    /// Whether the forward control on the current step is enabled.
    pub fn can_advance(&self) -> bool {
        self.step()
            .is_some_and(|step| step.is_satisfied_by(&self.draft))
    }

    /// Whether `step` has been reached (current or already passed).
    pub fn reached(&self, step: WizardStep) -> bool {
        match self.phase {
            WizardPhase::Editing(current) => current >= step,
            WizardPhase::Published => true,
        }
    }

    /// Whether `step` has been completed and left behind.
    pub fn passed(&self, step: WizardStep) -> bool {
        match self.phase {
            WizardPhase::Editing(current) => current > step,
            WizardPhase::Published => true,
        }
    }
}

/// Apply `event` to `state`.
///
/// Rejected events return the state unchanged together with
/// [`WizardEffect::Rejected`].
pub fn reduce(mut state: WizardState, event: WizardEvent) -> (WizardState, Option<WizardEffect>) {
    let WizardPhase::Editing(step) = state.phase else {
        return (state, Some(WizardEffect::Rejected(Rejection::AlreadyPublished)));
    };

    let rejected = |state: WizardState, rejection: Rejection| {
        (state, Some(WizardEffect::Rejected(rejection)))
    };

    match event {
        WizardEvent::Edit { field, value } => {
            *state.draft.field_mut(field) = value;
            (state, None)
        }
        WizardEvent::SetVehicleType(vehicle_type) => {
            state.draft.vehicle_type = vehicle_type;
            (state, None)
        }
        WizardEvent::SetSeats(seats) => {
            if !(1..=state.max_seats).contains(&seats) {
                let max = state.max_seats;
                return rejected(state, Rejection::SeatsOutOfRange { requested: seats, max });
            }
            state.draft.seats = seats;
            (state, None)
        }
        WizardEvent::ToggleAmenity(id) => {
            state.draft.toggle_amenity(&id);
            (state, None)
        }
        WizardEvent::AddStop
        | WizardEvent::SetStopCity { .. }
        | WizardEvent::SetStopAddress { .. }
        | WizardEvent::RemoveStop(_)
            if step != WizardStep::Route =>
        {
            rejected(state, Rejection::StopsLocked)
        }
        WizardEvent::AddStop => {
            state.draft.stops.push(StopDraft::default());
            (state, None)
        }
        WizardEvent::SetStopCity { index, city } => {
            let len = state.draft.stops.len();
            if index >= len {
                return rejected(state, Rejection::StopIndexOutOfRange { index, len });
            }
            state.draft.stops[index].city = city;
            (state, None)
        }
        WizardEvent::SetStopAddress { index, address } => {
            let len = state.draft.stops.len();
            if index >= len {
                return rejected(state, Rejection::StopIndexOutOfRange { index, len });
            }
            state.draft.stops[index].address = address;
            (state, None)
        }
        WizardEvent::RemoveStop(index) => {
            let len = state.draft.stops.len();
            if index >= len {
                return rejected(state, Rejection::StopIndexOutOfRange { index, len });
            }
            state.draft.stops.remove(index);
            (state, None)
        }
        WizardEvent::Next => {
            let Some(next) = step.next() else {
                return rejected(state, Rejection::AtFinalStep);
            };
            if !step.is_satisfied_by(&state.draft) {
                tracing::debug!("Cannot leave {:?}: gate not satisfied", step);
                return rejected(state, Rejection::IncompleteStep(step));
            }
            tracing::debug!("Wizard advanced to {:?}", next);
            state.phase = WizardPhase::Editing(next);
            (state, Some(WizardEffect::Advanced(next)))
        }
        WizardEvent::Back => {
            let Some(previous) = step.previous() else {
                return rejected(state, Rejection::AtFirstStep);
            };
            tracing::debug!("Wizard went back to {:?}", previous);
            state.phase = WizardPhase::Editing(previous);
            (state, Some(WizardEffect::WentBack(previous)))
        }
        WizardEvent::Submit => {
            if step != WizardStep::Pricing {
                return rejected(state, Rejection::NotOnFinalStep);
            }
            // Earlier steps can be invalidated by later edits
            if let Some(failing) = WizardStep::ALL
                .into_iter()
                .find(|s| !s.is_satisfied_by(&state.draft))
            {
                return rejected(state, Rejection::IncompleteStep(failing));
            }
            tracing::debug!("Wizard draft complete, publishing");
            state.phase = WizardPhase::Published;
            let draft = state.draft.clone();
            (state, Some(WizardEffect::Publish(draft)))
        }
    }
}

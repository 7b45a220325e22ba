//! RideShare - headless entry point.
//!
//! Loads configuration, creates the RuntimeBackend and walks the main
//! screens once: search, ride details with a booking request, offering a
//! ride and the my-rides dashboard.

use std::sync::Arc;

use rideshare_app::backend::{Backend, RuntimeBackend};
use rideshare_app::model::{
    FindRideScreen, MyRidesScreen, OfferRideScreen, RideDetailsScreen, RidesTab, SearchQuery,
};
use rideshare_app::AppResult;
use rideshare_core::{AppConfig, SortBy};
use rideshare_engine::{DraftField, WizardEvent, WizardOutcome};
use tokio_util::sync::CancellationToken;

// =============================================================================
// Configuration
// =============================================================================

/// Load config.toml, falling back to defaults when it is unusable.
fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{} - continuing with default configuration", e);
            AppConfig::default()
        }
    }
}

// =============================================================================
// Walkthrough
// =============================================================================

async fn run(config: &AppConfig, backend: Arc<RuntimeBackend>) -> AppResult<()> {
    // Step 1: Search from the query a popular route would open
    let query = SearchQuery::from_pairs([("from", "Mumbai"), ("to", "Pune")]);
    let find = FindRideScreen::new(backend.engine(), query, &config.search);
    find.set_sort(SortBy::Price);
    tracing::info!(
        "{} ({})",
        find.heading(),
        find.route_caption().unwrap_or_default()
    );

    // Step 2: Open the first result and request two seats
    let Some(ride) = find.results().into_iter().next() else {
        tracing::warn!("No rides found - nothing to book");
        return Ok(());
    };
    let mut screen = RideDetailsScreen::load(backend.as_ref(), &ride.id).await?;
    if let Some(details) = screen.details_mut() {
        details.select_seats(2);
        let (line, total) = details.fare_line();
        tracing::info!(
            "{} on {} at {}: {} = {}",
            ride.id,
            details.date_label(),
            details.time_label(),
            line,
            total
        );

        let cancel = CancellationToken::new();
        match details.book(backend.as_ref(), cancel).await {
            Ok(booking) => tracing::info!("Booking {} is {}", booking.id, booking.status),
            Err(e) => tracing::warn!("Booking failed: {}", e),
        }
    }

    // Step 3: Offer a ride
    let mut offer = OfferRideScreen::new(&config.offer, backend.as_ref());
    let route = [
        (DraftField::FromCity, "Pune"),
        (DraftField::ToCity, "Goa"),
        (DraftField::Date, "2026-02-14"),
        (DraftField::Time, "06:30"),
    ];
    for (field, value) in route {
        offer.edit(field, value).await;
    }
    offer.dispatch(WizardEvent::Next).await;
    offer.edit(DraftField::VehicleName, "Mahindra XUV700").await;
    offer.edit(DraftField::VehicleNumber, "mh 14 gh 4521").await;
    offer.dispatch(WizardEvent::Next).await;
    offer.edit(DraftField::Price, "900").await;
    tracing::info!("{} {}", offer.earnings_label(), offer.earnings_caption());

    match offer.dispatch(WizardEvent::Submit).await {
        WizardOutcome::Published(receipt) => {
            tracing::info!("Offer listed as {}", receipt.ride_id)
        }
        other => tracing::warn!("Offer not published: {:?}", other),
    }

    // Step 4: Dashboard
    let mut rides = MyRidesScreen::new(backend.dashboard().await?);
    for tab in [RidesTab::Passenger, RidesTab::Driver] {
        rides.select_tab(tab);
        tracing::info!("{}: {}", tab.label(), rides.count(tab));
    }

    Ok(())
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("RideShare starting...");

    let config = load_config();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let backend = match RuntimeBackend::new(&config) {
        Ok(backend) => Arc::new(backend),
        Err(e) => {
            tracing::error!("Failed to create backend: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Backend created");

    if let Err(e) = rt.block_on(run(&config, backend)) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

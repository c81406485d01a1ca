//! # petcared: pet care daemon
//!
//! Composition root that wires storage, the event bus, and the pet care
//! service together and keeps idle pets decaying in the background.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Load the pet snapshot and construct the repository (adapter)
//! - Construct the application service, injecting ports
//! - Run the periodic decay sweeper and log every care event
//! - On Ctrl-C: stop the sweeper and write the snapshot back
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use petcare_adapter_storage_memory::InMemoryPetRepository;
use petcare_app::decay_sweeper::DecaySweeper;
use petcare_app::event_bus::InProcessEventBus;
use petcare_app::ports::SystemClock;
use petcare_app::services::pet_care_service::PetCareService;
use petcare_domain::care::PetCareEngine;
use petcare_domain::event::CareEvent;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let snapshot_path = config.storage.snapshot_path.clone();
    let repo = Arc::new(
        InMemoryPetRepository::load_snapshot(&snapshot_path)
            .with_context(|| format!("failed to load snapshot {}", snapshot_path.display()))?,
    );

    // Event bus
    let bus = Arc::new(InProcessEventBus::new(config.events.capacity));
    let event_logger = spawn_event_logger(bus.subscribe());

    // Service
    let service = Arc::new(PetCareService::new(
        PetCareEngine::new(config.schedule),
        Arc::clone(&repo),
        Arc::clone(&bus),
        SystemClock,
    ));

    let pets = service.list_pets().await?;
    for pet in &pets {
        let status = service.peek_status(pet.id).await?;
        tracing::debug!(
            pet_id = %pet.id,
            name = %pet.name,
            happiness = status.happiness,
            energy = status.energy,
            mood = %status.mood,
            can_feed = status.can_feed_now,
            can_play = status.can_play_now,
            "pet status"
        );
    }
    tracing::info!(pets = pets.len(), "petcared ready");

    let sweeper = config
        .sweeper
        .enabled
        .then(|| DecaySweeper::start(Arc::clone(&service), config.sweep_interval()));

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("shutdown requested");

    if let Some(sweeper) = sweeper {
        sweeper.stop().await;
    }

    // Dropping the last bus handle closes the channel and ends the logger.
    drop(service);
    drop(bus);
    if let Err(err) = event_logger.await {
        tracing::warn!(%err, "event logger ended abnormally");
    }

    repo.save_snapshot(&snapshot_path)
        .with_context(|| format!("failed to write snapshot {}", snapshot_path.display()))?;

    Ok(())
}

/// Log every care event until the bus closes.
fn spawn_event_logger(mut rx: broadcast::Receiver<CareEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => tracing::info!(
                    pet_id = %event.pet_id,
                    kind = %event.kind,
                    happiness = event.state.happiness,
                    energy = event.state.energy,
                    mood = %event.state.mood,
                    xp = event.state.xp,
                    "care event"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event logger fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

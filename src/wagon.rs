//! Lifecycle through which the host's event train drives a skim

use crate::{
    config::SkimConfig,
    particle::ParticleTable,
    skim::MissingNeutronSkim,
    Result,
};

use eyre::WrapErr;
use tracing::info;

/// A skim plugged into the host's event train
pub trait Wagon {
    /// Name of the skim
    fn name(&self) -> &'static str;

    /// Maintainer of the skim
    fn author(&self) -> &'static str;

    /// Version of the selection logic
    fn version(&self) -> &'static str;

    /// Prepare for event processing, called once before the first event
    ///
    /// Takes the JSON configuration payload that the host associates with this
    /// wagon, which may be blank.
    ///
    fn init(&mut self, config: &str) -> Result<()>;

    /// Decide whether an event should be retained
    fn process_event(&self, table: &dyn ParticleTable) -> bool;
}

impl Wagon for MissingNeutronSkim {
    fn name(&self) -> &'static str {
        "MissingNeutronWagon"
    }

    fn author(&self) -> &'static str {
        "jnewton"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn init(&mut self, config: &str) -> Result<()> {
        let config = SkimConfig::from_json(config)
            .wrap_err_with(|| format!("Failed to initialize {}", self.name()))?;
        config.print();
        self.set_config(config);
        info!("{} READY.", self.name());
        Ok(())
    }

    fn process_event(&self, table: &dyn ParticleTable) -> bool {
        self.evaluate(table)
    }
}

//! Mechanism for loading and checking the skim configuration

use crate::{
    kinematics::InitialState,
    numeric::{widen, Float},
    Result,
};

use eyre::{ensure, WrapErr};
use serde::Deserialize;
use tracing::debug;

/// Open interval of a kinematic quantity
///
/// Both edges are excluded, and NaN is never inside.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Window {
    /// Lower edge (excluded)
    pub low: Float,

    /// Upper edge (excluded)
    pub high: Float,
}
//
impl Window {
    /// Build a window from its edges
    pub fn new(low: Float, high: Float) -> Self {
        Self { low, high }
    }

    /// Truth that a value lies strictly within the window
    pub fn contains(&self, x: Float) -> bool {
        x > self.low && x < self.high
    }

    /// Check that this window is sensible
    fn check(&self, name: &str) -> Result<()> {
        ensure!(
            self.low.is_finite() && self.high.is_finite(),
            "Edges of the {} window must be finite",
            name
        );
        ensure!(
            self.low < self.high,
            "The {} window is empty ({} >= {})",
            name,
            self.low,
            self.high
        );
        Ok(())
    }
}

/// Skim configuration
///
/// Every field may be omitted from the JSON payload, in which case it takes
/// its default value. Unknown keys are ignored, so the host framework may
/// share the payload with other wagons.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkimConfig {
    /// Beam energy (GeV)
    pub beam_energy: Float,

    /// Target proton mass (GeV)
    pub proton_mass: Float,

    /// Momentum window of scattered electrons (GeV/c)
    pub electron_momentum: Window,

    /// Minimal momentum of high-momentum negative tracks (GeV/c)
    pub pion_momentum_min: Float,

    /// Missing mass window around the neutron mass (GeV)
    pub neutron_mass: Window,
}
//
impl Default for SkimConfig {
    /// Cuts of the pion rejection study
    fn default() -> Self {
        Self {
            beam_energy: widen(10.6),
            proton_mass: widen(0.938),
            electron_momentum: Window::new(widen(0.5), widen(4.5)),
            pion_momentum_min: widen(5.0),
            neutron_mass: Window::new(widen(0.7), widen(1.3)),
        }
    }
}
//
impl SkimConfig {
    /// Parse the configuration payload handed over by the host at init time
    ///
    /// A blank payload selects the default configuration.
    ///
    pub fn from_json(payload: &str) -> Result<Self> {
        let config = if payload.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str::<Self>(payload)
                .wrap_err("Could not parse the skim configuration payload")?
        };
        config.check()?;
        Ok(config)
    }

    /// Check that the configuration is physically sensible
    pub fn check(&self) -> Result<()> {
        ensure!(
            self.beam_energy.is_finite() && self.beam_energy > 0.,
            "Beam energy must be positive, got {}",
            self.beam_energy
        );
        ensure!(
            self.proton_mass.is_finite() && self.proton_mass > 0.,
            "Proton mass must be positive, got {}",
            self.proton_mass
        );
        ensure!(
            self.pion_momentum_min.is_finite(),
            "Pion momentum threshold must be finite"
        );
        self.electron_momentum.check("electron momentum")?;
        self.neutron_mass.check("neutron mass")?;
        Ok(())
    }

    /// Initial state of the collisions that this configuration describes
    pub fn initial_state(&self) -> InitialState {
        InitialState {
            beam_energy: self.beam_energy,
            target_mass: self.proton_mass,
        }
    }

    /// Log the configuration
    pub fn print(&self) {
        debug!(beam_energy = self.beam_energy, proton_mass = self.proton_mass, "Initial state");
        debug!(
            low = self.electron_momentum.low,
            high = self.electron_momentum.high,
            "Electron momentum window"
        );
        debug!(min = self.pion_momentum_min, "Pion momentum threshold");
        debug!(
            low = self.neutron_mass.low,
            high = self.neutron_mass.high,
            "Missing neutron mass window"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_widened_single_precision() {
        let cfg = SkimConfig::default();
        assert_eq!(cfg.beam_energy, 10.6f32 as Float);
        assert_eq!(cfg.proton_mass, 0.938f32 as Float);
        assert_eq!(cfg.electron_momentum, Window::new(0.5, 4.5));
        assert_eq!(cfg.pion_momentum_min, 5.);
        assert_eq!(cfg.neutron_mass, Window::new(0.7f32 as Float, 1.3f32 as Float));
    }

    #[test]
    fn blank_payload_selects_defaults() {
        assert_eq!(SkimConfig::from_json("").unwrap(), SkimConfig::default());
        assert_eq!(SkimConfig::from_json("  \n").unwrap(), SkimConfig::default());
        assert_eq!(SkimConfig::from_json("{}").unwrap(), SkimConfig::default());
    }

    #[test]
    fn partial_payload_overrides_named_fields() {
        let cfg = SkimConfig::from_json(
            r#"{ "beam_energy": 6.5, "neutron_mass": { "low": 0.8, "high": 1.1 }, "bank": "REC::Particle" }"#,
        )
        .unwrap();
        assert_eq!(cfg.beam_energy, 6.5);
        assert_eq!(cfg.neutron_mass, Window::new(0.8, 1.1));
        assert_eq!(cfg.proton_mass, SkimConfig::default().proton_mass);
        assert_eq!(cfg.electron_momentum, SkimConfig::default().electron_momentum);
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert!(SkimConfig::from_json("not json").is_err());
        assert!(SkimConfig::from_json(r#"{ "beam_energy": "high" }"#).is_err());
        assert!(SkimConfig::from_json(r#"{ "neutron_mass": { "low": 0.8 } }"#).is_err());
    }

    #[test]
    fn insensible_payload_is_rejected() {
        let inverted = r#"{ "electron_momentum": { "low": 4.5, "high": 0.5 } }"#;
        let err = SkimConfig::from_json(inverted).unwrap_err();
        assert!(err.to_string().contains("electron momentum"));
        assert!(SkimConfig::from_json(r#"{ "beam_energy": -1.0 }"#).is_err());
        assert!(SkimConfig::from_json(r#"{ "proton_mass": 0.0 }"#).is_err());
    }

    #[test]
    fn window_excludes_edges_and_nan() {
        let window = Window::new(0.5, 4.5);
        assert!(window.contains(0.51));
        assert!(window.contains(4.49));
        assert!(!window.contains(0.5));
        assert!(!window.contains(4.5));
        assert!(!window.contains(Float::NAN));
    }

    #[test]
    fn initial_state_follows_config() {
        let state = SkimConfig::default().initial_state();
        assert_eq!(state.beam_energy, SkimConfig::default().beam_energy);
        assert_eq!(state.target_mass, SkimConfig::default().proton_mass);
    }
}

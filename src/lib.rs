//! Missing-neutron skim: event selection for a pion rejection study
//!
//!
//! # Introduction (for the physicist)
//!
//! Electron identification in the forward detector is contaminated by
//! high-energy pions. To study that contamination, we want a sample of events
//! which contain both an electron candidate and a charged track that is most
//! likely a pion, for example the π⁺ of e p → e' π⁺ n where the neutron goes
//! unobserved and is reconstructed through the missing mass.
//!
//! This crate decides, event by event, whether an event belongs in that sample.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The host framework reads events from storage and streams them through a
//! train of "wagons". This crate is one such wagon: it only sees one event's
//! particle bank at a time, through the narrow `ParticleTable` interface, and
//! answers with a boolean. It holds no per-event state, so events may be
//! evaluated concurrently from shared references.
//!
//! The selection goes through the following steps:
//!
//! * classify forward-detector particles into electron, positive and negative
//!   candidates, following an ordered list of PID rules
//! * accept any electron coexisting with a positive or negative candidate
//! * otherwise apply momentum cuts and a missing-neutron-mass cut to the
//!   remaining candidates.

#![warn(missing_docs)]

pub mod candidates;
pub mod config;
pub mod kinematics;
pub mod momentum;
pub mod numeric;
pub mod particle;
pub mod skim;
pub mod wagon;

pub use crate::{
    config::SkimConfig,
    particle::{Event, ParticleRecord, ParticleTable},
    skim::{MissingNeutronSkim, Verdict},
    wagon::Wagon,
};

/// We'll use eyre's type-erased result type throughout the crate
pub type Result<T> = eyre::Result<T>;

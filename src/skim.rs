//! Event selection for the high-energy pion rejection study
//!
//! An event is kept when it holds a forward-detector electron candidate
//! together with a forward-detector charged track, so that pions faking
//! electrons can be studied against a clean electron sample.

use crate::{
    candidates::CandidateSet,
    config::SkimConfig,
    momentum::magnitude,
    particle::ParticleTable,
};

use tracing::trace;

/// Stage of the selection that decided the fate of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The event has no particle at all
    EmptyEvent,
    /// No particle qualifies for any role
    NoCandidates,
    /// Electron and positive track candidates
    PositivePion,
    /// Electron and negative track candidates
    NegativePion,
    /// Electron within its momentum window, high-momentum negative track
    HighMomentumNegative,
    /// Electron within its momentum window, positive track recoiling against
    /// a missing neutron
    MissingNeutron,
    /// No selection criterion was met
    Rejected,
}
//
impl Verdict {
    /// Truth that the event should be retained
    pub fn accepted(self) -> bool {
        !matches!(
            self,
            Verdict::EmptyEvent | Verdict::NoCandidates | Verdict::Rejected
        )
    }
}

/// Missing-neutron skim
#[derive(Clone, Debug, Default)]
pub struct MissingNeutronSkim {
    /// Cuts in use
    config: SkimConfig,
}
//
impl MissingNeutronSkim {
    /// Set up the skim with a given configuration
    pub fn new(config: SkimConfig) -> Self {
        Self { config }
    }

    /// Cuts in use
    pub fn config(&self) -> &SkimConfig {
        &self.config
    }

    /// Replace the cuts in use
    pub(crate) fn set_config(&mut self, config: SkimConfig) {
        self.config = config;
    }

    /// Decide whether an event should be retained
    pub fn evaluate(&self, table: &(impl ParticleTable + ?Sized)) -> bool {
        self.verdict(table).accepted()
    }

    /// Decide the fate of an event, telling which stage decided
    pub fn verdict(&self, table: &(impl ParticleTable + ?Sized)) -> Verdict {
        let verdict = self.select(table);
        trace!(rows = table.rows(), ?verdict, "Event processed");
        verdict
    }

    /// Selection logic proper
    fn select(&self, table: &(impl ParticleTable + ?Sized)) -> Verdict {
        if table.rows() == 0 {
            return Verdict::EmptyEvent;
        }

        // Sort forward-detector particles into role candidates
        let candidates = CandidateSet::classify(table);
        if candidates.is_empty() {
            return Verdict::NoCandidates;
        }

        // Electron with a pion of either charge
        if !candidates.electrons.is_empty() && !candidates.positives.is_empty() {
            return Verdict::PositivePion;
        }
        if !candidates.electrons.is_empty() && !candidates.negatives.is_empty() {
            return Verdict::NegativePion;
        }

        // NOTE: Every criterion of the refinement requires an electron
        //       alongside a positive or negative candidate, which the two
        //       shortcuts above already accept. It only decides anything once
        //       the shortcuts are removed.
        self.refine(table, &candidates)
    }

    /// Momentum and missing-mass cuts on the role candidates
    fn refine(
        &self,
        table: &(impl ParticleTable + ?Sized),
        candidates: &CandidateSet,
    ) -> Verdict {
        let cfg = &self.config;

        // Electrons and negative tracks within momentum cuts
        let electrons_in_window = candidates
            .electrons
            .iter()
            .filter(|&&row| cfg.electron_momentum.contains(magnitude(table, row)))
            .count();
        let energetic_negatives = candidates
            .negatives
            .iter()
            .filter(|&&row| magnitude(table, row) > cfg.pion_momentum_min)
            .count();
        if electrons_in_window > 0 && energetic_negatives > 0 {
            return Verdict::HighMomentumNegative;
        }

        // Positive tracks recoiling against a neutron, with any electron
        let initial = cfg.initial_state();
        let positives_with_neutron = candidates
            .electrons
            .iter()
            .flat_map(|&ele| candidates.positives.iter().map(move |&pos| (ele, pos)))
            .filter(|&(ele, pos)| {
                cfg.neutron_mass
                    .contains(initial.missing_mass_of(table, ele, pos))
            })
            .count();
        if electrons_in_window > 0 && positives_with_neutron > 0 {
            return Verdict::MissingNeutron;
        }

        Verdict::Rejected
    }
}

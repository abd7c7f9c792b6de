//! Missing-mass reconstruction for a fixed-target collision

use crate::{
    momentum::{momentum, Momentum, Z},
    numeric::Float,
    particle::ParticleTable,
};
use prefix_num_ops::real::*;

/// Initial state of a beam-on-fixed-target collision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialState {
    /// Beam energy (GeV), the beam running along +z
    pub beam_energy: Float,

    /// Target mass (GeV), the target being at rest
    pub target_mass: Float,
}
//
impl InitialState {
    /// Total energy of the initial state
    pub fn energy(&self) -> Float {
        self.beam_energy + self.target_mass
    }

    /// Total 3-momentum of the initial state (massless beam)
    pub fn momentum(&self) -> Momentum {
        let mut p = Momentum::zeros();
        p[Z] = self.beam_energy;
        p
    }

    /// Invariant mass of whatever recoils against two observed particles
    ///
    /// Both observed particles are treated as massless. For unphysical
    /// kinematics, the squared mass is negative and the result is NaN, which
    /// compares false against any window.
    ///
    pub fn missing_mass(&self, p1: &Momentum, p2: &Momentum) -> Float {
        let missing_energy = self.energy() - (p1.norm() + p2.norm());
        let missing_p = (self.momentum() - (p1 + p2)).norm();
        sqrt(missing_energy * missing_energy - missing_p * missing_p)
    }

    /// Missing mass of two rows of a particle table
    pub fn missing_mass_of(
        &self,
        table: &(impl ParticleTable + ?Sized),
        row1: usize,
        row2: usize,
    ) -> Float {
        self.missing_mass(&momentum(table, row1), &momentum(table, row2))
    }
}

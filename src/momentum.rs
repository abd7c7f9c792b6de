//! This module implements some domain-specific 3-momentum handling logic.

use crate::{
    numeric::Float,
    particle::{FloatField, ParticleTable},
};
use nalgebra::SVector;

/// 3-momentum dimension
pub const MOMENTUM_DIM: usize = 3;

/// Spatial momentum of a reconstructed particle (GeV/c)
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the X coordinate of a 3-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 3-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 3-vector
pub const Z: usize = 2;

/// Read the momentum of a given row of a particle table
pub fn momentum(table: &(impl ParticleTable + ?Sized), row: usize) -> Momentum {
    Momentum::new(
        table.get_float(FloatField::Px, row),
        table.get_float(FloatField::Py, row),
        table.get_float(FloatField::Pz, row),
    )
}

/// Momentum magnitude of a given row of a particle table
///
/// Particles are treated as massless throughout this crate, so this is also
/// their energy.
///
pub fn magnitude(table: &(impl ParticleTable + ?Sized), row: usize) -> Float {
    momentum(table, row).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleRecord;

    #[test]
    fn reads_components_in_order() {
        let rows = [ParticleRecord::new([1., -2., 3.], 11, 2000)];
        let p = momentum(&rows[..], 0);
        assert_eq!((p[X], p[Y], p[Z]), (1., -2., 3.));
    }

    #[test]
    fn magnitude_is_euclidean_norm() {
        let rows = [
            ParticleRecord::new([3., 4., 0.], 11, 2000),
            ParticleRecord::new([0., 0., -6.], -211, 2000),
            ParticleRecord::new([0., 0., 0.], 22, 2000),
        ];
        assert_eq!(magnitude(&rows[..], 0), 5.);
        assert_eq!(magnitude(&rows[..], 1), 6.);
        assert_eq!(magnitude(&rows[..], 2), 0.);
    }
}

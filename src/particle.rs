//! This module defines the reconstructed-particle records that the skim reads,
//! and the narrow table interface through which it reads them

use crate::numeric::Float;

/// Particle identification codes assigned by event reconstruction
pub mod pid {
    /// Electron
    pub const ELECTRON: i32 = 11;

    /// Positron
    pub const POSITRON: i32 = -11;

    /// Positive pion
    pub const PI_PLUS: i32 = 211;

    /// Negative pion
    pub const PI_MINUS: i32 = -211;
}

/// Floating-point columns of the reconstructed-particle bank
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatField {
    /// Momentum along x (GeV/c)
    Px,
    /// Momentum along y (GeV/c)
    Py,
    /// Momentum along z, the beam axis (GeV/c)
    Pz,
}
//
impl FloatField {
    /// Column name in the reconstructed-particle bank
    pub fn name(self) -> &'static str {
        match self {
            FloatField::Px => "px",
            FloatField::Py => "py",
            FloatField::Pz => "pz",
        }
    }
}

/// Integer columns of the reconstructed-particle bank
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntField {
    /// Particle identification code
    Pid,
    /// Detector status code
    Status,
}
//
impl IntField {
    /// Column name in the reconstructed-particle bank
    pub fn name(self) -> &'static str {
        match self {
            IntField::Pid => "pid",
            IntField::Status => "status",
        }
    }
}

/// Read-only, row-oriented view of one event's particle bank
///
/// This is all the skim knows about the host's storage. Implementations only
/// need to answer for rows below `rows()`.
///
pub trait ParticleTable {
    /// Number of particle rows in the event
    fn rows(&self) -> usize;

    /// Read a floating-point column of a given row
    fn get_float(&self, field: FloatField, row: usize) -> Float;

    /// Read an integer column of a given row
    fn get_int(&self, field: IntField, row: usize) -> i32;
}

/// Detector region a particle was reconstructed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectorRegion(pub i32);
//
impl DetectorRegion {
    /// Forward detector
    pub const FORWARD: Self = Self(2);

    /// Decode the region from a detector status code
    ///
    /// The sign of the status only flags the trigger particle, so the region is
    /// the thousands digit of its magnitude.
    ///
    pub fn from_status(status: i32) -> Self {
        Self((status.unsigned_abs() / 1000) as i32)
    }
}

/// One row of the reconstructed-particle bank
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleRecord {
    /// Momentum components (GeV/c)
    pub p: [Float; 3],

    /// Particle identification code
    pub pid: i32,

    /// Detector status code
    pub status: i32,
}
//
impl ParticleRecord {
    /// Build a particle record from its momentum, PID and status
    pub fn new(p: [Float; 3], pid: i32, status: i32) -> Self {
        Self { p, pid, status }
    }

    /// Detector region this particle was reconstructed in
    pub fn region(&self) -> DetectorRegion {
        DetectorRegion::from_status(self.status)
    }
}

impl ParticleTable for [ParticleRecord] {
    fn rows(&self) -> usize {
        self.len()
    }

    fn get_float(&self, field: FloatField, row: usize) -> Float {
        let p = &self[row].p;
        match field {
            FloatField::Px => p[0],
            FloatField::Py => p[1],
            FloatField::Pz => p[2],
        }
    }

    fn get_int(&self, field: IntField, row: usize) -> i32 {
        let record = &self[row];
        match field {
            IntField::Pid => record.pid,
            IntField::Status => record.status,
        }
    }
}

/// Storage for the particles of one reconstructed event
///
/// Row order is whatever the reconstruction produced. In particular, nothing
/// guarantees that the trigger particle sits in row 0.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event(Vec<ParticleRecord>);
//
impl Event {
    /// Build an event from its particle rows
    pub fn new(particles: Vec<ParticleRecord>) -> Self {
        Self(particles)
    }

    /// Access the particle rows
    pub fn particles(&self) -> &[ParticleRecord] {
        &self.0
    }
}

impl FromIterator<ParticleRecord> for Event {
    fn from_iter<I: IntoIterator<Item = ParticleRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl ParticleTable for Event {
    fn rows(&self) -> usize {
        self.0.rows()
    }

    fn get_float(&self, field: FloatField, row: usize) -> Float {
        self.0.get_float(field, row)
    }

    fn get_int(&self, field: IntField, row: usize) -> i32 {
        self.0.get_int(field, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_uses_status_magnitude() {
        assert_eq!(DetectorRegion::from_status(2000), DetectorRegion::FORWARD);
        assert_eq!(DetectorRegion::from_status(2999), DetectorRegion::FORWARD);
        assert_eq!(DetectorRegion::from_status(-2110), DetectorRegion::FORWARD);
        assert_eq!(DetectorRegion::from_status(1999), DetectorRegion(1));
        assert_eq!(DetectorRegion::from_status(4001), DetectorRegion(4));
        assert_eq!(DetectorRegion::from_status(0), DetectorRegion(0));
        assert_eq!(DetectorRegion::from_status(i32::MIN), DetectorRegion(2_147_483));
    }

    #[test]
    fn event_exposes_bank_columns() {
        let event: Event = vec![
            ParticleRecord::new([0.1, 0.2, 3.0], pid::ELECTRON, -2010),
            ParticleRecord::new([-0.4, 0.5, 1.5], pid::PI_PLUS, 2110),
        ]
        .into_iter()
        .collect();

        assert_eq!(event.rows(), 2);
        assert_eq!(event.get_float(FloatField::Pz, 0), 3.0);
        assert_eq!(event.get_float(FloatField::Px, 1), -0.4);
        assert_eq!(event.get_int(IntField::Pid, 1), pid::PI_PLUS);
        assert_eq!(event.get_int(IntField::Status, 0), -2010);
        assert_eq!(event.particles()[0].region(), DetectorRegion::FORWARD);
    }

    #[test]
    fn field_names_match_bank_schema() {
        let names = [
            FloatField::Px.name(),
            FloatField::Py.name(),
            FloatField::Pz.name(),
            IntField::Pid.name(),
            IntField::Status.name(),
        ];
        assert_eq!(names, ["px", "py", "pz", "pid", "status"]);
    }
}

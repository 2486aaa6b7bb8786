use crate::aircraft::{Aircraft, AircraftType, FaultSampler};

pub fn fleet_of(kinds: &[AircraftType]) -> Vec<Aircraft> {
    kinds
        .iter()
        .enumerate()
        .map(|(id, &kind)| Aircraft::new(id, kind))
        .collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// No flight ever faults.
pub struct NeverFault;

impl FaultSampler for NeverFault {
    fn sample_fault_time(&mut self, _kind: AircraftType, _flight_time: f64) -> Option<f64> {
        None
    }
}

/// Every flight faults at the given fraction of its duration.
pub struct AlwaysFault {
    pub at_fraction: f64,
}

impl FaultSampler for AlwaysFault {
    fn sample_fault_time(&mut self, _kind: AircraftType, flight_time: f64) -> Option<f64> {
        Some(self.at_fraction * flight_time)
    }
}

/// Faults the first sampled flight at a fixed time-into-flight, then never.
pub struct FaultOnce {
    pub at: f64,
    fired: bool,
}

impl FaultOnce {
    pub fn new(at: f64) -> FaultOnce {
        FaultOnce { at, fired: false }
    }
}

impl FaultSampler for FaultOnce {
    fn sample_fault_time(&mut self, _kind: AircraftType, flight_time: f64) -> Option<f64> {
        if self.fired {
            return None;
        }
        self.fired = true;
        assert!(self.at < flight_time, "forced fault past flight completion");
        Some(self.at)
    }
}

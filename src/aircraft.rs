use rand::Rng;

pub type AircraftId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AircraftType {
    Alpha,
    Beta,
    Charlie,
    Delta,
    Echo,
}

impl AircraftType {
    pub const ALL: [AircraftType; 5] = [
        AircraftType::Alpha,
        AircraftType::Beta,
        AircraftType::Charlie,
        AircraftType::Delta,
        AircraftType::Echo,
    ];

    pub fn spec(self) -> &'static AircraftSpec {
        &SPECS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().manufacturer
    }
}

/// Static per-type parameters. Instances never carry their own copies;
/// everything derivable (flight time, distance) is a pure function of these.
#[derive(Debug, PartialEq)]
pub struct AircraftSpec {
    pub manufacturer: &'static str,
    pub cruise_speed_mph: f64,
    pub battery_capacity_kwh: f64,
    pub charge_time_hours: f64,
    pub passenger_count: u32,
    pub fault_rate_per_hour: f64,
    pub energy_per_mile_kwh: f64,
}

static SPECS: [AircraftSpec; 5] = [
    AircraftSpec {
        manufacturer: "Alpha",
        cruise_speed_mph: 120.0,
        battery_capacity_kwh: 320.0,
        charge_time_hours: 0.6,
        passenger_count: 4,
        fault_rate_per_hour: 0.25,
        energy_per_mile_kwh: 1.6,
    },
    AircraftSpec {
        manufacturer: "Beta",
        cruise_speed_mph: 100.0,
        battery_capacity_kwh: 100.0,
        charge_time_hours: 0.2,
        passenger_count: 5,
        fault_rate_per_hour: 0.10,
        energy_per_mile_kwh: 1.5,
    },
    AircraftSpec {
        manufacturer: "Charlie",
        cruise_speed_mph: 160.0,
        battery_capacity_kwh: 220.0,
        charge_time_hours: 0.8,
        passenger_count: 3,
        fault_rate_per_hour: 0.05,
        energy_per_mile_kwh: 2.2,
    },
    AircraftSpec {
        manufacturer: "Delta",
        cruise_speed_mph: 90.0,
        battery_capacity_kwh: 120.0,
        charge_time_hours: 0.62,
        passenger_count: 2,
        fault_rate_per_hour: 0.22,
        energy_per_mile_kwh: 0.8,
    },
    AircraftSpec {
        manufacturer: "Echo",
        cruise_speed_mph: 30.0,
        battery_capacity_kwh: 150.0,
        charge_time_hours: 0.3,
        passenger_count: 2,
        fault_rate_per_hour: 0.61,
        energy_per_mile_kwh: 5.8,
    },
];

impl AircraftSpec {
    /// Hours a full battery sustains at cruise speed.
    pub fn flight_time_hours(&self) -> f64 {
        self.battery_capacity_kwh / (self.cruise_speed_mph * self.energy_per_mile_kwh)
    }

    pub fn flight_distance_miles(&self) -> f64 {
        self.flight_time_hours() * self.cruise_speed_mph
    }
}

/// Battery charge is boolean (full after charge, empty after flight), so the
/// only per-instance state worth carrying is the sticky fault bit.
#[derive(Debug, Clone)]
pub struct Aircraft {
    pub id: AircraftId,
    pub kind: AircraftType,
    pub faulted: bool,
}

impl Aircraft {
    pub fn new(id: AircraftId, kind: AircraftType) -> Aircraft {
        Aircraft {
            id,
            kind,
            faulted: false,
        }
    }
}

/// Draws the time-into-flight at which a fault occurs, if any.
///
/// The kernel owns the sampler; tests substitute deterministic ones.
pub trait FaultSampler {
    fn sample_fault_time(&mut self, kind: AircraftType, flight_time: f64) -> Option<f64>;
}

/// Production fault model: one Bernoulli draw per flight with probability
/// `min(1, fault_rate × flight_time)`; conditioned on a fault, its time is
/// uniform on `[0, flight_time)`.
pub struct BernoulliSampler<R> {
    rng: R,
}

impl<R: Rng> BernoulliSampler<R> {
    pub fn new(rng: R) -> BernoulliSampler<R> {
        BernoulliSampler { rng }
    }
}

impl<R: Rng> FaultSampler for BernoulliSampler<R> {
    fn sample_fault_time(&mut self, kind: AircraftType, flight_time: f64) -> Option<f64> {
        let p = (kind.spec().fault_rate_per_hour * flight_time).min(1.0);
        if self.rng.gen_bool(p) {
            Some(self.rng.gen_range(0.0..flight_time))
        } else {
            None
        }
    }
}

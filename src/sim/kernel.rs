use std::collections::HashMap;

use tracing::{debug, trace};

use crate::aircraft::{Aircraft, AircraftId, FaultSampler};
use crate::charger::ChargerArbiter;
use crate::sim::events::{Event, EventQueue};
use crate::stats::FleetStats;

/// Event-driven simulation of the fleet over a fixed virtual-time horizon.
///
/// The clock advances only when an event is dispatched; activity still in
/// progress at the horizon is accounted as partial in `finalize`.
pub struct Simulation<F> {
    fleet: Vec<Aircraft>,
    arbiter: ChargerArbiter,
    queue: EventQueue,
    stats: FleetStats,
    sampler: F,
    clock: f64,
    horizon: f64,
    // Start-time side tables, keyed by aircraft id; entries exist only
    // while the corresponding activity is in progress.
    flight_started: HashMap<AircraftId, f64>,
    charge_started: HashMap<AircraftId, f64>,
    wait_started: HashMap<AircraftId, f64>,
}

impl<F: FaultSampler> Simulation<F> {
    pub fn new(
        fleet: Vec<Aircraft>,
        num_chargers: usize,
        horizon_hours: f64,
        sampler: F,
    ) -> Simulation<F> {
        debug_assert!(fleet.iter().enumerate().all(|(i, a)| a.id == i), "ids must be dense 0..N");
        let mut stats = FleetStats::new();
        stats.count_fleet(&fleet);
        Simulation {
            fleet,
            arbiter: ChargerArbiter::new(num_chargers),
            queue: EventQueue::new(),
            stats,
            sampler,
            clock: 0.0,
            horizon: horizon_hours,
            flight_started: HashMap::new(),
            charge_started: HashMap::new(),
            wait_started: HashMap::new(),
        }
    }

    pub fn run(&mut self) {
        for id in 0..self.fleet.len() {
            self.schedule_flight(id);
        }

        while let Some(time) = self.queue.next_time() {
            if time >= self.horizon {
                // truncated in finalize
                break;
            }
            let (time, event) = self.queue.pop().expect("peeked event vanished");
            debug_assert!(time >= self.clock, "event time regressed");
            self.clock = time;
            self.dispatch(event);
        }

        self.finalize();
    }

    pub fn stats(&self) -> &FleetStats {
        &self.stats
    }

    pub fn arbiter(&self) -> &ChargerArbiter {
        &self.arbiter
    }

    pub fn fleet(&self) -> &[Aircraft] {
        &self.fleet
    }

    pub fn current_time(&self) -> f64 {
        self.clock
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    fn dispatch(&mut self, event: Event) {
        trace!(
            "dispatching event for aircraft {} at {:.3}h",
            event.aircraft_id(),
            self.clock
        );
        match event {
            Event::FlightComplete {
                aircraft_id,
                flight_duration,
                distance,
                faulted_in_flight,
            } => self.on_flight_complete(aircraft_id, flight_duration, distance, faulted_in_flight),
            Event::ChargingComplete {
                aircraft_id,
                charge_duration,
                waiting_time,
            } => self.on_charging_complete(aircraft_id, charge_duration, waiting_time),
            Event::FaultOccurred { aircraft_id, .. } => self.on_fault(aircraft_id),
        }
    }

    fn schedule_flight(&mut self, id: AircraftId) {
        let spec = self.fleet[id].kind.spec();
        let flight_time = spec.flight_time_hours();
        let distance = spec.flight_distance_miles();

        self.flight_started.insert(id, self.clock);

        let fault_time = self.sampler.sample_fault_time(self.fleet[id].kind, flight_time);
        if let Some(tf) = fault_time {
            debug_assert!(tf < flight_time, "fault must strike before completion");
            self.queue.schedule(
                self.clock + tf,
                Event::FaultOccurred {
                    aircraft_id: id,
                    fault_time_into_flight: tf,
                },
            );
        }

        self.queue.schedule(
            self.clock + flight_time,
            Event::FlightComplete {
                aircraft_id: id,
                flight_duration: flight_time,
                distance,
                faulted_in_flight: fault_time.is_some(),
            },
        );
        trace!(
            "aircraft {id} departed at {:.3}h ({distance:.1} miles, {flight_time:.3}h)",
            self.clock
        );
    }

    fn on_flight_complete(
        &mut self,
        id: AircraftId,
        flight_duration: f64,
        distance: f64,
        faulted_in_flight: bool,
    ) {
        let kind = self.fleet[id].kind;
        self.stats
            .record_flight(kind, flight_duration, distance, kind.spec().passenger_count);
        self.flight_started.remove(&id);

        if faulted_in_flight {
            // the fault event fired earlier and set the sticky bit
            debug_assert!(self.fleet[id].faulted, "fault flag without prior fault event");
            debug!("aircraft {id} landed grounded, no charge scheduled");
            return;
        }

        if self.arbiter.try_acquire(id).is_some() {
            self.schedule_charging(id, 0.0);
        } else {
            self.arbiter.enqueue(id);
            self.wait_started.insert(id, self.clock);
            trace!("aircraft {id} waiting for a charger at {:.3}h", self.clock);
        }
    }

    fn on_charging_complete(&mut self, id: AircraftId, charge_duration: f64, waiting_time: f64) {
        self.stats
            .record_charge_session(self.fleet[id].kind, charge_duration, waiting_time);
        self.charge_started.remove(&id);
        self.arbiter.release(id);

        if !self.fleet[id].faulted {
            self.schedule_flight(id);
        }

        // Promotion happens in the same logical step as the release, so no
        // same-instant flight completion can steal the freed slot.
        if let Some(next) = self.arbiter.dequeue() {
            if self.arbiter.try_acquire(next).is_none() {
                panic!("charger slot vanished while promoting aircraft {next}");
            }
            let started = self
                .wait_started
                .remove(&next)
                .unwrap_or_else(|| panic!("aircraft {next} was queued without a wait start"));
            let waited = self.clock - started;
            trace!("aircraft {next} promoted after waiting {waited:.3}h");
            self.schedule_charging(next, waited);
        }
    }

    fn on_fault(&mut self, id: AircraftId) {
        self.fleet[id].faulted = true;
        self.stats.record_fault(self.fleet[id].kind);
        debug!("aircraft {id} suffered an in-flight fault at {:.3}h", self.clock);
    }

    fn schedule_charging(&mut self, id: AircraftId, waiting_time: f64) {
        let charge_time = self.fleet[id].kind.spec().charge_time_hours;
        self.charge_started.insert(id, self.clock);
        self.queue.schedule(
            self.clock + charge_time,
            Event::ChargingComplete {
                aircraft_id: id,
                charge_duration: charge_time,
                waiting_time,
            },
        );
        trace!(
            "aircraft {id} charging from {:.3}h for {charge_time:.3}h",
            self.clock
        );
    }

    /// Drains events left past the horizon, crediting in-progress flights
    /// and charges with their elapsed share. Pending faults are discarded,
    /// and aircraft still queued for a charger contribute nothing.
    fn finalize(&mut self) {
        self.clock = self.horizon;

        while let Some((_, event)) = self.queue.pop() {
            match event {
                Event::FlightComplete {
                    aircraft_id,
                    flight_duration,
                    distance,
                    ..
                } => {
                    if let Some(t0) = self.flight_started.remove(&aircraft_id) {
                        let elapsed = self.horizon - t0;
                        if elapsed > 0.0 {
                            let partial_distance = distance * elapsed / flight_duration;
                            let kind = self.fleet[aircraft_id].kind;
                            self.stats.record_partial_flight(
                                kind,
                                elapsed,
                                partial_distance,
                                kind.spec().passenger_count,
                            );
                            debug!(
                                "aircraft {aircraft_id} flight truncated at horizon ({elapsed:.3}h of {flight_duration:.3}h)"
                            );
                        }
                    }
                }
                Event::ChargingComplete { aircraft_id, .. } => {
                    if let Some(t0) = self.charge_started.remove(&aircraft_id) {
                        let elapsed = self.horizon - t0;
                        if elapsed > 0.0 {
                            self.stats
                                .record_partial_charge(self.fleet[aircraft_id].kind, elapsed);
                            debug!(
                                "aircraft {aircraft_id} charge truncated at horizon ({elapsed:.3}h)"
                            );
                        }
                    }
                }
                Event::FaultOccurred { .. } => {
                    // would have struck after the horizon
                }
            }
        }
    }
}

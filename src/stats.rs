use crate::aircraft::{Aircraft, AircraftType};

/// Running per-type record. All fields are additive; the `partial_*` fields
/// describe a subset of the totals, not a disjoint category — a partial
/// activity updates both, and partial counts are included in the counts.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TypeStats {
    pub total_flight_hours: f64,
    pub total_miles: f64,
    pub total_charge_hours: f64,
    pub total_waiting_hours: f64,
    pub total_passenger_miles: f64,
    pub flight_count: u64,
    pub charge_count: u64,
    pub fault_count: u64,

    pub partial_flight_hours: f64,
    pub partial_miles: f64,
    pub partial_passenger_miles: f64,
    pub partial_flight_count: u64,
    pub partial_charge_hours: f64,
    pub partial_charge_count: u64,
}

impl TypeStats {
    pub fn avg_flight_time(&self) -> f64 {
        ratio(self.total_flight_hours, self.flight_count)
    }

    pub fn avg_distance(&self) -> f64 {
        ratio(self.total_miles, self.flight_count)
    }

    pub fn avg_charge_time(&self) -> f64 {
        ratio(self.total_charge_hours, self.charge_count)
    }

    pub fn avg_waiting_time(&self) -> f64 {
        ratio(self.total_waiting_hours, self.charge_count)
    }

    pub fn has_partials(&self) -> bool {
        self.partial_flight_count > 0 || self.partial_charge_count > 0
    }
}

fn ratio(total: f64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Fleet-wide totals across every type, for the closing report section.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub total_flight_hours: f64,
    pub total_miles: f64,
    pub total_charge_hours: f64,
    pub total_waiting_hours: f64,
    pub total_passenger_miles: f64,
    pub flight_count: u64,
    pub charge_count: u64,
    pub fault_count: u64,
    pub partial_flight_hours: f64,
    pub partial_miles: f64,
    pub partial_charge_hours: f64,
    pub partial_passenger_miles: f64,
    pub partial_flight_count: u64,
    pub partial_charge_count: u64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FleetStats {
    per_type: [TypeStats; 5],
    aircraft_counts: [u32; 5],
}

impl FleetStats {
    pub fn new() -> FleetStats {
        FleetStats::default()
    }

    pub fn count_fleet(&mut self, fleet: &[Aircraft]) {
        self.aircraft_counts = [0; 5];
        for aircraft in fleet {
            self.aircraft_counts[aircraft.kind as usize] += 1;
        }
    }

    pub fn get(&self, kind: AircraftType) -> &TypeStats {
        &self.per_type[kind as usize]
    }

    pub fn aircraft_count(&self, kind: AircraftType) -> u32 {
        self.aircraft_counts[kind as usize]
    }

    pub fn record_flight(&mut self, kind: AircraftType, hours: f64, miles: f64, passengers: u32) {
        let s = &mut self.per_type[kind as usize];
        s.total_flight_hours += hours;
        s.total_miles += miles;
        s.total_passenger_miles += passengers as f64 * miles;
        s.flight_count += 1;
    }

    pub fn record_partial_flight(
        &mut self,
        kind: AircraftType,
        hours: f64,
        miles: f64,
        passengers: u32,
    ) {
        self.record_flight(kind, hours, miles, passengers);
        let s = &mut self.per_type[kind as usize];
        s.partial_flight_hours += hours;
        s.partial_miles += miles;
        s.partial_passenger_miles += passengers as f64 * miles;
        s.partial_flight_count += 1;
    }

    pub fn record_charge_session(&mut self, kind: AircraftType, charge_hours: f64, waiting_hours: f64) {
        let s = &mut self.per_type[kind as usize];
        s.total_charge_hours += charge_hours;
        s.total_waiting_hours += waiting_hours;
        s.charge_count += 1;
    }

    /// Waiting hours are deliberately untouched: they only enter the totals
    /// when a charge completes.
    pub fn record_partial_charge(&mut self, kind: AircraftType, charge_hours: f64) {
        let s = &mut self.per_type[kind as usize];
        s.total_charge_hours += charge_hours;
        s.charge_count += 1;
        s.partial_charge_hours += charge_hours;
        s.partial_charge_count += 1;
    }

    pub fn record_fault(&mut self, kind: AircraftType) {
        self.per_type[kind as usize].fault_count += 1;
    }

    pub fn summary(&self) -> SummaryStats {
        let mut summary = SummaryStats::default();
        for s in &self.per_type {
            summary.total_flight_hours += s.total_flight_hours;
            summary.total_miles += s.total_miles;
            summary.total_charge_hours += s.total_charge_hours;
            summary.total_waiting_hours += s.total_waiting_hours;
            summary.total_passenger_miles += s.total_passenger_miles;
            summary.flight_count += s.flight_count;
            summary.charge_count += s.charge_count;
            summary.fault_count += s.fault_count;
            summary.partial_flight_hours += s.partial_flight_hours;
            summary.partial_miles += s.partial_miles;
            summary.partial_charge_hours += s.partial_charge_hours;
            summary.partial_passenger_miles += s.partial_passenger_miles;
            summary.partial_flight_count += s.partial_flight_count;
            summary.partial_charge_count += s.partial_charge_count;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::AircraftType::{Alpha, Beta};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn averages_are_zero_without_activity() {
        let stats = FleetStats::new();
        let s = stats.get(Alpha);
        assert_eq!(s.avg_flight_time(), 0.0);
        assert_eq!(s.avg_distance(), 0.0);
        assert_eq!(s.avg_charge_time(), 0.0);
        assert_eq!(s.avg_waiting_time(), 0.0);
    }

    #[test]
    fn flights_accumulate_passenger_miles() {
        let mut stats = FleetStats::new();
        stats.record_flight(Alpha, 1.5, 180.0, 4);
        stats.record_flight(Alpha, 1.5, 180.0, 4);
        let s = stats.get(Alpha);
        assert_eq!(s.flight_count, 2);
        assert!(approx(s.total_flight_hours, 3.0));
        assert!(approx(s.total_passenger_miles, 2.0 * 4.0 * 180.0));
        assert!(approx(s.avg_distance(), 180.0));
        // other buckets untouched
        assert_eq!(stats.get(Beta), &TypeStats::default());
    }

    #[test]
    fn partial_flight_feeds_both_partial_and_total() {
        let mut stats = FleetStats::new();
        stats.record_partial_flight(Beta, 0.1, 10.0, 5);
        let s = stats.get(Beta);
        assert_eq!(s.flight_count, 1);
        assert_eq!(s.partial_flight_count, 1);
        assert!(approx(s.total_flight_hours, 0.1));
        assert!(approx(s.partial_flight_hours, 0.1));
        assert!(approx(s.total_passenger_miles, 50.0));
        assert!(approx(s.partial_passenger_miles, 50.0));
    }

    #[test]
    fn partial_charge_leaves_waiting_untouched() {
        let mut stats = FleetStats::new();
        stats.record_charge_session(Alpha, 0.6, 0.4);
        stats.record_partial_charge(Alpha, 0.3);
        let s = stats.get(Alpha);
        assert_eq!(s.charge_count, 2);
        assert_eq!(s.partial_charge_count, 1);
        assert!(approx(s.total_charge_hours, 0.9));
        assert!(approx(s.partial_charge_hours, 0.3));
        assert!(approx(s.total_waiting_hours, 0.4));
    }

    #[test]
    fn summary_sums_every_type() {
        let mut stats = FleetStats::new();
        stats.record_flight(Alpha, 1.0, 100.0, 4);
        stats.record_flight(Beta, 0.5, 50.0, 5);
        stats.record_fault(Beta);
        stats.record_partial_flight(Alpha, 0.25, 30.0, 4);
        stats.record_partial_charge(Beta, 0.1);
        let summary = stats.summary();
        assert_eq!(summary.flight_count, 3);
        assert_eq!(summary.fault_count, 1);
        assert!(approx(summary.total_miles, 180.0));
        assert!(approx(summary.total_passenger_miles, 770.0));
        assert_eq!(summary.partial_flight_count, 1);
        assert_eq!(summary.partial_charge_count, 1);
        assert!(approx(summary.partial_flight_hours, 0.25));
        assert!(approx(summary.partial_miles, 30.0));
        assert!(approx(summary.partial_charge_hours, 0.1));
        assert!(approx(summary.partial_passenger_miles, 120.0));
    }
}

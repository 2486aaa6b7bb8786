use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::aircraft::AircraftType;
use crate::stats::FleetStats;

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Aircraft")]
    aircraft: u32,
    #[tabled(rename = "Avg Flight (h)")]
    avg_flight: String,
    #[tabled(rename = "Avg Distance (mi)")]
    avg_distance: String,
    #[tabled(rename = "Avg Charge (h)")]
    avg_charge: String,
    #[tabled(rename = "Avg Wait (h)")]
    avg_wait: String,
    #[tabled(rename = "Faults")]
    faults: u64,
    #[tabled(rename = "Passenger Miles")]
    passenger_miles: String,
    #[tabled(rename = "Flights")]
    flights: u64,
    #[tabled(rename = "Charges")]
    charges: u64,
}

#[derive(Tabled)]
struct PartialRow {
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Partial Flights")]
    flights: u64,
    #[tabled(rename = "Flight Hours")]
    flight_hours: String,
    #[tabled(rename = "Miles")]
    miles: String,
    #[tabled(rename = "Passenger Miles")]
    passenger_miles: String,
    #[tabled(rename = "Partial Charges")]
    charges: u64,
    #[tabled(rename = "Charge Hours")]
    charge_hours: String,
}

fn two(v: f64) -> String {
    format!("{v:.2}")
}

fn styled(mut table: Table) -> Table {
    table.with(Style::rounded());
    table.with(Alignment::left());
    table
}

pub fn render(stats: &FleetStats) -> String {
    let rows: Vec<TypeRow> = AircraftType::ALL
        .iter()
        .map(|&kind| {
            let s = stats.get(kind);
            TypeRow {
                kind: kind.name(),
                aircraft: stats.aircraft_count(kind),
                avg_flight: two(s.avg_flight_time()),
                avg_distance: two(s.avg_distance()),
                avg_charge: two(s.avg_charge_time()),
                avg_wait: two(s.avg_waiting_time()),
                faults: s.fault_count,
                passenger_miles: two(s.total_passenger_miles),
                flights: s.flight_count,
                charges: s.charge_count,
            }
        })
        .collect();

    let mut out = String::from("\n========== eVTOL Simulation Results ==========\n\n");
    out.push_str(&styled(Table::new(&rows)).to_string());
    out.push('\n');

    let partial_rows: Vec<PartialRow> = AircraftType::ALL
        .iter()
        .filter(|&&kind| stats.get(kind).has_partials())
        .map(|&kind| {
            let s = stats.get(kind);
            PartialRow {
                kind: kind.name(),
                flights: s.partial_flight_count,
                flight_hours: two(s.partial_flight_hours),
                miles: two(s.partial_miles),
                passenger_miles: two(s.partial_passenger_miles),
                charges: s.partial_charge_count,
                charge_hours: two(s.partial_charge_hours),
            }
        })
        .collect();

    if !partial_rows.is_empty() {
        out.push_str("\nPartial activities (in progress when the simulation ended):\n");
        out.push_str(&styled(Table::new(&partial_rows)).to_string());
        out.push('\n');
    }

    let summary = stats.summary();
    out.push_str(&format!(
        "\nFleet totals: {} flights ({} partial, {:.2}h / {:.2} mi), \
         {} charges ({} partial, {:.2}h), {} faults, \
         {:.2} passenger miles ({:.2} partial)\n",
        summary.flight_count,
        summary.partial_flight_count,
        summary.partial_flight_hours,
        summary.partial_miles,
        summary.charge_count,
        summary.partial_charge_count,
        summary.partial_charge_hours,
        summary.fault_count,
        summary.total_passenger_miles,
        summary.partial_passenger_miles,
    ));

    out
}

//! Typed result entities produced by response decoding.
//!
//! Everything here is a plain read-only value: constructed once by the
//! decoders in [`convert`](crate::convert) and never mutated. Fields the
//! API sometimes omits are `Option`s; an absent field is distinct from a
//! present zero value. Entities whose JSON representation contains no
//! date/time/flag encoding (`Station`, `Quota`, `Passenger`, the response
//! envelope) deserialize directly and also appear inside the raw DTOs.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Deserialize;

/// The envelope the API attaches to every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResponseMeta {
    /// How many API credits this call debited.
    pub debit: i32,
    /// The API's own response code (200 on success).
    pub response_code: i32,
}

/// A railway station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub code: String,
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

/// A booking quota (e.g. "GN" for general).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quota {
    pub code: String,
    pub name: String,
}

/// A passenger on a PNR, identified by position within the booking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Passenger {
    #[serde(rename = "no")]
    pub number: i32,
    pub current_status: String,
    pub booking_status: String,
}

/// A fare class on a train, with its booking-availability flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub code: String,
    pub name: Option<String>,
    /// Decoded from the API's "Y"/"N" `available` flag.
    pub available: bool,
}

/// A day of the week on which a train may run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub code: String,
    /// Decoded from the API's "Y"/"N" `runs` flag.
    pub runs: bool,
}

/// A train with its fare classes and running days.
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    pub number: u32,
    pub name: String,
    pub classes: Vec<Class>,
    pub days: Vec<Day>,
}

/// One seat-availability entry for a journey date.
#[derive(Debug, Clone, PartialEq)]
pub struct Available {
    pub status: String,
    pub date: Option<NaiveDate>,
}

/// One stop on a train's path.
///
/// The actual-arrival/departure fields stay `None` until the train has
/// reached the stop; the scheduled fields can also be absent at a route's
/// endpoints (a train never arrives at its origin).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub station: Station,
    pub status: String,
    pub has_arrived: bool,
    pub has_departed: bool,
    pub scheduled_arrival: Option<NaiveTime>,
    pub scheduled_departure: Option<NaiveTime>,
    pub actual_arrival: Option<NaiveTime>,
    pub actual_departure: Option<NaiveTime>,
    pub scheduled_arrival_date: Option<NaiveDate>,
    pub actual_arrival_date: Option<NaiveDate>,
    pub late_by_minutes: i32,
    /// Distance from the origin, in kilometres.
    pub distance: f64,
    /// Journey day this stop falls on (1-based).
    pub day: i32,
    pub number: Option<i32>,
    /// Halt at this stop, in minutes.
    pub halt_minutes: Option<i32>,
}

/// A train on a between-stations search, with end-to-end timings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedTrain {
    pub train: Option<Train>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub source_departure: Option<NaiveTime>,
    pub destination_arrival: Option<NaiveTime>,
    pub travel_duration: Option<Duration>,
}

/// A train arriving at a station, with scheduled/actual/delay timings.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainWithTimings {
    pub train: Option<Train>,
    pub scheduled_arrival: Option<NaiveTime>,
    pub scheduled_departure: Option<NaiveTime>,
    pub actual_arrival: Option<NaiveTime>,
    pub actual_departure: Option<NaiveTime>,
    pub delay_arrival: Option<NaiveTime>,
    pub delay_departure: Option<NaiveTime>,
}

/// A cancelled train: endpoints, service type, and start date.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSemi {
    pub train: Option<Train>,
    pub source: Option<Station>,
    pub destination: Option<Station>,
    pub kind: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// A rescheduled train with its new departure date and time.
#[derive(Debug, Clone, PartialEq)]
pub struct RescheduledTrain {
    pub train: Option<Train>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub rescheduled_date: Option<NaiveDate>,
    pub rescheduled_time: Option<NaiveTime>,
    pub time_difference: Option<Duration>,
}

/// PNR status details.
#[derive(Debug, Clone, PartialEq)]
pub struct PnrStatus {
    pub pnr: Option<u64>,
    pub chart_prepared: Option<bool>,
    pub date_of_journey: Option<NaiveDate>,
    pub boarding_point: Option<Station>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub reservation_upto: Option<Station>,
    pub total_passengers: Option<i32>,
    pub journey_class: Option<Class>,
    pub train: Option<Train>,
    pub passengers: Vec<Passenger>,
    pub meta: ResponseMeta,
}

/// Live running status of a train.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveStatus {
    pub train: Option<Train>,
    pub current_station: Option<Station>,
    pub route: Vec<RouteStop>,
    pub start_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub meta: ResponseMeta,
}

/// All stops on a train's route.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRoute {
    pub train: Option<Train>,
    pub route: Vec<RouteStop>,
    pub meta: ResponseMeta,
}

/// Seat availability for a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatAvailability {
    pub train: Option<Train>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub quota: Option<Quota>,
    pub journey_class: Option<Class>,
    pub availability: Vec<Available>,
    pub meta: ResponseMeta,
}

/// Fare for a journey, with availability.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainFare {
    pub train: Option<Train>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub quota: Option<Quota>,
    pub journey_class: Option<Class>,
    pub fare: Option<f64>,
    pub availability: Vec<Available>,
    pub meta: ResponseMeta,
}

/// Trains running between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainsBetween {
    pub trains: Vec<ExtendedTrain>,
    pub total: Option<i32>,
    pub meta: ResponseMeta,
}

/// Trains arriving at a station within a window.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrivals {
    pub trains: Vec<TrainWithTimings>,
    pub total: Option<i32>,
    pub meta: ResponseMeta,
}

/// Station lookup results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stations {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// A single-train lookup result.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainDetails {
    pub train: Option<Train>,
    pub meta: ResponseMeta,
}

/// Train suggestion results.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainList {
    pub trains: Vec<Train>,
    pub meta: ResponseMeta,
}

/// Cancelled trains on a date.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelledTrains {
    pub trains: Vec<TrainSemi>,
    pub total: Option<i32>,
    pub meta: ResponseMeta,
}

/// Rescheduled trains on a date.
#[derive(Debug, Clone, PartialEq)]
pub struct RescheduledTrains {
    pub trains: Vec<RescheduledTrain>,
    pub meta: ResponseMeta,
}

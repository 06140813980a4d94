//! Raw response DTOs.
//!
//! These map one-to-one onto the JSON the API sends. Every date, time,
//! duration and Y/N field is kept as a plain `String` here (absent keys
//! default to the empty string), so that generic JSON decoding never fails
//! on the server's ad-hoc textual formats; the decoders in
//! [`convert`](crate::convert) normalize them afterwards. Fields with no
//! textual encoding deserialize straight into their model types.

use serde::Deserialize;

use crate::model::{Passenger, Quota, ResponseMeta, Station};

/// A train as sent by the API. The number arrives as a JSON string.
///
/// `number` defaults to the empty string so that entities which flatten
/// train fields inline (arrivals boards) still decode when the train part
/// is absent; the decoder treats an empty number as "no train".
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrain {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub classes: Vec<RawClass>,
    #[serde(default)]
    pub days: Vec<RawDay>,
}

/// A fare class with its "Y"/"N" availability flag.
#[derive(Debug, Clone, Deserialize)]
pub struct RawClass {
    pub code: String,
    pub name: Option<String>,
    #[serde(default)]
    pub available: String,
}

/// A running day with its "Y"/"N" flag.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDay {
    pub code: String,
    #[serde(default)]
    pub runs: String,
}

/// One seat-availability entry; the date uses the numeric layout.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAvailable {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: String,
}

/// One stop on a route. The four clock times are empty strings until the
/// train has produced them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRouteStop {
    pub station: Station,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub has_arrived: bool,
    #[serde(default)]
    pub has_departed: bool,
    #[serde(default)]
    pub scharr: String,
    #[serde(default)]
    pub schdep: String,
    #[serde(default)]
    pub actarr: String,
    #[serde(default)]
    pub actdep: String,
    #[serde(default)]
    pub scharr_date: String,
    #[serde(default)]
    pub actarr_date: String,
    #[serde(default)]
    pub latemin: i32,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub day: i32,
    pub no: Option<i32>,
    pub halt: Option<i32>,
}

/// A between-stations search result: train fields inline, plus endpoint
/// stations and end-to-end timings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawExtendedTrain {
    #[serde(flatten)]
    pub train: RawTrain,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    #[serde(default)]
    pub src_departure_time: String,
    #[serde(default)]
    pub dest_arrival_time: String,
    #[serde(default)]
    pub travel_time: String,
}

/// An arrivals-board entry: train fields inline plus six clock times.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrainWithTimings {
    #[serde(flatten)]
    pub train: RawTrain,
    #[serde(default)]
    pub scharr: String,
    #[serde(default)]
    pub schdep: String,
    #[serde(default)]
    pub actarr: String,
    #[serde(default)]
    pub actdep: String,
    #[serde(default)]
    pub delayarr: String,
    #[serde(default)]
    pub delaydep: String,
}

/// A cancelled-trains entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrainSemi {
    #[serde(flatten)]
    pub train: RawTrain,
    pub source: Option<Station>,
    pub dest: Option<Station>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub start_time: String,
}

/// A rescheduled-trains entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRescheduledTrain {
    #[serde(flatten)]
    pub train: RawTrain,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    #[serde(default)]
    pub time_diff: String,
    #[serde(default)]
    pub rescheduled_date: String,
    #[serde(default)]
    pub rescheduled_time: String,
}

/// Response of `/v2/pnr-status`. The PNR itself arrives as a string.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPnrStatus {
    pub pnr: Option<String>,
    pub chart_prepared: Option<bool>,
    #[serde(default)]
    pub doj: String,
    pub boarding_point: Option<Station>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub reservation_upto: Option<Station>,
    pub total_passengers: Option<i32>,
    pub journey_class: Option<RawClass>,
    pub train: Option<RawTrain>,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/live`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLiveStatus {
    pub train: Option<RawTrain>,
    pub current_station: Option<Station>,
    #[serde(default)]
    pub route: Vec<RawRouteStop>,
    #[serde(default)]
    pub start_date: String,
    pub position: Option<String>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/route`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrainRoute {
    pub train: Option<RawTrain>,
    #[serde(default)]
    pub route: Vec<RawRouteStop>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/check-seat`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSeatAvailability {
    pub train: Option<RawTrain>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub quota: Option<Quota>,
    pub journey_class: Option<RawClass>,
    #[serde(default)]
    pub availability: Vec<RawAvailable>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/fare`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrainFare {
    pub train: Option<RawTrain>,
    pub from_station: Option<Station>,
    pub to_station: Option<Station>,
    pub quota: Option<Quota>,
    pub journey_class: Option<RawClass>,
    pub fare: Option<f64>,
    #[serde(default)]
    pub availability: Vec<RawAvailable>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/between`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrainsBetween {
    #[serde(default)]
    pub trains: Vec<RawExtendedTrain>,
    pub total: Option<i32>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/arrivals`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArrivals {
    #[serde(default)]
    pub trains: Vec<RawTrainWithTimings>,
    pub total: Option<i32>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/name-number`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrainDetails {
    pub train: Option<RawTrain>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/suggest-train`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrainList {
    #[serde(default)]
    pub trains: Vec<RawTrain>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/cancelled`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCancelledTrains {
    #[serde(default)]
    pub trains: Vec<RawTrainSemi>,
    pub total: Option<i32>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

/// Response of `/v2/rescheduled`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRescheduledTrains {
    #[serde(default)]
    pub trains: Vec<RawRescheduledTrain>,
    #[serde(flatten)]
    pub meta: ResponseMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_route_stop() {
        let json = r#"{
            "station": {"code": "BE", "name": "BAREILLY", "lat": 28.3640709, "lng": 79.41931980000001},
            "status": "arrived",
            "has_arrived": true,
            "has_departed": true,
            "scharr": "Source",
            "schdep": "23:10",
            "actarr": "",
            "actdep": "23:10",
            "scharr_date": "5 Apr 2018",
            "actarr_date": "5 Apr 2018",
            "latemin": 0,
            "distance": 0,
            "day": 1
        }"#;

        let stop: RawRouteStop = serde_json::from_str(json).unwrap();

        assert_eq!(stop.station.code, "BE");
        assert_eq!(stop.scharr, "Source");
        assert_eq!(stop.schdep, "23:10");
        assert_eq!(stop.actarr, "");
        assert_eq!(stop.scharr_date, "5 Apr 2018");
        assert!(stop.has_arrived);
        assert_eq!(stop.no, None);
        assert_eq!(stop.halt, None);
    }

    #[test]
    fn deserialize_train_with_string_number() {
        let json = r#"{
            "number": "14311",
            "name": "ALA HAZRAT EXP",
            "classes": [
                {"code": "SL", "name": "SLEEPER CLASS", "available": "Y"},
                {"code": "1A", "name": "FIRST AC", "available": "N"}
            ],
            "days": [
                {"code": "MON", "runs": "Y"},
                {"code": "TUE", "runs": "N"}
            ]
        }"#;

        let train: RawTrain = serde_json::from_str(json).unwrap();

        assert_eq!(train.number, "14311");
        assert_eq!(train.classes.len(), 2);
        assert_eq!(train.classes[0].available, "Y");
        assert_eq!(train.days[1].runs, "N");
    }

    #[test]
    fn deserialize_train_defaults() {
        // classes/days are frequently omitted outside lookup endpoints
        let json = r#"{"number": "12138", "name": "PUNJAB MAIL"}"#;
        let train: RawTrain = serde_json::from_str(json).unwrap();

        assert!(train.classes.is_empty());
        assert!(train.days.is_empty());
    }

    #[test]
    fn deserialize_pnr_status() {
        let json = r#"{
            "pnr": "2124289856",
            "chart_prepared": true,
            "doj": "05-04-2018",
            "total_passengers": 1,
            "passengers": [{"no": 1, "current_status": "CNF", "booking_status": "CNF"}],
            "debit": 1,
            "response_code": 200
        }"#;

        let raw: RawPnrStatus = serde_json::from_str(json).unwrap();

        assert_eq!(raw.pnr.as_deref(), Some("2124289856"));
        assert_eq!(raw.doj, "05-04-2018");
        assert_eq!(raw.passengers.len(), 1);
        assert_eq!(raw.meta.response_code, 200);
    }

    #[test]
    fn deserialize_arrivals_entry_without_train_fields() {
        let json = r#"{"scharr": "11:40", "schdep": "11:42", "actarr": "", "actdep": "",
                       "delayarr": "00:00", "delaydep": "00:00"}"#;
        let raw: RawTrainWithTimings = serde_json::from_str(json).unwrap();

        assert_eq!(raw.train.number, "");
        assert_eq!(raw.scharr, "11:40");
    }

    #[test]
    fn deserialize_extended_train_flattens_train_fields() {
        let json = r#"{
            "number": "19269",
            "name": "PBR MOTIHARI EX",
            "src_departure_time": "07:15",
            "dest_arrival_time": "08:24",
            "travel_time": "25:09",
            "from_station": {"code": "PBR", "name": "PORBANDAR", "lat": 0, "lng": 0},
            "to_station": {"code": "ADI", "name": "AHMEDABAD JN", "lat": 0, "lng": 0}
        }"#;

        let raw: RawExtendedTrain = serde_json::from_str(json).unwrap();

        assert_eq!(raw.train.number, "19269");
        assert_eq!(raw.travel_time, "25:09");
        assert_eq!(raw.from_station.as_ref().unwrap().code, "PBR");
    }
}

//! Request types for each API endpoint.
//!
//! Every request knows how to render itself into the path of the v2 API,
//! excluding the API-key suffix which the client appends at dispatch time.
//! Validation happens before rendering: all missing parameters are
//! collected into a single [`RailError::Validation`] so the caller sees
//! the full list at once rather than fixing them one by one.

use chrono::NaiveDate;

use crate::error::RailError;

/// Renders a journey date the way the API expects it in path segments.
fn date_segment(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

fn require(missing: &mut Vec<&'static str>, name: &'static str, value: &str) {
    if value.is_empty() {
        missing.push(name);
    }
}

fn validated(missing: Vec<&'static str>) -> Result<(), RailError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RailError::Validation { missing })
    }
}

/// Look up the booking status of a PNR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnrStatusRequest {
    pub pnr: u64,
}

impl PnrStatusRequest {
    pub fn path(&self) -> Result<String, RailError> {
        Ok(format!("/v2/pnr-status/pnr/{}", self.pnr))
    }
}

/// Track a running train on a given journey date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveStatusRequest {
    pub train_number: u32,
    pub date: NaiveDate,
}

impl LiveStatusRequest {
    pub fn path(&self) -> Result<String, RailError> {
        Ok(format!(
            "/v2/live/train/{}/date/{}",
            self.train_number,
            date_segment(self.date)
        ))
    }
}

/// Fetch the full scheduled route of a train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRouteRequest {
    pub train_number: u32,
}

impl TrainRouteRequest {
    pub fn path(&self) -> Result<String, RailError> {
        Ok(format!("/v2/route/train/{}", self.train_number))
    }
}

/// Check seat availability for a class and quota between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSeatRequest {
    pub train_number: u32,
    pub from_station: String,
    pub to_station: String,
    pub date: NaiveDate,
    pub class: String,
    pub quota: String,
}

impl CheckSeatRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "from_station", &self.from_station);
        require(&mut missing, "to_station", &self.to_station);
        require(&mut missing, "class", &self.class);
        require(&mut missing, "quota", &self.quota);
        validated(missing)?;

        Ok(format!(
            "/v2/check-seat/train/{}/source/{}/dest/{}/date/{}/pref/{}/quota/{}",
            self.train_number,
            self.from_station,
            self.to_station,
            date_segment(self.date),
            self.class,
            self.quota
        ))
    }
}

/// Compute the fare for a passenger of a given age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainFareRequest {
    pub train_number: u32,
    pub from_station: String,
    pub to_station: String,
    pub age: u8,
    pub class: String,
    pub quota: String,
    pub date: NaiveDate,
}

impl TrainFareRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "from_station", &self.from_station);
        require(&mut missing, "to_station", &self.to_station);
        require(&mut missing, "class", &self.class);
        require(&mut missing, "quota", &self.quota);
        validated(missing)?;

        Ok(format!(
            "/v2/fare/train/{}/source/{}/dest/{}/age/{}/pref/{}/quota/{}/date/{}",
            self.train_number,
            self.from_station,
            self.to_station,
            self.age,
            self.class,
            self.quota,
            date_segment(self.date)
        ))
    }
}

/// List trains running between two stations on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainsBetweenRequest {
    pub from_station: String,
    pub to_station: String,
    pub date: NaiveDate,
}

impl TrainsBetweenRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "from_station", &self.from_station);
        require(&mut missing, "to_station", &self.to_station);
        validated(missing)?;

        Ok(format!(
            "/v2/between/source/{}/dest/{}/date/{}",
            self.from_station,
            self.to_station,
            date_segment(self.date)
        ))
    }
}

/// How far back an arrivals board looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHours {
    Two,
    Four,
}

impl WindowHours {
    fn as_u8(self) -> u8 {
        match self {
            WindowHours::Two => 2,
            WindowHours::Four => 4,
        }
    }
}

/// Fetch the arrivals board for a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalsRequest {
    pub station_code: String,
    pub window: WindowHours,
}

impl ArrivalsRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "station_code", &self.station_code);
        validated(missing)?;

        Ok(format!(
            "/v2/arrivals/station/{}/hours/{}",
            self.station_code,
            self.window.as_u8()
        ))
    }
}

/// Resolve a station name to its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationNameToCodeRequest {
    pub station_name: String,
}

impl StationNameToCodeRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "station_name", &self.station_name);
        validated(missing)?;

        Ok(format!("/v2/name-to-code/station/{}", self.station_name))
    }
}

/// Resolve a station code to its full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCodeToNameRequest {
    pub station_code: String,
}

impl StationCodeToNameRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "station_code", &self.station_code);
        validated(missing)?;

        Ok(format!("/v2/code-to-name/code/{}", self.station_code))
    }
}

/// Autocomplete station names from a partial string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestStationRequest {
    pub station_name: String,
}

impl SuggestStationRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "station_name", &self.station_name);
        validated(missing)?;

        Ok(format!("/v2/suggest-station/name/{}", self.station_name))
    }
}

/// Look up a train by its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainByNumberRequest {
    pub train_number: u32,
}

impl TrainByNumberRequest {
    pub fn path(&self) -> Result<String, RailError> {
        Ok(format!("/v2/name-number/train/{}", self.train_number))
    }
}

/// Look up a train by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainByNameRequest {
    pub train_name: String,
}

impl TrainByNameRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "train_name", &self.train_name);
        validated(missing)?;

        Ok(format!("/v2/name-number/train/{}", self.train_name))
    }
}

/// List trains cancelled on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelledTrainsRequest {
    pub date: NaiveDate,
}

impl CancelledTrainsRequest {
    pub fn path(&self) -> Result<String, RailError> {
        Ok(format!("/v2/cancelled/date/{}", date_segment(self.date)))
    }
}

/// List trains rescheduled on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduledTrainsRequest {
    pub date: NaiveDate,
}

impl RescheduledTrainsRequest {
    pub fn path(&self) -> Result<String, RailError> {
        Ok(format!("/v2/rescheduled/date/{}", date_segment(self.date)))
    }
}

/// Autocomplete train names from a partial string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestTrainRequest {
    pub train_name: String,
}

impl SuggestTrainRequest {
    pub fn path(&self) -> Result<String, RailError> {
        let mut missing = Vec::new();
        require(&mut missing, "train_name", &self.train_name);
        validated(missing)?;

        Ok(format!("/v2/suggest-train/train/{}", self.train_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journey_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 4, 5).unwrap()
    }

    #[test]
    fn pnr_status_path() {
        let req = PnrStatusRequest { pnr: 2124289856 };
        assert_eq!(req.path().unwrap(), "/v2/pnr-status/pnr/2124289856");
    }

    #[test]
    fn live_status_path_pads_the_date() {
        let req = LiveStatusRequest {
            train_number: 12138,
            date: journey_date(),
        };
        assert_eq!(req.path().unwrap(), "/v2/live/train/12138/date/05-04-2018");
    }

    #[test]
    fn train_route_path() {
        let req = TrainRouteRequest {
            train_number: 14311,
        };
        assert_eq!(req.path().unwrap(), "/v2/route/train/14311");
    }

    #[test]
    fn check_seat_path() {
        let req = CheckSeatRequest {
            train_number: 14311,
            from_station: "BE".into(),
            to_station: "ADI".into(),
            date: journey_date(),
            class: "SL".into(),
            quota: "GN".into(),
        };
        assert_eq!(
            req.path().unwrap(),
            "/v2/check-seat/train/14311/source/BE/dest/ADI/date/05-04-2018/pref/SL/quota/GN"
        );
    }

    #[test]
    fn check_seat_reports_all_missing_fields() {
        let req = CheckSeatRequest {
            train_number: 14311,
            from_station: String::new(),
            to_station: "ADI".into(),
            date: journey_date(),
            class: String::new(),
            quota: "GN".into(),
        };
        match req.path() {
            Err(RailError::Validation { missing }) => {
                assert_eq!(missing, vec!["from_station", "class"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn train_fare_path() {
        let req = TrainFareRequest {
            train_number: 14311,
            from_station: "BE".into(),
            to_station: "ADI".into(),
            age: 18,
            class: "SL".into(),
            quota: "GN".into(),
            date: journey_date(),
        };
        assert_eq!(
            req.path().unwrap(),
            "/v2/fare/train/14311/source/BE/dest/ADI/age/18/pref/SL/quota/GN/date/05-04-2018"
        );
    }

    #[test]
    fn trains_between_path() {
        let req = TrainsBetweenRequest {
            from_station: "BE".into(),
            to_station: "ADI".into(),
            date: journey_date(),
        };
        assert_eq!(
            req.path().unwrap(),
            "/v2/between/source/BE/dest/ADI/date/05-04-2018"
        );
    }

    #[test]
    fn arrivals_path_renders_window() {
        let req = ArrivalsRequest {
            station_code: "BE".into(),
            window: WindowHours::Four,
        };
        assert_eq!(req.path().unwrap(), "/v2/arrivals/station/BE/hours/4");
    }

    #[test]
    fn station_lookup_paths() {
        let by_name = StationNameToCodeRequest {
            station_name: "bareilly".into(),
        };
        assert_eq!(
            by_name.path().unwrap(),
            "/v2/name-to-code/station/bareilly"
        );

        let by_code = StationCodeToNameRequest {
            station_code: "BE".into(),
        };
        assert_eq!(by_code.path().unwrap(), "/v2/code-to-name/code/BE");

        let suggest = SuggestStationRequest {
            station_name: "bare".into(),
        };
        assert_eq!(suggest.path().unwrap(), "/v2/suggest-station/name/bare");
    }

    #[test]
    fn train_lookup_paths() {
        let by_number = TrainByNumberRequest {
            train_number: 12313,
        };
        assert_eq!(by_number.path().unwrap(), "/v2/name-number/train/12313");

        let by_name = TrainByNameRequest {
            train_name: "rajdhani".into(),
        };
        assert_eq!(by_name.path().unwrap(), "/v2/name-number/train/rajdhani");

        let suggest = SuggestTrainRequest {
            train_name: "raj".into(),
        };
        assert_eq!(suggest.path().unwrap(), "/v2/suggest-train/train/raj");
    }

    #[test]
    fn cancelled_and_rescheduled_paths() {
        let cancelled = CancelledTrainsRequest {
            date: journey_date(),
        };
        assert_eq!(cancelled.path().unwrap(), "/v2/cancelled/date/05-04-2018");

        let rescheduled = RescheduledTrainsRequest {
            date: journey_date(),
        };
        assert_eq!(
            rescheduled.path().unwrap(),
            "/v2/rescheduled/date/05-04-2018"
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let req = SuggestTrainRequest {
            train_name: String::new(),
        };
        assert!(matches!(
            req.path(),
            Err(RailError::Validation { missing }) if missing == vec!["train_name"]
        ));
    }
}

//! Decoders from raw DTOs to typed model values.
//!
//! Each decoder takes one raw DTO from [`types`](crate::types), runs the
//! normalizers from [`norm`](crate::norm) over the fields named in the
//! endpoint's format table, and builds the immutable model value. Absent
//! source text leaves the destination `None`; a present value that fails
//! its format aborts the whole decode with a [`FormatError`] naming the
//! field, so callers never see a partially converted response.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::FormatError;
use crate::model::{
    Arrivals, Available, CancelledTrains, Class, Day, ExtendedTrain, LiveStatus, PnrStatus,
    RescheduledTrain, RescheduledTrains, RouteStop, SeatAvailability, Train, TrainDetails,
    TrainFare, TrainList, TrainRoute, TrainSemi, TrainWithTimings, TrainsBetween,
};
use crate::norm::{self, DateLayout};
use crate::types::{
    RawArrivals, RawAvailable, RawCancelledTrains, RawClass, RawDay, RawExtendedTrain,
    RawLiveStatus, RawPnrStatus, RawRescheduledTrain, RawRescheduledTrains, RawRouteStop,
    RawSeatAvailability, RawTrain, RawTrainDetails, RawTrainFare, RawTrainList, RawTrainRoute,
    RawTrainSemi, RawTrainWithTimings, RawTrainsBetween,
};

fn clock(field: &'static str, s: &str) -> Result<Option<NaiveTime>, FormatError> {
    norm::clock_time(s).map_err(|_| FormatError::new(field, s))
}

fn date(
    field: &'static str,
    s: &str,
    layout: DateLayout,
) -> Result<Option<NaiveDate>, FormatError> {
    norm::calendar_date(s, layout).map_err(|_| FormatError::new(field, s))
}

fn duration(field: &'static str, s: &str) -> Result<Option<Duration>, FormatError> {
    norm::travel_duration(s).map_err(|_| FormatError::new(field, s))
}

pub fn convert_class(raw: RawClass) -> Class {
    Class {
        code: raw.code,
        name: raw.name,
        available: norm::yes_no(&raw.available),
    }
}

pub fn convert_day(raw: RawDay) -> Day {
    Day {
        code: raw.code,
        runs: norm::yes_no(&raw.runs),
    }
}

pub fn convert_train(raw: RawTrain) -> Result<Train, FormatError> {
    let number = raw
        .number
        .parse::<u32>()
        .map_err(|_| FormatError::new("Number", &raw.number))?;

    Ok(Train {
        number,
        name: raw.name,
        classes: raw.classes.into_iter().map(convert_class).collect(),
        days: raw.days.into_iter().map(convert_day).collect(),
    })
}

/// Convert train fields flattened inline into a larger entity, where the
/// train part may be wholly absent.
fn convert_inline_train(raw: RawTrain) -> Result<Option<Train>, FormatError> {
    if raw.number.is_empty() && raw.name.is_empty() {
        return Ok(None);
    }
    convert_train(raw).map(Some)
}

pub fn convert_available(raw: RawAvailable) -> Result<Available, FormatError> {
    Ok(Available {
        status: raw.status,
        date: date("Date", &raw.date, DateLayout::Numeric)?,
    })
}

pub fn convert_route_stop(raw: RawRouteStop) -> Result<RouteStop, FormatError> {
    Ok(RouteStop {
        scheduled_arrival: clock("ScheduledArrival", &raw.scharr)?,
        scheduled_departure: clock("ScheduledDeparture", &raw.schdep)?,
        actual_arrival: clock("ActualArrival", &raw.actarr)?,
        actual_departure: clock("ActualDeparture", &raw.actdep)?,
        scheduled_arrival_date: date(
            "ScheduledArrivalDate",
            &raw.scharr_date,
            DateLayout::AbbrevMonth,
        )?,
        actual_arrival_date: date("ActualArrivalDate", &raw.actarr_date, DateLayout::AbbrevMonth)?,
        station: raw.station,
        status: raw.status,
        has_arrived: raw.has_arrived,
        has_departed: raw.has_departed,
        late_by_minutes: raw.latemin,
        distance: raw.distance,
        day: raw.day,
        number: raw.no,
        halt_minutes: raw.halt,
    })
}

pub fn convert_extended_train(raw: RawExtendedTrain) -> Result<ExtendedTrain, FormatError> {
    Ok(ExtendedTrain {
        train: convert_inline_train(raw.train)?,
        from_station: raw.from_station,
        to_station: raw.to_station,
        source_departure: clock("SourceDeparture", &raw.src_departure_time)?,
        destination_arrival: clock("DestinationArrival", &raw.dest_arrival_time)?,
        travel_duration: duration("TravelDuration", &raw.travel_time)?,
    })
}

pub fn convert_train_with_timings(
    raw: RawTrainWithTimings,
) -> Result<TrainWithTimings, FormatError> {
    Ok(TrainWithTimings {
        train: convert_inline_train(raw.train)?,
        scheduled_arrival: clock("ScheduledArrival", &raw.scharr)?,
        scheduled_departure: clock("ScheduledDeparture", &raw.schdep)?,
        actual_arrival: clock("ActualArrival", &raw.actarr)?,
        actual_departure: clock("ActualDeparture", &raw.actdep)?,
        delay_arrival: clock("DelayArrival", &raw.delayarr)?,
        delay_departure: clock("DelayDeparture", &raw.delaydep)?,
    })
}

pub fn convert_train_semi(raw: RawTrainSemi) -> Result<TrainSemi, FormatError> {
    Ok(TrainSemi {
        train: convert_inline_train(raw.train)?,
        source: raw.source,
        destination: raw.dest,
        kind: raw.kind,
        start_date: date("StartDate", &raw.start_time, DateLayout::AbbrevMonth)?,
    })
}

pub fn convert_rescheduled_train(
    raw: RawRescheduledTrain,
) -> Result<RescheduledTrain, FormatError> {
    Ok(RescheduledTrain {
        train: convert_inline_train(raw.train)?,
        from_station: raw.from_station,
        to_station: raw.to_station,
        rescheduled_date: date("RescheduledDate", &raw.rescheduled_date, DateLayout::Numeric)?,
        rescheduled_time: clock("RescheduledTime", &raw.rescheduled_time)?,
        time_difference: duration("TimeDifference", &raw.time_diff)?,
    })
}

pub fn convert_pnr_status(raw: RawPnrStatus) -> Result<PnrStatus, FormatError> {
    let pnr = raw
        .pnr
        .map(|p| p.parse::<u64>().map_err(|_| FormatError::new("Pnr", &p)))
        .transpose()?;

    Ok(PnrStatus {
        pnr,
        chart_prepared: raw.chart_prepared,
        date_of_journey: date("DateOfJourney", &raw.doj, DateLayout::Numeric)?,
        boarding_point: raw.boarding_point,
        from_station: raw.from_station,
        to_station: raw.to_station,
        reservation_upto: raw.reservation_upto,
        total_passengers: raw.total_passengers,
        journey_class: raw.journey_class.map(convert_class),
        train: raw.train.map(convert_train).transpose()?,
        passengers: raw.passengers,
        meta: raw.meta,
    })
}

pub fn convert_live_status(raw: RawLiveStatus) -> Result<LiveStatus, FormatError> {
    Ok(LiveStatus {
        train: raw.train.map(convert_train).transpose()?,
        current_station: raw.current_station,
        route: raw
            .route
            .into_iter()
            .map(convert_route_stop)
            .collect::<Result<_, _>>()?,
        start_date: date("StartDate", &raw.start_date, DateLayout::AbbrevMonth)?,
        position: raw.position,
        meta: raw.meta,
    })
}

pub fn convert_train_route(raw: RawTrainRoute) -> Result<TrainRoute, FormatError> {
    Ok(TrainRoute {
        train: raw.train.map(convert_train).transpose()?,
        route: raw
            .route
            .into_iter()
            .map(convert_route_stop)
            .collect::<Result<_, _>>()?,
        meta: raw.meta,
    })
}

pub fn convert_seat_availability(
    raw: RawSeatAvailability,
) -> Result<SeatAvailability, FormatError> {
    Ok(SeatAvailability {
        train: raw.train.map(convert_train).transpose()?,
        from_station: raw.from_station,
        to_station: raw.to_station,
        quota: raw.quota,
        journey_class: raw.journey_class.map(convert_class),
        availability: raw
            .availability
            .into_iter()
            .map(convert_available)
            .collect::<Result<_, _>>()?,
        meta: raw.meta,
    })
}

pub fn convert_train_fare(raw: RawTrainFare) -> Result<TrainFare, FormatError> {
    Ok(TrainFare {
        train: raw.train.map(convert_train).transpose()?,
        from_station: raw.from_station,
        to_station: raw.to_station,
        quota: raw.quota,
        journey_class: raw.journey_class.map(convert_class),
        fare: raw.fare,
        availability: raw
            .availability
            .into_iter()
            .map(convert_available)
            .collect::<Result<_, _>>()?,
        meta: raw.meta,
    })
}

pub fn convert_trains_between(raw: RawTrainsBetween) -> Result<TrainsBetween, FormatError> {
    Ok(TrainsBetween {
        trains: raw
            .trains
            .into_iter()
            .map(convert_extended_train)
            .collect::<Result<_, _>>()?,
        total: raw.total,
        meta: raw.meta,
    })
}

pub fn convert_arrivals(raw: RawArrivals) -> Result<Arrivals, FormatError> {
    Ok(Arrivals {
        trains: raw
            .trains
            .into_iter()
            .map(convert_train_with_timings)
            .collect::<Result<_, _>>()?,
        total: raw.total,
        meta: raw.meta,
    })
}

pub fn convert_train_details(raw: RawTrainDetails) -> Result<TrainDetails, FormatError> {
    Ok(TrainDetails {
        train: raw.train.map(convert_train).transpose()?,
        meta: raw.meta,
    })
}

pub fn convert_train_list(raw: RawTrainList) -> Result<TrainList, FormatError> {
    Ok(TrainList {
        trains: raw
            .trains
            .into_iter()
            .map(convert_train)
            .collect::<Result<_, _>>()?,
        meta: raw.meta,
    })
}

pub fn convert_cancelled_trains(raw: RawCancelledTrains) -> Result<CancelledTrains, FormatError> {
    Ok(CancelledTrains {
        trains: raw
            .trains
            .into_iter()
            .map(convert_train_semi)
            .collect::<Result<_, _>>()?,
        total: raw.total,
        meta: raw.meta,
    })
}

pub fn convert_rescheduled_trains(
    raw: RawRescheduledTrains,
) -> Result<RescheduledTrains, FormatError> {
    Ok(RescheduledTrains {
        trains: raw
            .trains
            .into_iter()
            .map(convert_rescheduled_train)
            .collect::<Result<_, _>>()?,
        meta: raw.meta,
    })
}

//! HTML rendering of matched schedule records.

use askama::Template;

use crate::domain::{RouteDetail, RouteRecord, TransportMode};

/// One matched service, ready for display.
#[derive(Debug, Clone)]
pub struct ScheduleCard<'a> {
    pub name: &'a str,
    pub number: &'a str,
    pub departure: &'a str,
    pub arrival: &'a str,
    /// Duration for trains, departure time for buses.
    pub detail: &'a str,
}

impl<'a> ScheduleCard<'a> {
    /// Create from a domain record.
    pub fn from_record(record: &'a RouteRecord) -> Self {
        let detail = match &record.detail {
            RouteDetail::Train { duration } => duration.as_str(),
            RouteDetail::Bus { time } => time.as_str(),
        };

        Self {
            name: &record.name,
            number: &record.number,
            departure: record.route.departure(),
            arrival: record.route.arrival(),
            detail,
        }
    }
}

/// Train results fragment.
#[derive(Template)]
#[template(path = "train_report.html")]
pub struct TrainReportTemplate<'a> {
    pub cards: Vec<ScheduleCard<'a>>,
}

/// Bus results fragment.
#[derive(Template)]
#[template(path = "bus_report.html")]
pub struct BusReportTemplate<'a> {
    pub cards: Vec<ScheduleCard<'a>>,
}

/// Render matched records as an HTML report.
///
/// Returns `Ok(None)` for an empty slice so the caller can fall through to
/// the next handling path.
pub fn format_report(
    mode: TransportMode,
    records: &[&RouteRecord],
) -> Result<Option<String>, askama::Error> {
    if records.is_empty() {
        return Ok(None);
    }

    let cards: Vec<ScheduleCard<'_>> = records
        .iter()
        .map(|record| ScheduleCard::from_record(record))
        .collect();

    let html = match mode {
        TransportMode::Train => TrainReportTemplate { cards }.render()?,
        TransportMode::Bus => BusReportTemplate { cards }.render()?,
    };

    Ok(Some(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;

    fn rajdhani() -> RouteRecord {
        RouteRecord::train(
            "Rajdhani",
            "101",
            Route::parse("Delhi to Mumbai").unwrap(),
            "16h",
        )
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(format_report(TransportMode::Train, &[]).unwrap().is_none());
        assert!(format_report(TransportMode::Bus, &[]).unwrap().is_none());
    }

    #[test]
    fn train_report_contains_fields() {
        let record = rajdhani();
        let html = format_report(TransportMode::Train, &[&record])
            .unwrap()
            .unwrap();

        for needle in ["Trains Found", "Rajdhani", "101", "Delhi", "Mumbai", "16h"] {
            assert!(html.contains(needle), "missing {needle:?} in {html}");
        }
        assert!(html.contains("Train schedules may change"));
    }

    #[test]
    fn bus_report_contains_fields() {
        let record = RouteRecord::bus(
            "Volvo Sleeper",
            "MH-12",
            Route::parse("Pune to Goa").unwrap(),
            "09:00 PM",
        );
        let html = format_report(TransportMode::Bus, &[&record])
            .unwrap()
            .unwrap();

        for needle in ["Buses Found", "Volvo Sleeper", "MH-12", "Pune", "Goa", "09:00 PM"] {
            assert!(html.contains(needle), "missing {needle:?} in {html}");
        }
        assert!(html.contains("Bus schedules may change"));
    }

    #[test]
    fn one_card_per_record() {
        let first = rajdhani();
        let second = RouteRecord::train(
            "Duronto",
            "202",
            Route::parse("Mumbai to Delhi").unwrap(),
            "15h",
        );
        let html = format_report(TransportMode::Train, &[&first, &second])
            .unwrap()
            .unwrap();

        assert_eq!(html.matches("result-card train").count(), 2);
        assert!(html.find("Rajdhani") < html.find("Duronto"));
    }

    #[test]
    fn values_are_escaped() {
        let record = RouteRecord::train(
            "<script>alert(1)</script>",
            "1",
            Route::parse("Delhi to Agra").unwrap(),
            "3h",
        );
        let html = format_report(TransportMode::Train, &[&record])
            .unwrap()
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

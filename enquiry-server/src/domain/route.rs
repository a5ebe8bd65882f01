//! Route and schedule record types.

use std::fmt;

use super::normalize;

/// Separator between the two endpoints of a route string.
pub const ROUTE_SEPARATOR: &str = " to ";

/// Placeholder shown for optional record fields that are absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Error returned when a route string cannot be split into two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route {route:?}: {reason}")]
pub struct InvalidRoute {
    route: String,
    reason: &'static str,
}

/// A validated "X to Y" route.
///
/// Splitting the raw string on `" to "` must give exactly two parts, and
/// neither part may normalize to the empty string. The normalized endpoints
/// are computed once here so matching never re-normalizes them.
///
/// # Examples
///
/// ```
/// use enquiry_server::domain::Route;
///
/// let route = Route::parse("New Delhi to Mumbai").unwrap();
/// assert_eq!(route.departure(), "New Delhi");
/// assert_eq!(route.arrival(), "Mumbai");
///
/// assert!(Route::parse("Delhi").is_err());
/// assert!(Route::parse("Agra to Delhi to Mumbai").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    raw: String,
    departure: String,
    arrival: String,
    departure_key: String,
    arrival_key: String,
}

impl Route {
    /// Parse a route string of the form `"<departure> to <arrival>"`.
    pub fn parse(s: &str) -> Result<Self, InvalidRoute> {
        let parts: Vec<&str> = s.split(ROUTE_SEPARATOR).collect();

        let [departure, arrival] = parts.as_slice() else {
            return Err(InvalidRoute {
                route: s.to_string(),
                reason: "must contain exactly one \" to \" separator",
            });
        };

        let departure_key = normalize(departure);
        let arrival_key = normalize(arrival);

        if departure_key.trim().is_empty() || arrival_key.trim().is_empty() {
            return Err(InvalidRoute {
                route: s.to_string(),
                reason: "endpoints must contain letters or digits",
            });
        }

        Ok(Self {
            raw: s.to_string(),
            departure: (*departure).to_string(),
            arrival: (*arrival).to_string(),
            departure_key,
            arrival_key,
        })
    }

    /// The route exactly as it appeared in the dataset.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Departure endpoint as written.
    pub fn departure(&self) -> &str {
        &self.departure
    }

    /// Arrival endpoint as written.
    pub fn arrival(&self) -> &str {
        &self.arrival
    }

    /// Whether both normalized endpoints occur in an already-normalized query.
    ///
    /// Order-independent and without any word-boundary check.
    pub fn is_mentioned_in(&self, normalized_query: &str) -> bool {
        normalized_query.contains(&self.departure_key) && normalized_query.contains(&self.arrival_key)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Which dataset a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Train,
    Bus,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Train => f.write_str("train"),
            TransportMode::Bus => f.write_str("bus"),
        }
    }
}

/// Mode-specific schedule detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDetail {
    /// Journey duration, e.g. "16h".
    Train { duration: String },
    /// Departure time, e.g. "08:30 PM".
    Bus { time: String },
}

/// A single schedule entry from the train or bus dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Service name, e.g. "Rajdhani Express".
    pub name: String,
    /// Service number as published.
    pub number: String,
    /// Validated route.
    pub route: Route,
    /// Duration for trains, departure time for buses.
    pub detail: RouteDetail,
}

impl RouteRecord {
    /// Create a train record.
    pub fn train(
        name: impl Into<String>,
        number: impl Into<String>,
        route: Route,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            route,
            detail: RouteDetail::Train {
                duration: duration.into(),
            },
        }
    }

    /// Create a bus record.
    pub fn bus(
        name: impl Into<String>,
        number: impl Into<String>,
        route: Route,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            route,
            detail: RouteDetail::Bus { time: time.into() },
        }
    }

    /// The dataset this record comes from.
    pub fn mode(&self) -> TransportMode {
        match self.detail {
            RouteDetail::Train { .. } => TransportMode::Train,
            RouteDetail::Bus { .. } => TransportMode::Bus,
        }
    }
}

/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const RECORDS_ROUTE_COMPONENT: &str = "records";
pub const RECORDS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RECORDS_ROUTE_COMPONENT);

pub const TIMEZONES_ROUTE_COMPONENT: &str = "timezones";
pub const TIMEZONES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", TIMEZONES_ROUTE_COMPONENT);

/// Label of the automatically created record for the viewer's own timezone.
/// Can be overridden through `clock.local_label` in the configuration.
pub const LOCAL_RECORD_LABEL: &str = "Local (You)";

/// Every user-facing message the application prints.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// only pick a variant and hand it to one of the `msg_*` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === CRAG MESSAGES ===
    CragCreated(String, i64), // name, id
    CragNotFound(i64),
    CragsHeader,
    NoCragsFound,

    // === AREA MESSAGES ===
    AreaCreated(String, i64),
    AreaNotFound(i64),
    AreasHeader,
    NoAreasFound,

    // === ROUTE MESSAGES ===
    RouteCreated(String, i64),
    RouteNotFound(i64),
    RoutesHeader,
    NoRoutesFound,

    // === TICK MESSAGES ===
    TickCreated(String, i64), // route name, id
    TickUpdated(i64),
    TickNotFound(i64),
    TicksHeader,
    NoTicksFound,
    InvalidDate(String),

    // === GENERIC RECORD MESSAGES ===
    RecordDeleted(&'static str, i64), // table, id
    RecordDeleteFailed(&'static str, i64),
    RecordHasChildren(&'static str, i64),

    // === CONFIGURATION MESSAGES ===
    ConfigHeader,
    ConfigLoadFailed(String),

    // === DATABASE MESSAGES ===
    DatabaseOpenFailed(String),
}

use crate::db::{areas::Area, crags::Crag, routes::Route, ticks::Tick};
use crate::libs::config::Config;
use prettytable::{row, Table};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct View {}

impl View {
    pub fn crags(crags: &[Crag]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "LOCATION"]);
        for crag in crags {
            table.add_row(row![crag.id, crag.name, crag.location]);
        }
        table.printstd();
    }

    pub fn areas(areas: &[Area]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "CRAG ID", "NAME"]);
        for area in areas {
            table.add_row(row![area.id, area.crag_id, area.name]);
        }
        table.printstd();
    }

    pub fn routes(routes: &[Route]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "CRAG ID", "AREA ID", "NAME", "GRADE", "LENGTH", "PITCHES", "STARS"]);
        for route in routes {
            table.add_row(row![
                route.id,
                route.crag_id,
                route.area_id,
                route.name,
                route.grade,
                route.length,
                route.pitches,
                "*".repeat(route.stars as usize)
            ]);
        }
        table.printstd();
    }

    pub fn ticks(ticks: &[Tick]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "ROUTE ID", "DATE", "STYLE", "ATTEMPTS", "SESSIONS", "FALLS", "HANGS"]);
        for tick in ticks {
            table.add_row(row![
                tick.id,
                tick.route_id,
                tick.date.format(DATE_FORMAT),
                Self::style(tick),
                tick.attempts,
                tick.sessions,
                tick.falls,
                tick.hangs
            ]);
        }
        table.printstd();
    }

    /// Multi-line detail block for a single tick.
    pub fn tick(route_name: &str, tick: &Tick) -> String {
        format!(
            ":\n    Name:     {}\n    Date:     {}\n    Redpoint: {}\n    Flash:    {}\n    Onsight:  {}\n    Falls:    {}\n    Hangs:    {}\n    Attempts: {}\n    Sessions: {}\n    Url:      {}\n    Comment:  {}\n",
            route_name,
            tick.date.format(DATE_FORMAT),
            tick.redpoint,
            tick.flash,
            tick.onsight,
            tick.falls,
            tick.hangs,
            tick.attempts,
            tick.sessions,
            tick.url,
            tick.comment
        )
    }

    pub fn config(config: &Config) {
        let mut table = Table::new();

        table.add_row(row!["config", config.config]);
        table.add_row(row!["database", config.database]);
        table.add_row(row!["server", config.server]);
        table.add_row(row!["moonboard_set", config.moonboard_set]);
        table.add_row(row!["moonboard_user", config.moonboard_user]);
        table.add_row(row!["github", config.github]);
        table.printstd();
    }

    /// Short ascent-style label, e.g. "lead onsight".
    pub fn style(tick: &Tick) -> String {
        let flags = [(tick.lead, "lead"), (tick.onsight, "onsight"), (tick.flash, "flash"), (tick.redpoint, "redpoint")];
        let style: Vec<&str> = flags.iter().filter(|(set, _)| *set).map(|(_, label)| *label).collect();
        if style.is_empty() {
            "-".to_string()
        } else {
            style.join(" ")
        }
    }
}

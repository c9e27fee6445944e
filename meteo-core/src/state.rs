//! Application state and its transitions.
//!
//! Every transition goes through [`AppState::apply`], a pure reducer
//! from an [`Event`] to an optional [`Command`]. The reducer never
//! performs IO; [`Session`] executes emitted commands against a
//! [`SnapshotProvider`] and feeds completions back through the reducer.
//!
//! Supersession: each fetch carries a monotonically increasing
//! [`Ticket`]. A completion is applied only when its ticket is still
//! the newest one issued, so a slow earlier response can never
//! overwrite a faster later one.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::{FetchError, SnapshotProvider};
use crate::model::{SearchQuery, UnitSystem, WeatherSnapshot};

/// The three views of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Today,
    Forecast,
    Stats,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Today => "Today",
            Tab::Forecast => "Forecast",
            Tab::Stats => "Stats",
        }
    }

    pub const fn all() -> &'static [Tab] {
        &[Tab::Today, Tab::Forecast, Tab::Stats]
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Fetch lifecycle. `Failed` carries the error while the previous
/// snapshot (if any) stays available for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(FetchError),
}

/// Identity of one issued fetch, used for supersession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Raw search input submitted by the user.
    SearchSubmitted(String),
    /// Unit system picked; re-fetches the current query.
    UnitsSelected(UnitSystem),
    /// Tab switched; pure state change.
    TabSelected(Tab),
    /// A fetch finished, successfully or not.
    FetchCompleted {
        ticket: Ticket,
        result: Result<WeatherSnapshot, FetchError>,
    },
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch {
        ticket: Ticket,
        query: SearchQuery,
        units: UnitSystem,
    },
}

/// Central state holder. Owned by the session; the view only reads it.
#[derive(Debug, Clone)]
pub struct AppState {
    query: SearchQuery,
    units: UnitSystem,
    tab: Tab,
    snapshot: Option<WeatherSnapshot>,
    phase: Phase,
    issued: u64,
}

impl AppState {
    pub fn new(query: SearchQuery, units: UnitSystem) -> Self {
        Self {
            query,
            units,
            tab: Tab::default(),
            snapshot: None,
            phase: Phase::Idle,
            issued: 0,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Apply one event; return the side effect it asks for, if any.
    pub fn apply(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::SearchSubmitted(raw) => match SearchQuery::parse(&raw) {
                Ok(query) => {
                    self.query = query;
                    Some(self.begin_fetch())
                }
                Err(err) => {
                    debug!("rejected search input without a network call");
                    self.phase = Phase::Failed(err);
                    None
                }
            },
            Event::UnitsSelected(units) => {
                // The provider does the conversion; re-fetch the same query.
                self.units = units;
                Some(self.begin_fetch())
            }
            Event::TabSelected(tab) => {
                self.tab = tab;
                None
            }
            Event::FetchCompleted { ticket, result } => {
                if ticket != self.newest_ticket() {
                    warn!(?ticket, "discarding superseded fetch result");
                    return None;
                }

                match result {
                    Ok(snapshot) => {
                        self.snapshot = Some(snapshot);
                        self.phase = Phase::Ready;
                    }
                    // Previous snapshot stays; only the phase flags the error.
                    Err(err) => self.phase = Phase::Failed(err),
                }
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> Command {
        self.issued += 1;
        self.phase = Phase::Loading;
        Command::Fetch {
            ticket: Ticket(self.issued),
            query: self.query.clone(),
            units: self.units,
        }
    }

    fn newest_ticket(&self) -> Ticket {
        Ticket(self.issued)
    }
}

/// Wires the reducer to a provider: dispatches an event, executes the
/// emitted fetch (if any), and applies its completion.
#[derive(Debug)]
pub struct Session {
    provider: Arc<dyn SnapshotProvider>,
    state: AppState,
}

impl Session {
    pub fn new(provider: Arc<dyn SnapshotProvider>, state: AppState) -> Self {
        Self { provider, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn dispatch(&mut self, event: Event) {
        if let Some(Command::Fetch {
            ticket,
            query,
            units,
        }) = self.state.apply(event)
        {
            let result = self.provider.fetch_snapshot(&query, units).await;
            self.state.apply(Event::FetchCompleted { ticket, result });
        }
    }
}

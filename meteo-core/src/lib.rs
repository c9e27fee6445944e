//! Core library for the `meteo` terminal weather viewer.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client and its failure taxonomy
//! - Shared domain models (snapshots, queries, units)
//! - The presentation mapper (snapshot → display descriptor)
//! - The application state reducer with last-query-wins supersession
//! - Synthetic outlook data for the forecast/stats tabs
//!
//! It is used by `meteo-cli`, but carries no terminal dependencies and
//! can back other front-ends.

pub mod client;
pub mod config;
pub mod model;
pub mod outlook;
pub mod presentation;
pub mod state;

pub use client::{FetchError, OpenWeatherClient, SnapshotProvider};
pub use config::Config;
pub use model::{Category, SearchQuery, UnitSystem, WeatherSnapshot};
pub use outlook::{OutlookProvider, SyntheticOutlook};
pub use presentation::{AmbientKind, DisplayDescriptor, IconKind, derive};
pub use state::{AppState, Command, Event, Phase, Session, Tab};

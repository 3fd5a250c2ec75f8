//! Core application logic for Link Up
//!
//! This crate contains the marketplace domain records (creators, venues,
//! inbox messages), the data source they are read from, search matching,
//! profile display rules and the application configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod creators;
pub mod messages;
pub mod profiles;
pub mod search;
pub mod venues;

pub use catalog::{CatalogError, DataSource, MockCatalog};
pub use config::{AppConfig, ConfigError};
pub use creators::Creator;
pub use messages::{MeetupStatus, Message};
pub use profiles::ProfileHeader;
pub use search::{PriceRange, SearchCriteria};
pub use venues::Venue;

//! # Bikeshare Booking Engine
//!
//! Reservation conflict & lifecycle engine for a rental bike fleet.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: core entities, pure interval/status logic, repository traits
//! - **application**: use cases (booking conflict policy, ride handover) and
//!   outbound ports to external collaborators
//! - **infrastructure**: SeaORM persistence (entities, migrations,
//!   repositories)
//! - **support**: logging bootstrap for embedding processes
//!
//! A booking's lifecycle status is derived from its timestamps at read time
//! and never stored. The non-overlap invariant is enforced inside a storage
//! transaction that locks the conflicting row set, so concurrent creates for
//! intersecting windows admit exactly one winner. HTTP, identity and billing
//! are external collaborators reached through the service layer and ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig, BookingPolicy};

// Re-export domain types for easy access
pub use domain::{Booking, BookingError, BookingResult, BookingSlot, BookingStatus, Ride};

// Re-export database types
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export services and ports
pub use application::{
    BillingGateway, BookingService, HandoverCheck, LoggingBillingGateway, RideService,
};

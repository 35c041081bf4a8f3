//! Application layer - use cases over the domain repositories

pub mod booking;
pub mod ports;
pub mod ride;

pub use booking::{BookingService, HandoverCheck};
pub use ports::{BillingGateway, LoggingBillingGateway};
pub use ride::RideService;

pub mod bike;
pub mod booking;
pub mod error;
pub mod interval;
pub mod repositories;
pub mod ride;

// Re-export commonly used types
pub use bike::Bike;
pub use booking::{Booking, BookingSlot, BookingStatus, NewBooking};
pub use error::{BookingError, BookingResult};
pub use interval::TimeRange;
pub use repositories::RepositoryProvider;
pub use ride::Ride;

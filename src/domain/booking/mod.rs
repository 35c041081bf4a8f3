pub mod model;
pub mod repository;

pub use model::{Booking, BookingSlot, BookingStatus, NewBooking};
pub use repository::BookingRepository;

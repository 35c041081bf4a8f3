pub mod model;
pub mod repository;

pub use model::Ride;
pub use repository::RideRepository;

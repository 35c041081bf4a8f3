pub mod model;
pub mod repository;

pub use model::Bike;
pub use repository::BikeRepository;

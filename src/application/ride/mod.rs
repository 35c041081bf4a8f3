pub mod service;

pub use service::RideService;

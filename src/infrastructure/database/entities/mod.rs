//! Database entities module

pub mod bike;
pub mod booking;
pub mod ride;

pub mod car;
pub mod place;
pub mod reservation;
pub mod ride;

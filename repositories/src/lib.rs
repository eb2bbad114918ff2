pub mod crew;
pub mod deserialize;

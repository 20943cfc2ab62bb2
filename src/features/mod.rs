pub mod locations;
pub mod system;

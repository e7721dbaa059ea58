pub mod events;
pub mod pulls;
pub mod threads;

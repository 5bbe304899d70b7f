pub mod dns;
pub mod interface;
pub mod setup;

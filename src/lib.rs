// Library for tests to access modules

pub mod config;
pub mod controller;
pub mod delivery;
pub mod models;
pub mod sources;
pub mod version;
pub mod worker;

// Library for tests to access modules

pub mod config;
pub mod error;
pub mod host_repo;
pub mod models;
pub mod routes;
pub mod stats;
pub mod version;

pub mod check_credentials;
pub mod config;
pub mod plan;
pub mod run;
pub mod schema;

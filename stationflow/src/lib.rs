pub mod app;
pub mod config;
pub mod io;
pub mod model;
pub mod session;

pub mod api;
pub mod console;
pub mod di;
pub mod service;
pub mod state;

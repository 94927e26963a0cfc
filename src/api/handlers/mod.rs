//! HTTP request handlers.

pub mod demo_handler;
pub mod upload_handler;
pub mod user_handler;
pub mod ws_handler;

pub use demo_handler::demo_routes;
pub use user_handler::user_routes;

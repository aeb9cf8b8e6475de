pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
pub mod store;

pub use app::build_router;

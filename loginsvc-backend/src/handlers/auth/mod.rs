pub mod dto;
pub mod login;
pub mod utils;

pub use login::login;

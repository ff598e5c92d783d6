pub mod config;
pub mod event;
pub mod migration;
pub mod token;

pub use config::*;
pub use event::*;
pub use migration::*;
pub use token::*;

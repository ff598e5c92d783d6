pub mod initialize;
pub mod create_event;
pub mod mint;
pub mod add_event_minter;
pub mod renounce_event_minter;
pub mod end_event;
pub mod burn_and_remint;
pub mod queries;

pub use initialize::*;
pub use create_event::*;
pub use mint::*;
pub use add_event_minter::*;
pub use renounce_event_minter::*;
pub use end_event::*;
pub use burn_and_remint::*;
pub use queries::*;

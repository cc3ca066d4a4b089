//! Command implementations.

pub mod classify;
pub mod fetch_model;
pub mod sdgs;

pub use self::classify::execute_classify;
pub use self::fetch_model::execute_fetch_model;
pub use self::sdgs::execute_sdgs;

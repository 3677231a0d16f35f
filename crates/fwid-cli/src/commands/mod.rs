//! Command implementations for fwid

pub mod codes;
pub mod identify;
pub mod list;
pub mod validate;

pub use codes::codes;
pub use identify::identify;
pub use list::list;
pub use validate::validate;

// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod form;
pub mod input;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use form::*;
pub use input::*;

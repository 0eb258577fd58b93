pub mod cache;
pub mod format;
pub mod model;
pub mod parser;
pub mod presets;

pub use cache::PatternCache;
pub use format::{DEFAULT_MASK_CHAR, LiteralMode, MaskOutput, apply, placeholder};
pub use model::{Pattern, Slot, SlotKind};
pub use parser::compile;

//! Input masking: compile `#`/`A`/`*` patterns, re-derive raw and
//! formatted values from edited text, and report validity.
//!
//! ```
//! use steply_mask::mask::{LiteralMode, apply, compile};
//!
//! let phone = compile("(###) ###-####");
//! let out = apply(&phone, "123abc456", LiteralMode::Lazy);
//! assert_eq!(out.raw.as_deref(), Some("123456"));
//! assert_eq!(out.formatted, "(123) 456");
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod mask;
pub mod terminal;
pub mod validation;

pub use config::{ConfigError, FieldConfig};
pub use input::{MaskEditor, MaskedInput};
pub use mask::{LiteralMode, MaskOutput, Pattern, PatternCache};
pub use validation::{ValidationConfig, ValidationReporter, ValidatorRegistry};

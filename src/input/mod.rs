pub mod editor;
pub mod masked;
pub mod text_edit;

pub use editor::{KeyOutcome, MaskEditor};
pub use masked::{MaskedInput, ValueCallback};

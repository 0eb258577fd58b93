pub mod reporter;
pub mod validators;

pub use reporter::{
    ReportChannel, Trigger, ValidationConfig, ValidationEvent, ValidationReporter,
    ValidatorSource, ValidityCallback,
};
pub use validators::{Validator, ValidatorRegistry};

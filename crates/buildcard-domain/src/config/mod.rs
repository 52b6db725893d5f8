mod value_objects;

pub use value_objects::{OutcomeValue, StepConfig};

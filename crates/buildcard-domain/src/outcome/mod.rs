mod value_objects;


pub use value_objects::{
    resolve_outcome, BuildSignals, Outcome, PIPELINE_SUCCESS_STATES, WORKFLOW_SUCCESS,
};

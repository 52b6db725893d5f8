mod env;

pub use env::{load_build_signals, load_step_config, EnvSource, ProcessEnv};

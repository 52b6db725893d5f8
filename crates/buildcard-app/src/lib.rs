pub mod application;

pub use application::run_step;

pub mod services;
mod step;

pub use step::run_step;

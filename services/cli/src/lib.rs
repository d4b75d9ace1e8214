mod cli;
mod config;
mod error;
mod telemetry;
mod transform;

pub use error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

use std::process::ExitCode;

use buildcard_domain::shared::DomainError;
use buildcard_infrastructure::config::ProcessEnv;

#[tokio::main]
async fn main() -> ExitCode {
    match buildcard_lib::run_step(&ProcessEnv).await {
        Ok(()) => {
            println!("\nMessage successfully sent! 🚀");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = match e.downcast_ref::<DomainError>() {
                Some(domain_err) => domain_err.format_with_code(),
                None => format!("{:#}", e),
            };
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

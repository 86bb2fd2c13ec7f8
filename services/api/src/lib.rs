mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use privacy_risk_scanner::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

mod classify;
mod cli;
mod infra;
mod routes;
mod server;

use casa_catalog::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

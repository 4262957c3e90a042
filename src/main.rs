use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;

use workforce_api::db::DatabaseConnection;
use workforce_api::handlers::api_router;
use workforce_api::services::{EmployeeCrudService, ProjectCrudService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize tracing for logs
    tracing_subscriber::fmt::init();

    // Get port from environment or use default
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    // Create database connection and apply the schema
    let db_connection = DatabaseConnection::new().await?;

    // Create CRUD services
    let employee_service = Arc::new(EmployeeCrudService::new(db_connection.clone()));
    let project_service = Arc::new(ProjectCrudService::new(db_connection));

    // Build CRUD API router
    let app = api_router(employee_service, project_service);

    // Run it
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

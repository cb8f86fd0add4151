use tracing::info;

/// Placeholder for the database connection check. No backend is configured,
/// so this only reports that and returns.
pub async fn check_connection() {
    info!("Database: not configured, skipping connection check");
}

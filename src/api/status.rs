//! Root route: reports that the API is up and which routes it serves.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::helpers;

pub const ROUTES: [&str; 1] = ["/summarize (POST)"];

/// Lambda handler for the status entrypoint. Ignores the event.
///
/// # Errors
///
/// Never returns an error.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!(request_id = %event.context.request_id, "Status requested");
    Ok(helpers::ok_status(&ROUTES))
}

pub use self::function_handler as handler;

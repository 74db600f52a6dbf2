//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints for resolving operational
//! days and aggregating attendance dashboards.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{OperationalDayResponse, create_router};
pub use request::{DashboardRequest, OperationalDayRequest};
pub use response::ApiError;
pub use state::AppState;

pub mod response;

pub use response::{ErrorResponse, HealthResponse, CONFIRMATION_BODY};

/// Frontend (self-service) API interface
pub mod frontend;

pub mod backend;
pub mod client;
pub mod error;
pub mod types;

pub use backend::LeadBackend;
pub use client::LeadServiceClient;
pub use error::ClientError;
pub use types::{SaveRequestBody, ScrapeResponse};

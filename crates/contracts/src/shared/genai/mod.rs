pub mod gemini;
pub mod schema;
pub mod types;

pub use schema::{ResponseSchema, SchemaType};
pub use types::{GenerationError, GenerationRequest, GenerativeClient};

// src/core/mod.rs

pub mod error;
pub mod keywords;
pub mod locale;
pub mod net;
pub mod payload;

pub use error::RequestError;
pub use keywords::KeywordQuery;
pub use locale::Locale;
pub use net::{HttpTransport, Transport};
pub use payload::{LinkGroup, RequestPayload, ResultPayload};

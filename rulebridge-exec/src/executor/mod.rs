mod config;
mod dispatcher;
mod error;
pub mod events;
pub mod http;
pub mod response;

pub use config::ClientConfig;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, RemoteApiError};
pub use events::{CompositeEventSink, Event, EventSink, NoOpEventSink, StdoutEventSink};
pub use http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient};
pub use response::{normalize, parse_body, ResultEnvelope};

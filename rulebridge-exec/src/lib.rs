#![forbid(unsafe_code)]

//! Builds and issues the single HTTP request behind one node invocation.
//!
//! Parameters come typed from `rulebridge-core`; this crate adds the credential, turns the
//! parameters into a request, sends it through an [`HttpClient`] and normalizes the reply.

pub mod compile;
pub mod credentials;
pub mod executor;

pub use crate::compile::{compile_request, CompileError, RequestTemplate};
pub use crate::credentials::{ApiKey, Credential, CredentialError};
pub use crate::executor::{
    ClientConfig, DispatchError, Dispatcher, HttpClient, HttpError, RemoteApiError,
    ReqwestHttpClient, ResultEnvelope,
};

//! External interfaces: the REST API

pub mod http;

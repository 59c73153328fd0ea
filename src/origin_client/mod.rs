pub mod error;
pub mod headers;
pub mod origin_client;
pub mod request;
pub mod reqwest_origin_client;
pub mod response;

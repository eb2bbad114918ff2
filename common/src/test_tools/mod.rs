pub mod http;
pub mod mocks;

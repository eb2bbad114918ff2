pub mod http_error;

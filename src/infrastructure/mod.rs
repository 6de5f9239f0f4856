pub mod http_api;

mod http;

pub use http::HttpRosterApi;

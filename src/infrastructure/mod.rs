pub mod http;
pub mod js_executor;

pub use http::{get_json, HttpFetcher, ReqwestFetcher};
pub use js_executor::JsExecutor;

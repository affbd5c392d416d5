pub mod chat_demo;
pub mod request_demo;

// API surface: route groups and the request-intercepting middleware

pub mod hello;
pub mod middleware;
pub mod time_message;

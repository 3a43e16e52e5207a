//! Infrastructure: rate limiting, advice provider clients, prompt
//! templates, and response parsing

pub mod prompts;
pub mod providers;
pub mod rate_limiter;
pub mod response_parser;

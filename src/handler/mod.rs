mod event;
mod service;

pub use event::CheckEvent;
pub use service::CheckHandler;

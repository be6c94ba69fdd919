//! Events - 进程内事件通道

mod unauthorized;

pub use unauthorized::UnauthorizedSignal;

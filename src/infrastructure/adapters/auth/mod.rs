//! Auth Adapter - 认证网关实现

mod fake_auth_gateway;
mod http_auth_gateway;

pub use fake_auth_gateway::FakeAuthGateway;
pub use http_auth_gateway::HttpAuthGateway;

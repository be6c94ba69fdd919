//! Fleetkit - 车队管理前端的无头客户端核心
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Session Context: 会话状态机、角色与用户
//! - Fleet Context: 车队资源实体（卡车/挂车/轮胎/行程/维护）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（AuthGateway, SessionStorage）
//! - Session: SessionStore 会话服务 + RouteGuard 路由守卫
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 带凭证注入与 401 信号的 ApiClient
//! - Events: 未授权信号 (broadcast)
//! - Persistence: Sled / 内存会话存储
//! - Adapters: HTTP/Fake 认证网关、各资源的 REST 服务封装

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use bootstrap::{BootstrapError, FleetApp};
pub use config::{load_config, AppConfig};

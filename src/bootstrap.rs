//! Bootstrap - 组合根
//!
//! 按固定顺序装配: 存储 → 未授权信号 → HTTP 客户端 → 认证网关
//! → SessionStore → hydrate → 信号订阅 → 路由守卫 → 资源服务。
//!
//! 顺序承载两条时序约束:
//! - 第一次路由决策之前，会话恢复已完成（loading 已清除）
//! - 任何受保护内容挂载之前，未授权信号的订阅已建立

use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::StorageError;
use crate::application::session::{RouteGuard, SessionStore, UnauthorizedSubscription};
use crate::config::AppConfig;
use crate::infrastructure::adapters::auth::HttpAuthGateway;
use crate::infrastructure::adapters::fleet::{
    MaintenanceService, TireService, TrailerService, TripService, TruckService, UserService,
};
use crate::infrastructure::events::UnauthorizedSignal;
use crate::infrastructure::http::{ApiClient, ApiClientConfig, ApiError};
use crate::infrastructure::persistence::{SledSessionStorage, SledStorageConfig};

/// 装配错误
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Storage initialization failed: {0}")]
    Storage(#[from] StorageError),

    #[error("HTTP client initialization failed: {0}")]
    Http(#[from] ApiError),
}

/// 装配完成的应用上下文
///
/// 持有未授权信号的订阅句柄，随应用生命周期存续；
/// FleetApp 析构时监听任务一并终止
pub struct FleetApp {
    pub config: AppConfig,
    pub session: Arc<SessionStore>,
    pub guard: RouteGuard,
    pub api: Arc<ApiClient>,
    pub trucks: TruckService,
    pub trailers: TrailerService,
    pub tires: TireService,
    pub trips: TripService,
    pub maintenance: MaintenanceService,
    pub users: UserService,
    _unauthorized: UnauthorizedSubscription,
}

impl FleetApp {
    /// 装配应用
    ///
    /// 需要在 tokio 运行时内调用（信号监听任务通过 tokio::spawn 挂载）
    pub fn bootstrap(config: AppConfig) -> Result<Self, BootstrapError> {
        crate::config::print_config(&config);

        let storage = SledSessionStorage::new(&SledStorageConfig {
            db_path: config.storage.path.clone(),
        })?
        .arc();

        let signal = UnauthorizedSignal::new();

        let api = ApiClient::new(
            ApiClientConfig {
                base_url: config.api.base_url.clone(),
                timeout_secs: config.api.timeout_secs,
            },
            storage.clone(),
            signal.clone(),
        )?
        .arc();

        let auth = HttpAuthGateway::new(api.clone()).arc();

        let session = SessionStore::new(auth, storage).arc();
        session.hydrate();
        let subscription = session.attach_unauthorized(signal.subscribe());

        let guard = RouteGuard::new(session.clone());

        Ok(Self {
            config,
            guard,
            trucks: TruckService::new(api.clone()),
            trailers: TrailerService::new(api.clone()),
            tires: TireService::new(api.clone()),
            trips: TripService::new(api.clone()),
            maintenance: MaintenanceService::new(api.clone()),
            users: UserService::new(api.clone()),
            api,
            session,
            _unauthorized: subscription,
        })
    }
}

//! Fleet Context - 车队限界上下文
//!
//! 职责:
//! - 车队资源实体（卡车/挂车/轮胎/行程/维护）
//! - 与后端载荷对齐的状态枚举与分页类型

mod entities;
mod value_objects;

pub use entities::{
    MaintenanceAlert, MaintenanceRule, NewMaintenanceRule, NewTire, NewTrailer, NewTrip, NewTruck,
    Tire, TireMaintenance, Trailer, Trip, Truck,
};
pub use value_objects::{
    FuelType, MaintenanceKind, MaintenanceStatus, PageQuery, Paginated, TripStatus, VehicleStatus,
};

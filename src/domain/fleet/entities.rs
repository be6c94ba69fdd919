//! Fleet Context - 车队资源实体
//!
//! 字段与后端 REST 载荷保持一致（camelCase，主键兼容 Mongo 风格 `_id`）。
//! `New*` 为创建/更新请求体，不带主键。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value_objects::{
    FuelType, MaintenanceKind, MaintenanceStatus, TripStatus, VehicleStatus,
};

/// 卡车
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    #[serde(alias = "_id")]
    pub id: String,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    /// 载重（吨）
    pub capacity: f64,
    pub fuel_type: FuelType,
    pub status: VehicleStatus,
}

/// 卡车创建/更新请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTruck {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub capacity: f64,
    pub fuel_type: FuelType,
    pub status: VehicleStatus,
}

/// 挂车
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trailer {
    #[serde(alias = "_id")]
    pub id: String,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub capacity: f64,
    pub status: VehicleStatus,
}

/// 挂车创建/更新请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrailer {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub capacity: f64,
    pub status: VehicleStatus,
}

/// 轮胎
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tire {
    #[serde(alias = "_id")]
    pub id: String,
    pub serial_number: String,
    pub brand: String,
    /// 型号/花纹类别，后端为自由文本
    #[serde(rename = "type")]
    pub kind: String,
    pub current_mileage_on_tire: u64,
    /// 预期寿命（公里）
    pub expected_life: u64,
}

/// 轮胎创建/更新请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTire {
    pub serial_number: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub current_mileage_on_tire: u64,
    pub expected_life: u64,
}

/// 轮胎保养状态（`GET /tires/:id/maintenance`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireMaintenance {
    pub status: MaintenanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// 行程
///
/// driver/truck/trailer 为后端原样返回的引用字段（显示名或主键）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(alias = "_id")]
    pub id: String,
    pub driver: String,
    pub truck: String,
    pub trailer: String,
    pub route: String,
    pub date: NaiveDate,
    pub status: TripStatus,
}

/// 行程创建/更新请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub driver: String,
    pub truck: String,
    pub trailer: String,
    pub route: String,
    pub date: NaiveDate,
    pub status: TripStatus,
}

/// 维护提醒
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAlert {
    #[serde(alias = "_id")]
    pub id: String,
    /// 车牌号
    pub vehicle: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    pub status: MaintenanceStatus,
    pub date: NaiveDate,
}

/// 维护规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRule {
    #[serde(alias = "_id")]
    pub id: String,
    pub vehicle: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_km: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_days: Option<u32>,
}

/// 维护规则更新请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRule {
    pub vehicle: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_km: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_days: Option<u32>,
}

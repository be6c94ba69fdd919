//! Fleet Context - Value Objects
//!
//! 状态枚举与后端实际返回的字符串一一对应（车辆状态沿用后端的法语词汇）

use serde::{Deserialize, Serialize};

/// 车辆状态（卡车/挂车共用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "Disponible")]
    Available,
    #[serde(rename = "En service")]
    InService,
    #[serde(rename = "En Maintenance")]
    InMaintenance,
}

/// 燃料类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Diesel,
    #[serde(rename = "Essence")]
    Gasoline,
    #[serde(rename = "Electrique")]
    Electric,
}

/// 行程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// 维护条目状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Pending,
    Overdue,
    Completed,
}

/// 维护类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceKind {
    #[serde(rename = "Oil Change")]
    OilChange,
    #[serde(rename = "Tire Rotation")]
    TireRotation,
    Inspection,
    Repair,
}

/// 分页查询参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

/// 分页响应 `{ data, count }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// 服务端的记录总数（跨所有页）
    pub count: u64,
}

impl<T> Paginated<T> {
    /// 按页大小换算总页数
    pub fn total_pages(&self, limit: u32) -> u64 {
        if limit == 0 {
            return 0;
        }
        self.count.div_ceil(limit as u64)
    }
}

//! 核心数据模型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 患者基本信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub document_id: String,           // 证件号（11位数字）
    pub name: String,                  // 患者姓名
    pub email: String,                 // 联系邮箱
    pub birth_date: chrono::NaiveDate, // 出生日期
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 分诊风险级别（曼彻斯特分级，按紧急程度从高到低声明）
///
/// 派生的 `Ord` 使最紧急的级别排序最小，与 `rank()` 的数值一致。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Immediate, // 立即（红）
    High,      // 高危（橙）
    Moderate,  // 中等（黄）
    Low,       // 低危（绿）
    Minimal,   // 非急症（蓝）
}

impl RiskLevel {
    /// 曼彻斯特分级序号，1 表示最紧急
    pub fn rank(&self) -> u8 {
        match self {
            RiskLevel::Immediate => 1,
            RiskLevel::High => 2,
            RiskLevel::Moderate => 3,
            RiskLevel::Low => 4,
            RiskLevel::Minimal => 5,
        }
    }

    /// 所有级别，按紧急程度从高到低
    pub fn all() -> Vec<RiskLevel> {
        vec![
            RiskLevel::Immediate,
            RiskLevel::High,
            RiskLevel::Moderate,
            RiskLevel::Low,
            RiskLevel::Minimal,
        ]
    }
}

/// 分诊评估问卷
///
/// 四个布尔答案由调用方收集并解析，核心层只接收已解析的值。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TriageAssessment {
    pub life_threatening: bool,   // 是否有生命危险
    pub high_severity: bool,      // 病情严重程度高
    pub moderate_severity: bool,  // 病情严重程度中等
    pub low_severity: bool,       // 病情严重程度低
}

/// 就诊记录
///
/// 患者与分诊级别的不可变配对，`sequence` 在入队时分配，
/// 仅用于同级别内先到先得的次序判定。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub risk: RiskLevel,
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
}

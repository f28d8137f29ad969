//! 风险分级器
//!
//! 根据分诊评估问卷确定患者的紧急程度

use triage_core::{RiskLevel, TriageAssessment};

/// 风险分级器
///
/// 纯函数式组件，无内部状态。按固定优先顺序检查问卷标志，
/// 第一个为真的标志决定级别；问卷标志并不互斥，由优先顺序消除歧义。
#[derive(Debug, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    /// 创建新的风险分级器
    pub fn new() -> Self {
        Self
    }

    /// 对分诊评估问卷分级
    ///
    /// 优先顺序：生命危险 > 高严重度 > 中严重度 > 低严重度，
    /// 全部为否时归为非急症。
    pub fn classify(&self, assessment: &TriageAssessment) -> RiskLevel {
        if assessment.life_threatening {
            RiskLevel::Immediate
        } else if assessment.high_severity {
            RiskLevel::High
        } else if assessment.moderate_severity {
            RiskLevel::Moderate
        } else if assessment.low_severity {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        }
    }
}

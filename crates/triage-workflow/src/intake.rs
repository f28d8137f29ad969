//! 接诊服务
//!
//! 协调患者目录、风险分级器和分诊队列的核心服务

use crate::{
    classifier::RiskClassifier,
    directory::PatientDirectory,
    queue::{QueueStats, TriageQueue},
};
use triage_core::{Result, TriageAssessment, TriageError, Visit};

/// 接诊服务
///
/// 患者目录由调用方注入，分诊队列为本服务独占的可变状态。
/// 所有操作同步执行，不支持并发访问。
#[derive(Debug)]
pub struct IntakeService<D: PatientDirectory> {
    directory: D,
    classifier: RiskClassifier,
    queue: TriageQueue,
}

impl<D: PatientDirectory> IntakeService<D> {
    /// 创建新的接诊服务
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            classifier: RiskClassifier::new(),
            queue: TriageQueue::new(),
        }
    }

    /// 登记一次就诊
    ///
    /// 按证件号查找患者，未登记的患者返回 `PatientNotFound` 且不入队；
    /// 否则根据评估问卷分级并加入候诊队列。
    pub fn register_visit(
        &mut self,
        document_id: &str,
        assessment: &TriageAssessment,
    ) -> Result<Visit> {
        let patient = self
            .directory
            .find(document_id)
            .ok_or_else(|| TriageError::PatientNotFound(document_id.to_string()))?;

        let risk = self.classifier.classify(assessment);
        tracing::info!(
            "Registering visit for patient {} at level {:?}",
            patient.id,
            risk
        );

        Ok(self.queue.enqueue(patient.id, risk))
    }

    /// 呼叫下一位患者
    ///
    /// 委托分诊队列出队，队列为空时返回 `EmptyQueue`。
    pub fn call_next(&mut self) -> Result<Visit> {
        self.queue.dequeue()
    }

    /// 查询患者的就诊历史
    ///
    /// 患者未登记时返回 `PatientNotFound`；已登记但没有历史记录时
    /// 返回空序列，不视为错误。结果按叫号顺序排列。
    pub fn lookup_history(&self, document_id: &str) -> Result<Vec<Visit>> {
        let patient = self
            .directory
            .find(document_id)
            .ok_or_else(|| TriageError::PatientNotFound(document_id.to_string()))?;

        Ok(self
            .queue
            .history()
            .iter()
            .filter(|visit| visit.patient_id == patient.id)
            .cloned()
            .collect())
    }

    /// 是否有患者在候诊
    pub fn has_waiting(&self) -> bool {
        self.queue.has_pending()
    }

    /// 当前候诊人数
    pub fn waiting_count(&self) -> usize {
        self.queue.len()
    }

    /// 获取队列统计
    pub fn queue_stats(&self) -> QueueStats {
        self.queue.stats()
    }

    /// 获取患者目录实例
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// 获取可变患者目录实例
    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// 获取分诊队列实例
    pub fn queue(&self) -> &TriageQueue {
        &self.queue
    }
}

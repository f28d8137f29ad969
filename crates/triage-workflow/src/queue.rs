//! 分诊队列
//!
//! 按风险级别排序的候诊优先队列，同级别内先到先得

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use triage_core::{Result, RiskLevel, TriageError, Visit};
use uuid::Uuid;

/// 候诊堆中的条目
///
/// 排序键为 `(级别序号, 入队序号)`。`BinaryHeap` 是最大堆，
/// 这里反转比较方向，使数值最小的键（最紧急、最早入队）位于堆顶。
#[derive(Debug, Clone)]
struct PendingVisit(Visit);

impl PendingVisit {
    fn key(&self) -> (u8, u64) {
        (self.0.risk.rank(), self.0.sequence)
    }
}

impl PartialEq for PendingVisit {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PendingVisit {}

impl PartialOrd for PendingVisit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingVisit {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// 队列统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStats {
    pub waiting_total: usize,
    pub served_total: usize,
    pub waiting_by_level: HashMap<RiskLevel, usize>,
}

/// 分诊队列
///
/// 候诊集合按 `(级别序号, 入队序号)` 出队，已叫号的就诊记录
/// 追加到只增不减的历史序列中，二者互斥且不丢失。
#[derive(Debug)]
pub struct TriageQueue {
    pending: BinaryHeap<PendingVisit>,
    history: Vec<Visit>,
    next_sequence: u64,
}

impl TriageQueue {
    /// 创建新的分诊队列
    pub fn new() -> Self {
        Self {
            pending: BinaryHeap::new(),
            history: Vec::new(),
            next_sequence: 0,
        }
    }

    /// 患者入队
    ///
    /// 分配下一个入队序号并插入候诊集合，容量无上限，总是成功。
    /// 返回存入队列的就诊记录。
    pub fn enqueue(&mut self, patient_id: Uuid, risk: RiskLevel) -> Visit {
        self.next_sequence += 1;
        let visit = Visit {
            id: Uuid::new_v4(),
            patient_id,
            risk,
            sequence: self.next_sequence,
            created_at: chrono::Utc::now(),
        };

        self.pending.push(PendingVisit(visit.clone()));

        tracing::info!(
            "Enqueued visit {} for patient {} at level {:?} (sequence {})",
            visit.id,
            patient_id,
            risk,
            visit.sequence
        );
        visit
    }

    /// 叫号：取出优先级最高的就诊记录
    ///
    /// 移除并返回 `(级别序号, 入队序号)` 最小的就诊记录，同时追加到历史。
    /// 候诊集合为空时返回 `TriageError::EmptyQueue`，历史不受影响。
    pub fn dequeue(&mut self) -> Result<Visit> {
        match self.pending.pop() {
            Some(PendingVisit(visit)) => {
                self.history.push(visit.clone());
                tracing::info!(
                    "Dequeued visit {} for patient {} at level {:?}",
                    visit.id,
                    visit.patient_id,
                    visit.risk
                );
                Ok(visit)
            }
            None => Err(TriageError::EmptyQueue),
        }
    }

    /// 查看下一个将被叫号的就诊记录，不出队
    pub fn peek(&self) -> Option<&Visit> {
        self.pending.peek().map(|entry| &entry.0)
    }

    /// 是否有患者在候诊
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 候诊人数（不含历史）
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// 候诊集合是否为空
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// 已叫号历史，按叫号顺序排列的只读视图
    pub fn history(&self) -> &[Visit] {
        &self.history
    }

    /// 获取队列统计
    pub fn stats(&self) -> QueueStats {
        let mut waiting_by_level = HashMap::new();
        for entry in &self.pending {
            *waiting_by_level.entry(entry.0.risk).or_insert(0) += 1;
        }

        QueueStats {
            waiting_total: self.pending.len(),
            served_total: self.history.len(),
            waiting_by_level,
        }
    }
}

impl Default for TriageQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_empty_queue() {
        let mut queue = TriageQueue::new();

        let result = queue.dequeue();
        assert!(matches!(result, Err(TriageError::EmptyQueue)));
        // 失败的叫号不会写入历史
        assert!(queue.history().is_empty());
    }

    #[test]
    fn test_dequeue_respects_risk_order() {
        let mut queue = TriageQueue::new();

        let low = queue.enqueue(Uuid::new_v4(), RiskLevel::Low);
        let immediate = queue.enqueue(Uuid::new_v4(), RiskLevel::Immediate);
        let moderate = queue.enqueue(Uuid::new_v4(), RiskLevel::Moderate);

        assert_eq!(queue.dequeue().unwrap(), immediate);
        assert_eq!(queue.dequeue().unwrap(), moderate);
        assert_eq!(queue.dequeue().unwrap(), low);
    }

    #[test]
    fn test_fifo_within_same_level() {
        let mut queue = TriageQueue::new();

        let first = queue.enqueue(Uuid::new_v4(), RiskLevel::High);
        let second = queue.enqueue(Uuid::new_v4(), RiskLevel::High);

        assert_eq!(queue.dequeue().unwrap(), first);
        assert_eq!(queue.dequeue().unwrap(), second);
    }

    #[test]
    fn test_sequence_numbers_are_unique_and_increasing() {
        let mut queue = TriageQueue::new();

        let a = queue.enqueue(Uuid::new_v4(), RiskLevel::Minimal);
        let b = queue.enqueue(Uuid::new_v4(), RiskLevel::Minimal);
        let c = queue.enqueue(Uuid::new_v4(), RiskLevel::Immediate);

        assert!(a.sequence < b.sequence);
        assert!(b.sequence < c.sequence);
    }

    #[test]
    fn test_len_tracks_enqueues_and_dequeues() {
        let mut queue = TriageQueue::new();
        assert!(!queue.has_pending());
        assert!(queue.is_empty());

        for _ in 0..5 {
            queue.enqueue(Uuid::new_v4(), RiskLevel::Moderate);
        }
        assert_eq!(queue.len(), 5);

        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.len(), 3);
        assert!(queue.has_pending());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = TriageQueue::new();
        let visit = queue.enqueue(Uuid::new_v4(), RiskLevel::High);

        assert_eq!(queue.peek(), Some(&visit));
        assert_eq!(queue.len(), 1);
        assert!(queue.history().is_empty());
    }

    #[test]
    fn test_history_preserves_dequeue_order() {
        let mut queue = TriageQueue::new();

        queue.enqueue(Uuid::new_v4(), RiskLevel::Low);
        queue.enqueue(Uuid::new_v4(), RiskLevel::Immediate);
        queue.enqueue(Uuid::new_v4(), RiskLevel::High);

        let first = queue.dequeue().unwrap();
        let second = queue.dequeue().unwrap();
        let third = queue.dequeue().unwrap();

        assert_eq!(queue.history(), &[first, second, third]);
        // 每条记录只出现一次，且不再计入候诊人数
        assert_eq!(queue.history().len(), 3);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_mixed_levels_never_increase_in_urgency() {
        let mut queue = TriageQueue::new();

        let levels = [
            RiskLevel::Minimal,
            RiskLevel::Immediate,
            RiskLevel::Moderate,
            RiskLevel::High,
            RiskLevel::Moderate,
            RiskLevel::Low,
            RiskLevel::Immediate,
        ];
        for level in levels {
            queue.enqueue(Uuid::new_v4(), level);
        }

        let mut previous_rank = 0u8;
        while queue.has_pending() {
            let visit = queue.dequeue().unwrap();
            assert!(visit.risk.rank() >= previous_rank);
            previous_rank = visit.risk.rank();
        }
    }

    #[test]
    fn test_stats() {
        let mut queue = TriageQueue::new();

        queue.enqueue(Uuid::new_v4(), RiskLevel::High);
        queue.enqueue(Uuid::new_v4(), RiskLevel::High);
        queue.enqueue(Uuid::new_v4(), RiskLevel::Minimal);
        queue.dequeue().unwrap();

        let stats = queue.stats();
        assert_eq!(stats.waiting_total, 2);
        assert_eq!(stats.served_total, 1);
        assert_eq!(stats.waiting_by_level.get(&RiskLevel::High), Some(&1));
        assert_eq!(stats.waiting_by_level.get(&RiskLevel::Minimal), Some(&1));
    }
}

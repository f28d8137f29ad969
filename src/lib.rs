//! # Triage
//!
//! 急诊预检分诊系统的根模块，重新导出核心数据结构与工作流组件，
//! 供演示程序和下游集成使用。

pub use triage_core::{Patient, Result, RiskLevel, TriageAssessment, TriageError, Visit};
pub use triage_workflow::{
    InMemoryPatientDirectory, IntakeService, PatientDirectory, QueueStats, RiskClassifier,
    TriageQueue,
};

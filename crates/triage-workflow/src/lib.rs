//! # 分诊工作流模块
//!
//! 提供完整的急诊预检分诊工作流功能，包括：
//! - 风险分级器：根据分诊评估问卷确定患者的紧急程度
//! - 分诊队列：按风险级别排序的候诊优先队列，同级别先到先得
//! - 患者目录：按证件号查找患者档案的协作方接口
//! - 接诊服务：协调分级、入队、叫号和就诊历史查询

pub mod classifier;
pub mod directory;
pub mod intake;
pub mod queue;

// 重新导出主要类型
pub use classifier::RiskClassifier;
pub use directory::{InMemoryPatientDirectory, PatientDirectory};
pub use intake::IntakeService;
pub use queue::{QueueStats, TriageQueue};

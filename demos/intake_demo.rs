//! 分诊工作流演示程序
//!
//! 展示急诊预检分诊的核心流程，包括患者登记、分诊评估、
//! 优先级叫号和就诊历史查询

use triage_core::{TriageAssessment, TriageError};
use triage_workflow::{InMemoryPatientDirectory, IntakeService};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    println!("🏥 急诊预检分诊演示\n");

    // 1. 登记患者档案
    let mut directory = InMemoryPatientDirectory::new();
    directory.register("11111111111", "张伟", "zhangwei@example.com", "01/01/1980")?;
    directory.register("22222222222", "王芳", "wangfang@example.com", "05/06/1992")?;
    directory.register("33333333333", "李娜", "lina@example.com", "10/10/1975")?;
    directory.register("44444444444", "刘洋", "liuyang@example.com", "20/12/2001")?;
    println!("✅ 登记了 {} 名患者", directory.len());

    let mut service = IntakeService::new(directory);

    // 2. 分诊评估并入队（入队顺序：低危、立即、中等、非急症）
    let cases = [
        ("11111111111", assessment(false, false, false, true)),
        ("22222222222", assessment(true, false, false, false)),
        ("33333333333", assessment(false, false, true, false)),
        ("44444444444", assessment(false, false, false, false)),
    ];

    for (document_id, a) in &cases {
        let visit = service.register_visit(document_id, a)?;
        println!(
            "📋 患者 {} 分诊级别 {:?}（入队序号 {}）",
            document_id, visit.risk, visit.sequence
        );
    }

    // 3. 候诊概览
    let stats = service.queue_stats();
    println!("\n📊 候诊概览:\n{}", serde_json::to_string_pretty(&stats)?);

    // 4. 按优先级叫号
    println!("\n🔔 叫号顺序:");
    while service.has_waiting() {
        let visit = service.call_next()?;
        println!("   -> 级别 {:?} 患者 {}", visit.risk, visit.patient_id);
    }

    // 5. 空队列叫号会返回明确错误
    match service.call_next() {
        Err(TriageError::EmptyQueue) => println!("\n⚠️  {}", TriageError::EmptyQueue),
        other => println!("\n意外结果: {:?}", other),
    }

    // 6. 查询就诊历史
    let history = service.lookup_history("22222222222")?;
    println!("\n📖 患者 22222222222 共 {} 条就诊记录", history.len());
    for visit in &history {
        println!("   - {} 级别 {:?}", visit.id, visit.risk);
    }

    println!("\n🎉 演示完成");
    Ok(())
}

fn assessment(
    life_threatening: bool,
    high_severity: bool,
    moderate_severity: bool,
    low_severity: bool,
) -> TriageAssessment {
    TriageAssessment {
        life_threatening,
        high_severity,
        moderate_severity,
        low_severity,
    }
}

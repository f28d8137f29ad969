//! 分诊终端交互界面
//!
//! 阻塞式菜单循环，负责收集输入并把问卷答案转换为核心层的布尔值。

use std::io::{self, BufRead, Write};

use triage_core::{Result, RiskLevel, TriageAssessment, TriageError, Visit};
use triage_workflow::{InMemoryPatientDirectory, IntakeService, PatientDirectory};

/// 终端客户端
pub struct TerminalClient {
    service: IntakeService<InMemoryPatientDirectory>,
}

impl TerminalClient {
    /// 创建新的终端客户端
    pub fn new(service: IntakeService<InMemoryPatientDirectory>) -> Self {
        Self { service }
    }

    /// 主菜单循环，选择退出或输入流结束时返回
    pub fn run(&mut self) -> Result<()> {
        loop {
            println!();
            println!("====== 急诊预检分诊 ======");
            println!("1. 登记患者");
            println!("2. 登记就诊（分诊评估）");
            println!("3. 呼叫下一位患者");
            println!("4. 查询就诊历史");
            println!("5. 候诊概览");
            println!("0. 退出");

            let choice = match prompt("请选择") {
                Ok(choice) => choice,
                Err(e) if is_eof(&e) => {
                    println!("\n再见。");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            match choice.as_str() {
                "1" => {
                    if let Err(e) = self.register_patient() {
                        println!("\n登记患者失败: {}", e);
                    }
                }
                "2" => {
                    if let Err(e) = self.register_visit() {
                        println!("\n登记就诊失败: {}", e);
                    }
                }
                "3" => {
                    if let Err(e) = self.call_next() {
                        println!("\n{}", e);
                    }
                }
                "4" => {
                    if let Err(e) = self.show_history() {
                        println!("\n查询就诊历史失败: {}", e);
                    }
                }
                "5" => self.show_overview(),
                "0" => {
                    println!("\n再见。");
                    return Ok(());
                }
                _ => println!("\n无效选项，请重新选择。"),
            }
        }
    }

    /// 登记新患者档案
    fn register_patient(&mut self) -> Result<()> {
        let name = prompt("姓名")?;
        let document_id = prompt("证件号（11位数字）")?;
        let email = prompt("邮箱")?;
        let birth_date = prompt("出生日期（dd/mm/yyyy）")?;

        let patient = self
            .service
            .directory_mut()
            .register(&document_id, &name, &email, &birth_date)?;

        println!("\n患者 {} 登记成功。", patient.name);
        Ok(())
    }

    /// 登记就诊并执行分诊评估
    fn register_visit(&mut self) -> Result<()> {
        let document_id = prompt("证件号")?;
        if self.service.directory().find(&document_id).is_none() {
            println!("\n患者未找到。");
            return Ok(());
        }

        let assessment = TriageAssessment {
            life_threatening: prompt_yes_no("是否有生命危险？")?,
            high_severity: prompt_yes_no("病情严重程度是否为高？")?,
            moderate_severity: prompt_yes_no("病情严重程度是否为中等？")?,
            low_severity: prompt_yes_no("病情严重程度是否为低？")?,
        };

        let visit = self.service.register_visit(&document_id, &assessment)?;
        println!("\n分诊级别: {:?}（第{}级）", visit.risk, visit.risk.rank());
        println!("已加入候诊队列，当前候诊 {} 人。", self.service.waiting_count());
        Ok(())
    }

    /// 呼叫下一位患者
    fn call_next(&mut self) -> Result<()> {
        let visit = self.service.call_next()?;
        self.print_visit(&visit);
        Ok(())
    }

    /// 查询患者的就诊历史
    fn show_history(&mut self) -> Result<()> {
        let document_id = prompt("证件号")?;
        let history = self.service.lookup_history(&document_id)?;

        if history.is_empty() {
            println!("\n该患者暂无就诊记录。");
            return Ok(());
        }

        println!("\n共 {} 条就诊记录：", history.len());
        for visit in &history {
            println!(
                "  - {} 级别 {:?} 时间 {}",
                visit.id,
                visit.risk,
                visit.created_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
        Ok(())
    }

    /// 显示候诊概览，级别计数按紧急程度从高到低输出
    fn show_overview(&self) {
        let stats = self.service.queue_stats();
        println!("\n候诊概览:");
        println!("  候诊人数: {}", stats.waiting_total);
        println!("  已接诊人数: {}", stats.served_total);
        for level in RiskLevel::all() {
            if let Some(count) = stats.waiting_by_level.get(&level) {
                println!("  级别 {:?}: {} 人", level, count);
            }
        }

        if let Some(next) = self.service.queue().peek() {
            match self.service.directory().find_by_id(next.patient_id) {
                Some(patient) => {
                    println!("  下一位: {}（级别 {:?}）", patient.name, next.risk)
                }
                None => println!("  下一位: 患者 {}（级别 {:?}）", next.patient_id, next.risk),
            }
        }
    }

    /// 打印被叫号的就诊记录
    fn print_visit(&self, visit: &Visit) {
        match self.service.directory().find_by_id(visit.patient_id) {
            Some(patient) => println!(
                "\n请 {} 就诊（级别 {:?}，证件号 {}）。",
                patient.name, visit.risk, patient.document_id
            ),
            None => println!("\n请患者 {} 就诊（级别 {:?}）。", visit.patient_id, visit.risk),
        }
    }
}

/// 读取一行输入
fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// 读取是/否答案，无法识别时重新提问；输入流结束时报错返回
fn prompt_yes_no(label: &str) -> Result<bool> {
    loop {
        let answer = prompt(&format!("{} [y/n]", label))?;
        match parse_yes_no(&answer) {
            Some(value) => return Ok(value),
            None => println!("请输入 y 或 n。"),
        }
    }
}

/// 读取一行并去除首尾空白
///
/// `read_line` 返回 0 字节表示输入流已结束，此时报 `UnexpectedEof`
/// 错误，调用方据此终止循环，空行答案则照常返回空字符串。
fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String> {
    let mut buffer = String::new();
    let bytes = reader.read_line(&mut buffer)?;
    if bytes == 0 {
        return Err(TriageError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "输入流已结束",
        )));
    }
    Ok(buffer.trim().to_string())
}

/// 解析是/否答案，无法识别时返回 `None`
fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" | "是" => Some(true),
        "n" | "no" | "否" => Some(false),
        _ => None,
    }
}

/// 判断错误是否为输入流结束
fn is_eof(error: &TriageError) -> bool {
    matches!(error, TriageError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

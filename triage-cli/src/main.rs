//! 急诊分诊终端主程序

use clap::Parser;
use tracing::info;
use triage_workflow::{InMemoryPatientDirectory, IntakeService};

mod terminal;

use terminal::TerminalClient;

/// 分诊终端命令行参数
#[derive(Parser, Debug)]
#[command(name = "triage-cli")]
#[command(about = "急诊预检分诊终端 (Emergency Room Triage)")]
struct Args {
    /// 日志级别
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .init();

    info!("启动急诊分诊终端...");

    let directory = InMemoryPatientDirectory::new();
    let service = IntakeService::new(directory);

    let mut client = TerminalClient::new(service);
    client.run()?;

    Ok(())
}

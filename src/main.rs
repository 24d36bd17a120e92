use std::process::ExitCode;

use clap::Parser;
use hvac_sizing_toolbox::{app, config, ui_cli::Cli};
use tracing::Level;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(units) = cli.units {
        cfg.unit_system = units;
    }
    app::run(cli, &cfg)
}

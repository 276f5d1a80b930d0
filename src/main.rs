use std::io;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use academic_records::config::AppConfig;
use academic_records::console::Console;
use academic_records::runtime::lifetime;

fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 初始化日志（写入文件，标准输出留给控制台界面）
    let file_appender = tracing_appender::rolling::never(&config.app.log_dir, "academic-records.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(false);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = match lifetime::startup::prepare_startup(config) {
        Ok(startup) => startup,
        Err(e) => {
            error!("Startup failed: {}", e);
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            drop(guard);
            std::process::exit(1);
        }
    };
    let storage = startup.storage.clone();

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), startup.records, storage.clone())
        .with_title(config.app.system_name.clone())
        .with_autosave(config.storage.autosave);

    if let Err(e) = console.run() {
        error!("Console terminated with an error: {}", e);
        eprintln!("{}", e.format_simple());
    }

    // 退出前保存全部数据
    let records = console.into_records();
    if !lifetime::shutdown::persist_all(&records, storage.as_ref()) {
        eprintln!("Erro: não foi possível salvar todos os dados");
        drop(guard);
        std::process::exit(1);
    }
}

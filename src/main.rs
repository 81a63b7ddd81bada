use clap::Parser;
use readme_assembler::utils::{logger, validation::Validate};
use readme_assembler::{
    AssemblerConfig, CliArgs, LocalStorage, LogFormat, ReadmeError, ReadmePipeline, ReportEngine,
    ShellCommandRunner, TomlConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    match args.log_format {
        LogFormat::Text => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, exit code {})",
            e,
            e.category(),
            e.exit_code()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(args: &CliArgs) -> Result<(), ReadmeError> {
    tracing::info!("Starting readme-assembler");

    // 載入 TOML 配置 (選用)
    let file_config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let config = AssemblerConfig::resolve(args, file_config.as_ref());
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    config.validate()?;

    let pipeline = ReadmePipeline::new(
        LocalStorage::new(".".to_string()),
        ShellCommandRunner::new(),
        config,
    );
    let engine = ReportEngine::new(pipeline);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the output file is left untouched");
        let rendered = engine.render_only().await?;
        print!("{}", rendered.document);
        return Ok(());
    }

    let output_path = engine.run().await?;
    tracing::info!("✅ README assembled: {}", output_path);
    Ok(())
}

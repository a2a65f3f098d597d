use clap::Parser;
use ticket_extract::{cli, config, error, processor};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TicketError};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Run { folder, output } => {
            println!("🎫 ticket-extract - 一括変換\n");

            let (input_dir, output) = config.resolve(folder, output);
            println!("[1/2] CSVをスキャン中... ({})", input_dir.display());
            let summary = processor::run(&input_dir, &output)?;

            if summary.files_failed > 0 {
                println!("\n⚠ {}件のファイルをスキップしました", summary.files_failed);
            }
            println!("\n[2/2] ✅ 完了");
        }

        Commands::Inspect { file } => {
            if !file.exists() {
                return Err(TicketError::FileNotFound(file.display().to_string()));
            }

            let record = processor::process_file(&file)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Commands::Config { set_input_dir, set_output, show } => {
            let mut config = config;
            let changed = set_input_dir.is_some() || set_output.is_some();

            if let Some(dir) = set_input_dir {
                config.input_dir = dir;
            }
            if let Some(path) = set_output {
                config.output = path;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  入力フォルダ: {}", config.input_dir.display());
                println!("  出力ファイル: {}", config.output.display());
            }
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ticket-extract")]
#[command(about = "CSVエクスポートからチケット情報を抽出して顧客別JSONを生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内のCSVを一括変換してJSONを出力
    Run {
        /// CSVフォルダのパス（省略時は設定値、既定: TKT）
        folder: Option<PathBuf>,

        /// 出力JSONファイル（省略時は設定値、既定: ticket_data.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// CSVファイル1つを抽出して結果を表示
    Inspect {
        /// CSVファイルのパス
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の入力フォルダを設定
        #[arg(long)]
        set_input_dir: Option<PathBuf>,

        /// 既定の出力ファイルを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["ticket-extract", "run"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Run { folder, output } => {
                assert!(folder.is_none());
                assert!(output.is_none());
            }
            _ => panic!("Expected Run"),
        }
    }

    #[test]
    fn test_parse_run_with_args() {
        let cli = Cli::try_parse_from(["ticket-extract", "-v", "run", "exports", "-o", "out.json"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Run { folder, output } => {
                assert_eq!(folder, Some(PathBuf::from("exports")));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("Expected Run"),
        }
    }

    #[test]
    fn test_parse_inspect_requires_file() {
        assert!(Cli::try_parse_from(["ticket-extract", "inspect"]).is_err());
        assert!(Cli::try_parse_from(["ticket-extract", "inspect", "a.csv"]).is_ok());
    }
}

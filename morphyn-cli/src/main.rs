//! Morphyn CLI - command line highlighter for Morphyn source files.
//! Morphyn CLI - Morphyn 源文件的命令行高亮工具。

mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "morphyn")]
#[command(author, version, about = "Morphyn - syntax highlighting for Morphyn source files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a file. / 打印文件的 token 流。
    Tokens {
        /// The file to tokenize, or `-` for stdin. / 要切分的文件，`-` 表示标准输入。
        file: String,

        /// Lexer alias, when the file name is not recognized. / 文件名无法识别时使用的词法分析器别名。
        #[arg(long, short = 'l')]
        lexer: Option<String>,

        /// Print tokens as JSON. / 以 JSON 格式打印 token。
        #[arg(long)]
        json: bool,
    },

    /// Highlight a file. / 高亮文件。
    Highlight {
        /// The file to highlight, or `-` for stdin. / 要高亮的文件，`-` 表示标准输入。
        file: String,

        /// Lexer alias, when the file name is not recognized. / 文件名无法识别时使用的词法分析器别名。
        #[arg(long, short = 'l')]
        lexer: Option<String>,

        /// Output format (terminal, html, json). / 输出格式（terminal、html、json）。
        #[arg(long, short = 'f', default_value = "terminal")]
        format: String,

        /// JSON theme file. / JSON 主题文件。
        #[arg(long, short = 't')]
        theme: Option<String>,

        /// Emit a complete HTML document. / 输出完整的 HTML 文档。
        #[arg(long)]
        full: bool,

        /// Number lines in HTML output. / 在 HTML 输出中为行编号。
        #[arg(long)]
        line_numbers: bool,
    },

    /// Report malformed constructs in a file. / 报告文件中的畸形结构。
    Check {
        /// The file to check, or `-` for stdin. / 要检查的文件，`-` 表示标准输入。
        file: String,

        /// Lexer alias, when the file name is not recognized. / 文件名无法识别时使用的词法分析器别名。
        #[arg(long, short = 'l')]
        lexer: Option<String>,
    },

    /// Show lexer information. / 显示词法分析器信息。
    Info,
}

/// Install the tracing subscriber.
/// 安装 tracing 订阅器。
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` enables debug output.
/// `RUST_LOG` 优先；否则 `--verbose` 启用调试输出。
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    output::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Tokens { file, lexer, json } => {
            commands::tokens::run(&file, lexer.as_deref(), json)
        }
        Commands::Highlight {
            file,
            lexer,
            format,
            theme,
            full,
            line_numbers,
        } => commands::highlight::run(
            &file,
            lexer.as_deref(),
            &commands::highlight::Options {
                format,
                theme,
                full,
                line_numbers,
            },
        ),
        Commands::Check { file, lexer } => commands::check::run(&file, lexer.as_deref()),
        Commands::Info => commands::info::run(),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}

//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Status messages for the CLI. Highlighted output itself goes to stdout
//! untouched; these helpers only decorate messages about it.
//! CLI 的状态消息。高亮输出本身原样写入标准输出；这些函数只修饰相关消息。

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress success and info messages.
/// 抑制成功和信息消息。
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stderr is a terminal that should receive color escapes.
/// 标准错误输出是否为应接收颜色转义的终端。
pub fn stderr_color() -> bool {
    std::io::stderr().is_terminal()
}

fn paint(code: &str, text: &str) -> String {
    if stderr_color() {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    if !is_quiet() {
        eprintln!("{}", paint("32", msg));
    }
}

/// Print a warning message in yellow.
/// 以黄色打印警告消息。
pub fn warning(msg: &str) {
    eprintln!("{} {msg}", paint("33", "warning:"));
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("{} {msg}", paint("31", "error:"));
}

//! Diagnostic reporting for the Morphyn highlighter.
//! Morphyn 高亮器的诊断报告。
//!
//! The tokenizer never fails; diagnostics here describe malformed input that
//! was still tokenized, and are rendered with ariadne.
//! 词法分析器从不失败；这里的诊断描述仍被切分的畸形输入，并使用 ariadne 渲染。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, Label};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};
use std::io::{self, Write};
use std::ops::Range;

/// Render a diagnostic into `out`, with or without color escapes.
/// 将诊断信息渲染到 `out`，可选择是否使用颜色转义。
pub fn emit<W: Write>(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    color: bool,
    out: W,
) -> io::Result<()> {
    build_report(filename, diagnostic, color).write((filename, Source::from(source)), out)
}

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Warning, filename, diagnostic.span.range().start)
        .with_config(Config::default().with_color(color))
        .with_code(diagnostic.code.as_str())
        .with_message(&diagnostic.message);

    for label in &diagnostic.labels {
        report = report.with_label(
            AriadneLabel::new((filename, label.span.range()))
                .with_message(&label.message)
                .with_color(colors.next()),
        );
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

//! Terminal output for zocli handlers.
//!
//! Every line goes through [`emit`], which decides between a typed JSON line
//! (`--json`), nothing (`--quiet`), or the human rendering. Whole-command JSON
//! documents are printed with [`json_output`].

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Output mode chosen by the global flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Human lines are dropped in quiet mode unless they carry the result.
    const fn shows(self, essential: bool) -> bool {
        essential || !self.quiet
    }
}

static MODE: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn mode() -> OutputConfig {
    let cell = MODE.get_or_init(RwLock::default);
    *cell.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    let cell = MODE.get_or_init(RwLock::default);
    *cell.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
}

#[must_use]
pub fn is_json() -> bool {
    mode().json
}

#[must_use]
pub fn is_quiet() -> bool {
    mode().quiet
}

/// True when a handler has nothing to print: quiet human mode.
#[must_use]
pub fn is_silent() -> bool {
    let mode = mode();
    !mode.json && mode.quiet
}

/// How a line is routed outside JSON mode.
#[derive(Clone, Copy)]
enum Route {
    Stdout,
    /// Printed even with `--quiet`.
    Result,
    Stderr,
}

fn emit(kind: &str, payload: Value, route: Route, human: impl FnOnce() -> String) {
    let mode = mode();
    if mode.json {
        let line = json!({ "type": kind, "payload": payload });
        match route {
            Route::Stderr if kind == "error" => eprintln!("{line}"),
            _ => println!("{line}"),
        }
        return;
    }
    match route {
        Route::Stdout if mode.shows(false) => println!("{}", human()),
        Route::Result => println!("{}", human()),
        Route::Stderr => eprintln!("{}", human()),
        Route::Stdout => {}
    }
}

/// Print the app name and version.
pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "zocli", "version": version }),
        Route::Stdout,
        || format!("{} {}", "zocli".bold(), version.dimmed()),
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        Route::Stdout,
        || format!("  {:<14} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), Route::Result, || {
        format!("  {} {message}", "✓".green())
    });
}

pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), Route::Stderr, || {
        format!("  {} {message}", "⚠".yellow())
    });
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    emit("error", json!({ "message": message }), Route::Stderr, || {
        format!("  {} {message}", "×".red())
    });
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), Route::Stdout, || {
        format!("\n{}", title.bold())
    });
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), Route::Stdout, || {
        format!("  {}", message.dimmed())
    });
}

pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), Route::Stdout, || {
        format!("  {}: {}", "hint".cyan().dimmed(), message.dimmed())
    });
}

/// Print a rendered block (usually a table), indented.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), Route::Stdout, || {
        indent(content)
    });
}

fn indent(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a whole-command JSON document.
pub fn json_output(value: Value) {
    println!("{value}");
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner; hidden in JSON or quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let mode = mode();
    let pb = if mode.json || mode.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template("  {spinner:.cyan} {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };
    pb.set_message(message.to_string());
    pb
}

pub fn spinner_success(pb: &ProgressBar, message: &str) {
    if pb.is_hidden() {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{} {message}", "✓".green()));
    }
}

pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    if pb.is_hidden() {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{} {message}", "×".red()));
    }
}

fn paint(value: impl Display, colour: fn(&str) -> String) -> String {
    let value = value.to_string();
    if is_json() {
        value
    } else {
        colour(&value)
    }
}

/// Good news (falling prices) in green.
pub fn positive(value: impl Display) -> String {
    paint(value, |v| v.green().to_string())
}

/// Bad news (rising prices) in red.
pub fn negative(value: impl Display) -> String {
    paint(value, |v| v.red().to_string())
}

pub fn highlight(value: impl Display) -> String {
    paint(value, |v| v.cyan().to_string())
}

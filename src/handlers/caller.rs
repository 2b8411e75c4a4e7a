//! Handlers annotating records with their call site

use crate::core::{CallSite, CallerTag, Handler, Record, Result, Value};
use std::backtrace::Backtrace;
use std::path::MAIN_SEPARATOR;

/// Attribute key used by [`CallerFuncHandler`]
pub const FN_KEY: &str = "fn";

/// Attribute key used by [`CallerStackHandler`]
pub const STACK_KEY: &str = "stack";

/// Find the caller tag, scanning from the end where it is usually appended
pub fn find_caller(attrs: &[Value]) -> Option<&CallerTag> {
    attrs.iter().rev().find_map(|value| match value {
        Value::Caller(tag) => Some(tag),
        _ => None,
    })
}

/// Appends a caller tag `file:line` to the record.
///
/// With `short` the file is reduced to its parent directory and base name
/// (`handlers/caller.rs:42`), otherwise the path is kept as compiled in.
/// Records that already carry a caller tag pass through unchanged.
pub struct CallerFileHandler<H> {
    inner: H,
    short: bool,
}

impl<H: Handler> CallerFileHandler<H> {
    pub fn new(inner: H, short: bool) -> Self {
        Self { inner, short }
    }
}

impl<H: Handler> Handler for CallerFileHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        if find_caller(&record.attrs).is_none() {
            let file = if self.short {
                short_filename(record.call.file)
            } else {
                record.call.file
            };
            let tag = CallerTag(format!("{}:{}", file, record.call.line));
            record.push_attr(tag);
        }
        self.inner.log(record)
    }
}

/// `parent/base` of a path, or the path itself when it has no separator
pub fn short_filename(path: &str) -> &str {
    let is_sep = |c: char| c == '/' || c == MAIN_SEPARATOR;
    let Some(last) = path.rfind(is_sep) else {
        return path;
    };
    match path[..last].rfind(is_sep) {
        Some(prev) => &path[prev + 1..],
        None => path,
    }
}

/// Appends `"fn", <function name>` to the record.
///
/// The name comes from the call site when the logging macro captured it,
/// otherwise it is resolved from a backtrace; `???` when neither works.
pub struct CallerFuncHandler<H> {
    inner: H,
}

impl<H: Handler> CallerFuncHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for CallerFuncHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        if record.find_pair(FN_KEY).is_none() {
            let name = match record.call.function {
                Some(function) => function.to_string(),
                None => resolve_function(&record.call).unwrap_or_else(|| "???".to_string()),
            };
            record.push_pair(FN_KEY, name);
        }
        self.inner.log(record)
    }
}

/// How each frame of a captured stack is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackFormat {
    /// `file:line`
    #[default]
    Location,
    /// `module::function`
    Function,
    /// `module::function@file:line`
    Full,
}

/// Appends `"stack", "[frame frame ...]"` to the record, most recent call
/// first, starting at the log call site.
pub struct CallerStackHandler<H> {
    inner: H,
    format: StackFormat,
}

impl<H: Handler> CallerStackHandler<H> {
    pub fn new(format: StackFormat, inner: H) -> Self {
        Self { inner, format }
    }
}

impl<H: Handler> Handler for CallerStackHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        if record.find_pair(STACK_KEY).is_none() {
            let frames = capture_frames(&record.call);
            if !frames.is_empty() {
                let rendered: Vec<String> = frames.iter().map(|f| f.render(self.format)).collect();
                record.push_pair(STACK_KEY, format!("[{}]", rendered.join(" ")));
            }
        }
        self.inner.log(record)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    function: String,
    location: Option<String>,
}

impl Frame {
    fn render(&self, format: StackFormat) -> String {
        match (format, &self.location) {
            (StackFormat::Location, Some(location)) => location.clone(),
            (StackFormat::Full, Some(location)) => format!("{}@{}", self.function, location),
            _ => self.function.clone(),
        }
    }

    fn is_runtime(&self) -> bool {
        const RUNTIME: [&str; 6] = ["std::", "core::", "alloc::", "<alloc::", "<core::", "__rust"];
        RUNTIME.iter().any(|prefix| self.function.starts_with(prefix))
    }

    fn is_at(&self, call: &CallSite) -> bool {
        let suffix = format!("{}:{}", call.file, call.line);
        self.location
            .as_deref()
            .is_some_and(|location| location.ends_with(&suffix))
    }
}

/// Parse the `Display` output of a backtrace into frames.
///
/// ```text
///    3: app::handler::serve
///              at ./src/handler.rs:42:9
/// ```
fn parse_frames(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for line in text.lines() {
        let line = line.trim_start();
        if let Some(at) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut().filter(|f| f.location.is_none()) {
                let location = at.rsplit_once(':').map_or(at, |(rest, _column)| rest);
                frame.location = Some(location.trim_start_matches("./").to_string());
            }
            continue;
        }
        if let Some((index, function)) = line.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(Frame {
                    function: function.to_string(),
                    location: None,
                });
            }
        }
    }
    frames
}

/// Frames from the log call site outwards, without runtime frames
fn capture_frames(call: &CallSite) -> Vec<Frame> {
    let frames = parse_frames(&Backtrace::force_capture().to_string());
    let start = frames.iter().position(|f| f.is_at(call)).unwrap_or(0);
    frames
        .into_iter()
        .skip(start)
        .filter(|f| !f.is_runtime())
        .collect()
}

fn resolve_function(call: &CallSite) -> Option<String> {
    parse_frames(&Backtrace::force_capture().to_string())
        .into_iter()
        .find(|f| f.is_at(call))
        .map(|f| f.function)
}

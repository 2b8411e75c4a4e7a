//! Attribute values carried by a record
//!
//! Attributes are a flat list of [`Value`]s read as alternating keys and
//! values. Four variants describe themselves and occupy a single slot:
//! - [`Value::Error`]: an implicit error, printed in its own section
//! - [`Value::Dump`]: an object printed as a verbose structural dump
//! - [`Value::Standalone`]: a titled value printed on its own line
//! - [`Value::Caller`]: the caller tag added by `CallerFileHandler`

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

pub type SharedError = Arc<dyn StdError + Send + Sync>;

#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Time(DateTime<Utc>),
    /// Anything rendered through its `Display` implementation
    Display(Arc<dyn fmt::Display + Send + Sync>),
    Error(SharedError),
    /// Anything rendered through its `Debug` implementation
    Debug(Arc<dyn fmt::Debug + Send + Sync>),
    Dump(Dump),
    Standalone(Standalone),
    Caller(CallerTag),
}

impl Value {
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Display(Arc::new(value))
    }

    pub fn debug<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Value::Debug(Arc::new(value))
    }

    /// Wrap an error so that it is recognized as an implicit attribute
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Value::Error(Arc::new(err))
    }

    /// Verbose dump of `object` under the default `spew` banner
    pub fn dump<T>(object: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Value::Dump(Dump {
            title: None,
            object: Arc::new(object),
        })
    }

    /// Verbose dump of `object` under a custom banner
    pub fn dump_titled<T>(title: impl Into<String>, object: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Value::Dump(Dump {
            title: Some(title.into()),
            object: Arc::new(object),
        })
    }

    /// `value` printed on its own line as `* title: value`
    pub fn standalone(title: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Standalone(Standalone {
            title: title.into(),
            value: Box::new(value.into()),
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Slots that stand alone in an attribute list instead of starting a pair
    pub fn is_single_slot(&self) -> bool {
        matches!(
            self,
            Value::Nil | Value::Error(_) | Value::Dump(_) | Value::Standalone(_) | Value::Caller(_)
        )
    }
}

/// Object wrapped for a verbose structural dump
#[derive(Clone)]
pub struct Dump {
    pub title: Option<String>,
    pub object: Arc<dyn fmt::Debug + Send + Sync>,
}

impl Dump {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("spew")
    }
}

/// Value printed on a separate line
#[derive(Clone, Debug, PartialEq)]
pub struct Standalone {
    pub title: String,
    pub value: Box<Value>,
}

/// Call site location appended by `CallerFileHandler`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerTag(pub String);

impl fmt::Display for CallerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error raised by the infrastructure rather than by a user request.
///
/// The terminal format prints it under an `ERROR (infrastructure)` banner
/// followed by the stack trace captured at construction.
#[derive(Debug)]
pub struct InfrastructureError {
    source: Box<dyn StdError + Send + Sync>,
    backtrace: Backtrace,
}

impl InfrastructureError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
            backtrace: Backtrace::force_capture(),
        }
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for InfrastructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl StdError for InfrastructureError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<InfrastructureError> for Value {
    fn from(err: InfrastructureError) -> Self {
        Value::error(err)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Value::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Value::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            Value::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
            Value::Debug(d) => f.debug_tuple("Debug").field(d).finish(),
            Value::Dump(d) => f
                .debug_struct("Dump")
                .field("title", &d.title)
                .field("object", &d.object)
                .finish(),
            Value::Standalone(s) => fmt::Debug::fmt(s, f),
            Value::Caller(c) => f.debug_tuple("Caller").field(&c.0).finish(),
        }
    }
}

fn same_arc<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Display(a), Value::Display(b)) => same_arc(a, b),
            (Value::Error(a), Value::Error(b)) => same_arc(a, b),
            (Value::Debug(a), Value::Debug(b)) => same_arc(a, b),
            (Value::Dump(a), Value::Dump(b)) => a.title == b.title && same_arc(&a.object, &b.object),
            (Value::Standalone(a), Value::Standalone(b)) => a == b,
            (Value::Caller(a), Value::Caller(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Uint(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Time(v)
    }
}

impl From<LogLevel> for Value {
    fn from(v: LogLevel) -> Self {
        Value::display(v)
    }
}

impl From<CallerTag> for Value {
    fn from(v: CallerTag) -> Self {
        Value::Caller(v)
    }
}

impl From<SharedError> for Value {
    fn from(v: SharedError) -> Self {
        Value::Error(v)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Value {
    fn from(v: Box<dyn StdError + Send + Sync>) -> Self {
        Value::Error(Arc::from(v))
    }
}

impl From<std::io::Error> for Value {
    fn from(v: std::io::Error) -> Self {
        Value::error(v)
    }
}

impl From<super::error::LoggerError> for Value {
    fn from(v: super::error::LoggerError) -> Self {
        Value::error(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

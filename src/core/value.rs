use std::collections::BTreeMap;
use std::fmt;

/// Default class for JSON objects that do not name one
pub const DEFAULT_CLASS: &str = "stdClass";

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Array(Vec<Value>),
    Object(ObjectValue),
}

/// Runtime discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Integer,
    Float,
    Text,
    Boolean,
    Array,
    Object,
}

/// An instance of a named class: the class name plus its attributes.
///
/// Class identity is the exact name. Two objects are the same "class" only
/// when their names are byte-equal; there is no notion of subclassing.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    class: String,
    attributes: BTreeMap<String, Value>,
}

impl ObjectValue {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Class name for object values, `None` for everything else
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Object(obj) => Some(obj.class()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "string",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                if a.is_nan() && b.is_nan() {
                    return true;
                }
                a == b
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    if *fl > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{}", fl)
                }
            }
            Self::Text(s) => write!(f, "{}", s),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Array(items) => write!(f, "array({})", items.len()),
            Self::Object(obj) => write!(f, "{}({})", obj.class(), obj.attributes().len()),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<ObjectValue> for Value {
    fn from(obj: ObjectValue) -> Self {
        Self::Object(obj)
    }
}

/// Declared kind of every value in a table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Float,
    Text,
    Boolean,
    Array,
    /// Instances of exactly this class
    Object(String),
}

impl DataType {
    pub fn object(class: impl Into<String>) -> Self {
        Self::Object(class.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer => ValueKind::Integer,
            Self::Float => ValueKind::Float,
            Self::Text => ValueKind::Text,
            Self::Boolean => ValueKind::Boolean,
            Self::Array => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Object(class) => Some(class),
            _ => None,
        }
    }

    /// Kind and class both match. No coercion between numeric kinds.
    pub fn is_compatible(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Object(class), Value::Object(obj)) => obj.class() == class,
            _ => self.kind() == value.kind(),
        }
    }

    /// Parses the lowercase kind names used in documents
    pub fn parse(kind: &str, class: Option<&str>) -> Option<Self> {
        let data_type = match kind.to_ascii_lowercase().as_str() {
            "integer" | "int" => Self::Integer,
            "float" | "double" => Self::Float,
            "string" | "text" => Self::Text,
            "boolean" | "bool" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object(class?.to_string()),
            _ => return None,
        };
        Some(data_type)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(class) => write!(f, "object::{}", class),
            other => f.write_str(other.kind().name()),
        }
    }
}

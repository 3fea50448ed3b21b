//! Selection mutations described as data.
//!
//! Used to drive a [`Selection`](crate::Selection) from command-line
//! arguments or JSON batches. The textual form is `name` or `name=argument`:
//!
//! ```text
//! hide
//! show
//! add-class=bar
//! remove-class=foobar
//! text=Hello World
//! add-child=h1
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One chainable mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "camelCase")]
pub enum Operation {
    Hide,
    Show,
    AddClass(String),
    RemoveClass(String),
    Text(String),
    AddChild(String),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Hide => "hide",
            Operation::Show => "show",
            Operation::AddClass(_) => "add-class",
            Operation::RemoveClass(_) => "remove-class",
            Operation::Text(_) => "text",
            Operation::AddChild(_) => "add-child",
        }
    }

    fn argument(&self) -> Option<&str> {
        match self {
            Operation::Hide | Operation::Show => None,
            Operation::AddClass(v)
            | Operation::RemoveClass(v)
            | Operation::Text(v)
            | Operation::AddChild(v) => Some(v),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidOperation {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (name, argument) = match s.split_once('=') {
            Some((name, argument)) => (name.trim(), Some(argument)),
            None => (s.trim(), None),
        };

        let required = || argument.ok_or_else(|| invalid("missing '=' argument"));
        // Class and tag names cannot be blank; text content can.
        let non_blank = || {
            let value = required()?.trim();
            if value.is_empty() {
                Err(invalid("argument must not be empty"))
            } else {
                Ok(value.to_string())
            }
        };

        let op = match name.to_ascii_lowercase().as_str() {
            "hide" | "show" if argument.is_some() => return Err(invalid("takes no argument")),
            "hide" => Operation::Hide,
            "show" => Operation::Show,
            "add-class" | "addclassname" => Operation::AddClass(non_blank()?),
            "remove-class" | "removeclassname" => Operation::RemoveClass(non_blank()?),
            "text" => Operation::Text(required()?.to_string()),
            "add-child" | "addchild" => Operation::AddChild(non_blank()?),
            _ => return Err(invalid("unknown operation")),
        };
        Ok(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument() {
            Some(argument) => write!(f, "{}={}", self.name(), argument),
            None => f.write_str(self.name()),
        }
    }
}

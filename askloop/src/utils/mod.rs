pub mod ask;
pub use ask::{Ask, Transform, Validator};

pub mod budget;
pub use budget::{Budget, GiveUp, Session};

pub mod inputs;
pub use inputs::MenuStyle;

pub mod reader;
pub use reader::{Echo, LineReader, ScriptedReader, StdinReader};

pub mod sanitize;
pub use sanitize::{DesiredType, Sanitize, ValidationFailure};

pub mod terminal;
pub use terminal::Terminal;

cfg_if::cfg_if! {
    if #[cfg(feature = "tokio-dep")] {
        mod nonblocking;
    }
}

pub mod shell;

pub use shell::{Session, ShellCommand};

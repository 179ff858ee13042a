mod args;
mod config;

pub use args::{Args, Command, GenerateArgs, InitArgs, ServeArgs};
pub use config::{ClassifierConfig, ReportConfig};

pub mod config;
pub mod injector;
pub mod pipeline;
pub mod task;

pub use config::Config;
pub use injector::{InjectError, inject};
pub use pipeline::{InjectionReport, PipelineError, run};
pub use task::{InjectionTask, TERMINAL_TASKS};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::injector::{InjectError, inject};
use crate::task::{BASE_DOCUMENT_LABEL, InjectionTask};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unable to find the {label} at {}. No changes were made.", path.display())]
    MissingDependency { label: String, path: PathBuf },
    #[error("failed to read {}. No changes were made.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to inject the {label}. No changes were made.")]
    Inject {
        label: String,
        #[source]
        source: InjectError,
    },
    #[error("failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedAsset {
    pub label: &'static str,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct InjectionReport {
    pub output_path: PathBuf,
    pub assets: Vec<InjectedAsset>,
}

/// Embeds every task's file into the base document and overwrites it.
///
/// All inputs are checked and read before anything is written; any
/// failure leaves the base document untouched.
pub fn run(config: &Config, tasks: &[InjectionTask]) -> Result<InjectionReport, PipelineError> {
    info!("Starting to inject the dependencies.");

    let document = read_required(BASE_DOCUMENT_LABEL, &config.html_path)?;

    let mut sources = Vec::with_capacity(tasks.len());
    for task in tasks {
        let path = task.source_path(&config.deps_dir);
        debug!(label = task.label, path = %path.display(), "resolved dependency");
        sources.push((task, read_required(task.label, &path)?));
    }

    let document = inject_all(
        document,
        sources.iter().map(|(task, payload)| (*task, payload.as_str())),
    )?;

    fs::write(&config.html_path, &document).map_err(|source| PipelineError::WriteFailure {
        path: config.html_path.clone(),
        source,
    })?;

    let assets = sources
        .iter()
        .map(|(task, payload)| InjectedAsset {
            label: task.label,
            bytes: payload.len(),
        })
        .collect();

    info!(path = %config.html_path.display(), "Dependencies injected.");
    Ok(InjectionReport {
        output_path: config.html_path.clone(),
        assets,
    })
}

/// Folds each payload into the document in order.
pub fn inject_all<'a, I>(document: String, sources: I) -> Result<String, PipelineError>
where
    I: IntoIterator<Item = (&'a InjectionTask, &'a str)>,
{
    sources
        .into_iter()
        .try_fold(document, |current, (task, payload)| {
            let next = inject(&current, payload, task.start_marker, task.end_marker).map_err(
                |source| PipelineError::Inject {
                    label: task.label.to_string(),
                    source,
                },
            )?;
            info!(label = task.label, bytes = payload.len(), "injected");
            Ok(next)
        })
}

fn read_required(label: &str, path: &Path) -> Result<String, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::MissingDependency {
            label: label.to_string(),
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TERMINAL_TASKS;
    use tempfile::TempDir;

    const BASE: &str = "<style>\n    /* term-css-start */\n    /* term-css-end */\n</style>\n\
<script>\n    /* term-js-start */\n    /* term-js-end */\n</script>\n\
<script>\n    /* term-attach-start */\n    /* term-attach-end */\n</script>\n\
<script>\n    /* term-fit-start */\n    /* term-fit-end */\n</script>\n";

    #[test]
    fn inject_all_applies_tasks_in_order() {
        let payloads = ["css", "js", "attach", "fit"];
        let out = inject_all(BASE.to_string(), TERMINAL_TASKS.iter().zip(payloads)).unwrap();

        let positions: Vec<usize> = payloads
            .iter()
            .map(|p| out.find(&format!("\n{p}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(out.contains("/* term-fit-start */\nfit\n    /* term-fit-end */"));
    }

    #[test]
    fn inject_all_names_failing_task() {
        let base = BASE.replace("/* term-attach-end */", "");
        let err = inject_all(base, TERMINAL_TASKS.iter().zip(["a", "b", "c", "d"])).unwrap_err();
        match err {
            PipelineError::Inject { label, source } => {
                assert_eq!(label, "xterm attach addon file");
                assert_eq!(
                    source,
                    InjectError::MissingMarker {
                        marker: "/* term-attach-end */".into()
                    }
                );
            }
            other => panic!("expected inject error, got {other:?}"),
        }
    }

    #[test]
    fn missing_base_document_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            html_path: dir.path().join("term.html"),
            deps_dir: dir.path().join("node_modules"),
            ..Config::default()
        };
        let err = run(&config, &TERMINAL_TASKS).unwrap_err();
        match err {
            PipelineError::MissingDependency { label, .. } => assert_eq!(label, "term HTML file"),
            other => panic!("expected missing dependency, got {other:?}"),
        }
        assert!(!config.html_path.exists());
    }

    #[test]
    fn missing_dependency_message_names_file() {
        let err = PipelineError::MissingDependency {
            label: "xterm CSS file".into(),
            path: PathBuf::from("node_modules/xterm/css/xterm.css"),
        };
        let message = err.to_string();
        assert!(message.contains("xterm CSS file"));
        assert!(message.ends_with("No changes were made."));
    }
}

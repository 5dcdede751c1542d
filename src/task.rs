use std::path::{Path, PathBuf};

/// One file to embed and the marker pair delimiting where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectionTask {
    pub label: &'static str,
    pub path: &'static str,
    pub start_marker: &'static str,
    pub end_marker: &'static str,
}

impl InjectionTask {
    pub fn source_path(&self, deps_dir: &Path) -> PathBuf {
        deps_dir.join(self.path)
    }
}

/// Label used when the base document itself is missing.
pub const BASE_DOCUMENT_LABEL: &str = "term HTML file";

/// The terminal emulator assets, in the order they are applied.
pub const TERMINAL_TASKS: [InjectionTask; 4] = [
    InjectionTask {
        label: "xterm CSS file",
        path: "xterm/css/xterm.css",
        start_marker: "/* term-css-start */",
        end_marker: "/* term-css-end */",
    },
    InjectionTask {
        label: "xterm JS file",
        path: "xterm/lib/xterm.js",
        start_marker: "/* term-js-start */",
        end_marker: "/* term-js-end */",
    },
    InjectionTask {
        label: "xterm attach addon file",
        path: "xterm-addon-attach/lib/xterm-addon-attach.js",
        start_marker: "/* term-attach-start */",
        end_marker: "/* term-attach-end */",
    },
    InjectionTask {
        label: "xterm fit addon file",
        path: "xterm-addon-fit/lib/xterm-addon-fit.js",
        start_marker: "/* term-fit-start */",
        end_marker: "/* term-fit-end */",
    },
];

// src/engine/config.rs

use derive_builder::Builder;
use std::path::PathBuf;

/// Script fragment inlined into the page.
pub const SCRIPT_FILE: &str = "webgl-canvas.js";
/// HTML template holding the placeholder.
pub const TEMPLATE_FILE: &str = "test.template.html";
/// Generated page, overwritten on every render.
pub const OUTPUT_FILE: &str = "test.html";
/// Literal marker replaced by the script fragment.
pub const PLACEHOLDER: &str = "{}";

/// Where the render step reads from and writes to.
///
/// Relative paths are interpreted against the current working directory.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct TestPageConfig {
    #[builder(default = "PathBuf::from(SCRIPT_FILE)")]
    pub script_path: PathBuf,

    #[builder(default = "PathBuf::from(TEMPLATE_FILE)")]
    pub template_path: PathBuf,

    #[builder(default = "PathBuf::from(OUTPUT_FILE)")]
    pub output_path: PathBuf,

    #[builder(default = "PLACEHOLDER.to_string()")]
    pub placeholder: String,
}

impl TestPageConfigBuilder {
    pub fn build(&self) -> Result<TestPageConfig, TestPageConfigBuilderError> {
        self.build_internal()
    }
}

impl Default for TestPageConfig {
    fn default() -> Self {
        Self {
            script_path: PathBuf::from(SCRIPT_FILE),
            template_path: PathBuf::from(TEMPLATE_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
            placeholder: PLACEHOLDER.to_string(),
        }
    }
}

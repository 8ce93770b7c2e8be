// src/ui/cli.rs

use clap::Parser;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
#[command(infer_long_args = true, args_override_self = true)]
pub struct Cli {
    /// Inline webgl-canvas.js into test.template.html and write test.html
    #[clap(long = "test-render", visible_alias = "tr")]
    pub test_render: bool,

    /// Open test.html in the default browser
    #[clap(long = "test-browser", visible_alias = "tb")]
    pub test_browser: bool,
}

impl Cli {
    /// True when neither step was requested.
    pub fn is_noop(&self) -> bool {
        !self.test_render && !self.test_browser
    }
}

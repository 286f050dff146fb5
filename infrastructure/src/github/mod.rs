//! GitHub Actions runner integration
//!
//! The runner exports `GITHUB_OUTPUT`, a path to a file where a step
//! appends `key=value` lines. After the step ends, each line becomes
//! `steps.<id>.outputs.<key>`.

mod output_file;

pub use output_file::{GITHUB_OUTPUT_VAR, GithubOutputFile};

//! Release discovery: version ordering, asset matching, resolution, and
//! upgrade advice.

pub mod assets;
pub mod brew;
pub mod github;
pub mod resolver;
pub mod source;
pub mod upgrade;
pub mod version;

pub use github::GithubSource;
pub use source::{Asset, Release, ReleaseSource};

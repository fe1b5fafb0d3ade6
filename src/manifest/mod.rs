//! Project manifest handling

mod package_json;

pub use package_json::{Engines, PackageJson};

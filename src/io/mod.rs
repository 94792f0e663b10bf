use std::path::Path;

use crate::problem::dispatch::DispatchInstance;

pub mod route_writer;
pub mod snapshot_reader;

pub fn load_instance(path: impl Into<String>) -> anyhow::Result<DispatchInstance> {
    let path = path.into();
    let name = Path::new(&path)
        .file_stem()
        .and_then(|it| it.to_str())
        .unwrap_or("snapshot")
        .to_string();
    snapshot_reader::load_instance(name, path)
}

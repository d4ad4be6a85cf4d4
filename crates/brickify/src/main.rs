use std::path::PathBuf;

use brickify::{init_logging, run, Options, Result};

fn main() -> Result<()> {
    init_logging();
    let options = Options::from_env()?;
    let project = std::env::args_os().nth(1).map(PathBuf::from);
    run(&options, project)
}

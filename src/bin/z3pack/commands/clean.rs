//! `z3pack clean` command

use anyhow::Result;

use z3pack::core::Layout;
use z3pack::ops;
use z3pack::util::shell::{Shell, Status};

use crate::cli::CleanArgs;

pub fn execute(args: CleanArgs, shell: &Shell) -> Result<()> {
    let layout = Layout::discover(&args.package_root);

    for dir in ops::clean_staging(&layout)? {
        shell.status(Status::Removed, dir.display());
    }

    Ok(())
}

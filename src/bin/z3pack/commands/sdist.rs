//! `z3pack sdist` command

use anyhow::Result;

use z3pack::core::Layout;
use z3pack::ops;
use z3pack::util::shell::{Shell, Status};

use crate::cli::SdistArgs;

pub fn execute(args: SdistArgs, shell: &Shell) -> Result<()> {
    let layout = Layout::discover(&args.package_root);

    shell.status(Status::Cleaning, "staged binaries");
    ops::clean_staging(&layout)?;

    shell.status(Status::Vendoring, "Z3 sources");
    ops::vendor_sources(&layout)?;

    shell.status(
        Status::Finished,
        format!("sources vendored into {}", layout.vendor_dir().display()),
    );

    Ok(())
}

//! Guard command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::emit::DeclarationEmitter;
use crate::error::Result;

/// Print the include guard derived from a filename
#[derive(Args, Debug)]
pub struct GuardArgs {
    /// Header path, as it will be passed to `build`
    pub header: PathBuf,
}

pub fn run(args: GuardArgs) -> Result<()> {
    println!("{}", DeclarationEmitter::for_header(&args.header).guard());
    Ok(())
}

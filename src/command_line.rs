use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Remote Image Resolver",
    about = "A tool to resolve remote image URLs into responsive attributes served by a resizing image proxy"
)]
pub struct Options {
    /// The path to a file containing image URLs, one per line
    #[structopt(parse(from_os_str))]
    pub urls_file: PathBuf,

    /// The base URL of the image proxy endpoint. Overrides the environment
    #[structopt(short = "a", long = "api-root")]
    pub api_root: Option<String>,

    /// The location of the data file to modify
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Force overwrite of existing data
    #[structopt(short = "f", long = "force", alias = "clobber")]
    pub force_overwrite: bool,
}

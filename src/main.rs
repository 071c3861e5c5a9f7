#![warn(clippy::all, clippy::pedantic)]

#[macro_use]
extern crate log;

use env_logger::Env;

use chrono::prelude::*;
use remote_image_resolver::command_line::Options;
use remote_image_resolver::config::Config;
use remote_image_resolver::metrics::Metrics;
use structopt::StructOpt;

///
/// This program resolves a list of image URLs into responsive image
/// attributes. Remote images are routed through a resizing image proxy as a
/// width-tagged `srcset`; local images pass through untouched. The resolved
/// attributes are merged into a JSON data file for the rendering layer.
///
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or("REMOTE_IMAGE_RESOLVER_LOG", "info")).init();

    let options = Options::from_args();
    let mut config = Config::from_env();
    if let Some(api_root) = &options.api_root {
        config.api_root = api_root.clone();
    }
    debug!("remote-image-resolver {}", &config.version);
    info!("Using image proxy at {}", &config.api_root);

    // Generate a single timestamp to use for the whole program
    let now = Local::now();

    let mut metrics = Metrics::default();
    info!("Resolving images");
    let data = remote_image_resolver::resolve_images(&options, &config, now, &mut metrics)?;

    debug!("Writing data");
    remote_image_resolver::write_data_file(data, options.output, options.force_overwrite)?;

    println!(
        "Resolved {0} images: {1} proxied, {2} passed through, {3} skipped\n",
        metrics.traversed, metrics.proxied, metrics.passthrough, metrics.skipped
    );
    Ok(())
}

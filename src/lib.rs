#![warn(clippy::all)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod attrs;
pub mod capability;
pub mod command_line;
pub mod config;
mod constants;
pub mod data;
pub mod error;
pub mod masked;
pub mod menu;
pub mod metrics;
pub mod resolver;
pub mod visibility;

use crate::command_line::Options;
use crate::config::Config;
use crate::data::Data;
use crate::error::AppError;
use crate::metrics::Metrics;
use crate::resolver::Resolver;

use anyhow::{Context, Result};
use chrono::prelude::*;
use indicatif::ProgressBar;
use std::fs::{create_dir_all, read_to_string};
use std::path::PathBuf;

/// Resolve every URL listed in the input file.
/// Blank lines are ignored; lines starting with `#` are counted as skipped.
/// All entries share the single run timestamp.
pub fn resolve_images(
    options: &Options,
    config: &Config,
    now: DateTime<Local>,
    m: &mut Metrics,
) -> Result<Vec<Data>> {
    let contents = read_to_string(&options.urls_file).with_context(|| {
        format!(
            "Failed to read URLs from {}",
            options.urls_file.to_string_lossy()
        )
    })?;

    let lines: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let resolver = Resolver::new(config.api_root.clone());
    let generated = now.to_rfc3339();

    let mut data: Vec<Data> = Vec::with_capacity(lines.len());
    let progress_bar = ProgressBar::new(lines.len() as u64);
    for line in lines {
        progress_bar.inc(1);
        if line.starts_with('#') {
            m.skipped += 1;
            continue;
        }
        m.traversed += 1;

        let resolved = resolver.resolve(attrs::ImageAttrs::from_src(line));
        if resolved.srcset.is_some() {
            m.proxied += 1;
        } else {
            m.passthrough += 1;
        }
        debug!("Resolved {}", line);

        data.push(Data {
            key: line.to_owned(),
            generated: generated.clone(),
            attrs: resolved,
        });
    }
    progress_bar.finish_and_clear();

    Ok(data)
}

/// Checks if the key is already present in the data file
pub fn is_data_file_key_collision(
    key: &str,
    output_location: &Option<PathBuf>,
) -> Result<bool, AppError> {
    let output_location = output_location
        .to_owned()
        .unwrap_or_else(|| PathBuf::from("./data/images.json"));
    if output_location.exists() {
        let existing_data: Vec<Data> = serde_json::from_str(&read_to_string(&output_location)?)?;
        Ok(existing_data.iter().any(|a| a.key == key))
    } else {
        Ok(false)
    }
}

/// Writes resolved entries to the specified location as JSON, merging with
/// any existing data file. An existing entry with the same key is only
/// replaced when `should_overwrite` is set.
pub fn write_data_file(
    data: Vec<Data>,
    output_location: Option<PathBuf>,
    should_overwrite: bool,
) -> Result<(), AppError> {
    let output_location = output_location.unwrap_or_else(|| PathBuf::from("./data/images.json"));
    let mut existing_data: Vec<Data> = if output_location.exists() {
        serde_json::from_str(&read_to_string(&output_location)?)?
    } else {
        Vec::new()
    };

    for entry in data {
        match existing_data.iter().position(|a| a.key == entry.key) {
            Some(index) => {
                if should_overwrite {
                    existing_data.swap_remove(index);
                    existing_data.push(entry);
                } else {
                    return Err(AppError::KeyAlreadyExists);
                }
            }
            None => existing_data.push(entry),
        }
    }

    debug!("Writing data to {}", &output_location.to_string_lossy());

    create_dir_all(output_location.with_file_name(""))?;
    let serialized_data = serde_json::to_string(&existing_data)?;
    std::fs::write(&output_location, serialized_data)?;
    info!("Data written to {}", &output_location.to_string_lossy());
    Ok(())
}

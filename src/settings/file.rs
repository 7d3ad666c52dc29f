//! Settings file persistence.
//!
//! One comma separated line. Commas and pipes inside a field are escaped
//! with a leading `|`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;
use crate::error::{Error, Result};
use crate::pass::{CharClass, ClassSet};

const FIELDS: usize = 6;

pub fn save(settings: &Settings) -> Result<()> {
    let path = get_path();
    let settings_err = |source| Error::Settings {
        path: path.clone(),
        source,
    };

    if let Some(parent) = Path::new(&path).parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(settings_err)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(settings_err)?;

    file.write_all(to_line(settings).as_bytes())
        .map_err(settings_err)?;
    log::debug!("saved settings to {path}");
    Ok(())
}

pub fn load(settings: &mut Settings) -> Result<()> {
    let path = get_path();
    let settings_err = |source| Error::Settings {
        path: path.clone(),
        source,
    };

    if !Path::new(&path).exists() {
        log::info!("no settings at {path}, writing defaults");
        return save(settings);
    }

    let file = OpenOptions::new()
        .read(true)
        .open(&path)
        .map_err(settings_err)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line).map_err(settings_err)?;

    if !from_line(line.trim_end_matches(['\r', '\n']), settings) {
        log::warn!("malformed settings at {path}, rewriting defaults");
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

fn to_line(settings: &Settings) -> String {
    let classes = settings
        .classes
        .iter()
        .map(CharClass::key)
        .collect::<Vec<_>>()
        .join("+");

    format!(
        "{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.min_length,
        settings.max_length,
        classes,
        settings.number_of_passwords,
        escape(&settings.output_file_path),
    )
}

/// Parse a settings line into `settings`. Unparseable numeric fields keep
/// their current value. Returns false when the field count is wrong.
fn from_line(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.min_length = parts[1].parse().unwrap_or(settings.min_length);
    settings.max_length = parts[2].parse().unwrap_or(settings.max_length);
    settings.classes = parse_classes(&parts[3]);
    settings.number_of_passwords = parts[4].parse().unwrap_or(settings.number_of_passwords);
    settings.output_file_path = parts[5].clone();
    settings.clamp_length();
    true
}

fn parse_classes(s: &str) -> ClassSet {
    s.split('+')
        .filter(|k| !k.is_empty())
        .filter_map(|k| {
            let class = CharClass::from_key(k);
            if class.is_none() {
                log::warn!("ignoring unknown character class {k:?} in settings");
            }
            class
        })
        .collect()
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/pwforge/settings", home)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

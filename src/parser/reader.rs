use std::io::BufRead;

use super::line::Line;
use crate::models::config_store::Config;
use crate::models::error::{ConfigError, Result};
use crate::settings::{StoreOptions, ValueCapture};

/// Feed INI text from `reader` into `config`, one line at a time.
///
/// Option lines that appear before any section header belong to the default
/// section. Parsing stops at the first malformed line; whatever was added
/// before it stays in `config`.
pub fn read_into<C, R>(config: &mut C, reader: R, options: &StoreOptions) -> Result<()>
where
    C: Config + ?Sized,
    R: BufRead,
{
    let mut section = options.default_section.clone();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        match Line::classify(&line) {
            Line::Blank | Line::Comment => continue,
            Line::Section(name) => {
                log::debug!("Entering section [{}]", name);
                section = name.to_string();
                config.add_section(&section);
            }
            Line::Option { key, value, raw } => {
                let value = match options.value_capture {
                    ValueCapture::RightHandSide => value,
                    ValueCapture::WholeLine => raw,
                };
                if !config.add_leaf(&section, key, value) {
                    log::debug!(
                        "Ignoring duplicate option '{}' in section [{}] at line {}",
                        key,
                        section,
                        index + 1
                    );
                }
            }
            Line::Malformed(text) => {
                log::warn!("Could not parse line {}: {}", index + 1, text);
                return Err(ConfigError::MalformedLine {
                    line_number: index + 1,
                    line: text.to_string(),
                });
            }
        }
    }

    Ok(())
}

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// Smallest accepted description indent, in columns.
pub const MIN_DESCRIPTION_INDENT: usize = 1;
/// Largest accepted description indent, in columns.
pub const MAX_DESCRIPTION_INDENT: usize = 12;

const DEFAULT_DESCRIPTION_INDENT: usize = 4;

/// Parser configuration. Immutable for the duration of a parse attempt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Columns of indentation a description line must add over its term's
    /// base indent. Also the column width of a tab during indentation
    /// arithmetic. Clamped to [1, 12].
    #[serde(deserialize_with = "deserialize_indent")]
    pub description_indent: usize,
    /// When true, a term without a description is accepted only at a
    /// blank-line/end-of-input boundary or immediately before another term.
    pub require_description: bool,
    /// When true, a blank line after a completed item ends the block.
    pub break_on_blank_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description_indent: DEFAULT_DESCRIPTION_INDENT,
            require_description: true,
            break_on_blank_line: true,
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn description_indent(mut self, cols: usize) -> Self {
        self.config.description_indent = cols.clamp(MIN_DESCRIPTION_INDENT, MAX_DESCRIPTION_INDENT);
        self
    }

    pub fn require_description(mut self, on: bool) -> Self {
        self.config.require_description = on;
        self
    }

    pub fn break_on_blank_line(mut self, on: bool) -> Self {
        self.config.break_on_blank_line = on;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Clamp a raw indent setting to a usable column count.
///
/// Configuration never fails: non-finite values fall back to the minimum,
/// fractional values are floored, out-of-range values are clamped.
fn clamp_indent(raw: f64) -> usize {
    if !raw.is_finite() {
        return MIN_DESCRIPTION_INDENT;
    }
    (raw.floor() as i64).clamp(MIN_DESCRIPTION_INDENT as i64, MAX_DESCRIPTION_INDENT as i64)
        as usize
}

fn deserialize_indent<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(clamp_indent(raw))
}

const CANDIDATE_NAMES: &[&str] = &[".deflist.toml", "deflist.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("deflist").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("deflist")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .deflist.toml, deflist.toml
/// 3) XDG: $XDG_CONFIG_HOME/deflist/config.toml or ~/.config/deflist/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}

//! Read one parameter from a design note, the way a behavior module would.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use script_core::env::QuestVarSnapshot;
use script_core::{CountMode, DesignNote, ParamReader, Vec3};

use crate::config::CliConfig;

/// Read a parameter from a design note
#[derive(Parser)]
pub struct Param {
    /// Design note text, e.g. "Speed='$spd/10'; Dest=@Chest"
    #[arg(value_name = "NOTE")]
    note: String,

    /// Parameter name (case-insensitive)
    #[arg(value_name = "NAME")]
    name: String,

    /// How to interpret the value
    #[arg(short, long, value_enum, default_value = "float")]
    kind: ParamKind,

    /// Default for an absent or unusable parameter
    #[arg(short, long, allow_hyphen_values = true)]
    default: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ParamKind {
    /// Float expression
    Float,
    /// Integer expression, truncated toward zero
    Int,
    /// Flag word or nonzero expression
    Bool,
    /// Raw string
    String,
    /// Comma-separated x,y,z
    Vec,
    /// Count mode (0-3, None/On/Off/Both)
    Count,
    /// Value and `{name}Falloff` pair
    Falloff,
}

impl Param {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let qvars = config.load_qvars()?;
        println!("{}", self.render(&qvars)?);
        Ok(())
    }

    fn render(&self, qvars: &QuestVarSnapshot) -> Result<String> {
        let note = DesignNote::parse(&self.note).context("Invalid design note")?;
        let reader = ParamReader::new(&note, qvars);
        let name = self.name.as_str();
        let default = self.default.as_deref();

        if !reader.contains(name) {
            info!("{} is not set, using default", name);
        }

        Ok(match self.kind {
            ParamKind::Float => reader.read_float(name, parse_default(default, 0.0)?).to_string(),
            ParamKind::Int => reader.read_int(name, parse_default(default, 0)?).to_string(),
            ParamKind::Bool => reader.read_bool(name, parse_default(default, false)?).to_string(),
            ParamKind::String => reader.read_string(name, default.unwrap_or("")).to_owned(),
            ParamKind::Vec => {
                let defaults = default.map(parse_vec3).transpose()?.unwrap_or(Vec3::ZERO);
                match reader.read_floatvec(name, defaults) {
                    Some(v) => format!("{}, {}, {}", v.x, v.y, v.z),
                    None => "(unset)".to_owned(),
                }
            }
            ParamKind::Count => {
                let fallback = match default {
                    Some(raw) => CountMode::parse(raw)
                        .ok_or_else(|| anyhow::anyhow!("Invalid count mode '{}'", raw))?,
                    None => CountMode::default(),
                };
                reader.read_count_mode(name, fallback).to_string()
            }
            ParamKind::Falloff => {
                let pair = reader.read_value_falloff(name);
                format!("{} (falloff {})", pair.value, pair.falloff)
            }
        })
    }
}

fn parse_default<T>(raw: Option<&str>, fallback: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid default '{}': {}", raw, e)),
        None => Ok(fallback),
    }
}

fn parse_vec3(raw: &str) -> Result<Vec3> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid vector '{}'", raw))?;

    match parts[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => anyhow::bail!("Vector '{}' needs exactly three components", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    fn render(args: &[&str]) -> Result<String> {
        let cmd = Param::try_parse_from(std::iter::once("param").chain(args.iter().copied()))?;
        cmd.render(&fixtures::qvars())
    }

    const NOTE: &str = "Speed='$spd/10'; Count=Off; Offset='1,,3'; Stim=4; StimFalloff=1";

    #[test]
    fn typed_reads() {
        assert_eq!(render(&[NOTE, "speed"]).unwrap(), "5.5");
        assert_eq!(render(&[NOTE, "Speed", "--kind", "int"]).unwrap(), "5");
        assert_eq!(render(&[NOTE, "Count", "--kind", "count"]).unwrap(), "Off");
        assert_eq!(
            render(&[NOTE, "Offset", "--kind", "vec", "--default", "0,2,0"]).unwrap(),
            "1, 2, 3"
        );
        assert_eq!(render(&[NOTE, "Stim", "--kind", "falloff"]).unwrap(), "4 (falloff 1)");
    }

    #[test]
    fn absent_parameters_use_default() {
        assert_eq!(render(&[NOTE, "Missing", "--default", "-1.5"]).unwrap(), "-1.5");
        assert_eq!(render(&[NOTE, "Missing", "--kind", "vec"]).unwrap(), "(unset)");
        assert_eq!(render(&[NOTE, "Missing", "--kind", "string", "-d", "[me]"]).unwrap(), "[me]");
    }

    #[test]
    fn bad_inputs_are_errors() {
        assert!(render(&["Speed='open", "Speed"]).is_err());
        assert!(render(&[NOTE, "Speed", "--default", "fast"]).is_err());
        assert!(render(&[NOTE, "Offset", "--kind", "vec", "--default", "1,2"]).is_err());
    }
}

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, PathRule, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

/// Walks the user through one choice enum: pick a variant, then fill in each
/// of its parameters as described by the JSON schema.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let (kinds, labels): (Vec<C::Kind>, Vec<String>) = kind_items::<C::Kind>().into_iter().unzip();

    let index = driver.ask_select(C::prompt_label(), C::prompt_help(), &labels)?;
    let choice_kind: C::Kind = *kinds.get(index).context("selection out of range")?;

    let key: &'static str = choice_kind.into();
    let schema = C::schema();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        let val = prompt_field(driver, &s, init)?;
        params.insert(s.name.clone(), val);
    }

    C::from_parts(choice_kind, Value::Object(params))
}

fn prompt_field<D: PromptDriver>(driver: &D, s: &FieldSpec, init: Option<Value>) -> Result<Value> {
    let help = s.description.as_deref().unwrap_or("");

    Ok(match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(|s| s.to_string()))
                .unwrap_or_default();

            let answered = match &s.path {
                Some(rule) => {
                    let pb = prompt_path_until_ok(driver, &s.title, help, &def, rule)?;
                    pb.to_string_lossy().into_owned()
                }
                None => driver.ask_string(&s.title, help, &def)?,
            };

            Value::String(answered)
        }
        FieldKind::Choice => {
            let def = init.as_ref().and_then(|v| v.as_str());
            // Put the default first so accepting the prompt keeps it.
            let mut options = s.options.clone();
            if let Some(pos) = def.and_then(|d| options.iter().position(|o| o == d)) {
                options.swap(0, pos);
            }
            let i = driver.ask_select(&s.title, Some(help), &options)?;
            let picked = options.get(i).context("selection out of range")?;
            Value::String(picked.clone())
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    })
}

fn validate_path_str(input: &str, rule: &PathRule) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if rule.must_exist && !p.exists() {
        return Err(format!("File not found: {}", p.display()));
    }
    if p.is_dir() {
        return Err("Expected a file path, not a directory".into());
    }
    if !rule.extensions.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if rule.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => {
                return Err(format!("Expected a .{} file", rule.extensions.join(" / .")));
            }
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    rule: &PathRule,
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, rule) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

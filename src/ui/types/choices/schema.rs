use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// A string restricted to a fixed set of values (`enum` in the schema).
    Choice,
}

/// Constraints on a string field that names a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRule {
    pub must_exist: bool,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: Vec<String>,
    pub path: Option<PathRule>,
}

pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    for branch in alts {
        let bobj = branch.as_object().context("branch is not object")?;
        let props = match bobj.get("properties").and_then(|v| v.as_object()) {
            Some(p) => p,
            None => continue,
        };

        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props
            .get("params")
            .and_then(|v| v.as_object())
            .and_then(|o| resolve_ref_obj(root_obj, o))
        else {
            return Ok(vec![]);
        };

        let Some(params_props) = params_obj.get("properties").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };

        let required: Vec<String> = params_obj
            .get("required")
            .and_then(|v| v.as_array())
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let mut out = Vec::new();
        for (name, field_schema) in params_props {
            // Annotations sit next to a `$ref`; the type lives behind it.
            let annotated = field_schema
                .as_object()
                .context("field schema not object")?;
            let resolved = resolve_ref_obj(root_obj, annotated)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
            let lookup = |key: &str| annotated.get(key).or_else(|| resolved.get(key));

            let title = lookup("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string();

            let description = lookup("description")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let default = lookup("default").cloned();

            let options: Vec<String> = resolved
                .get("enum")
                .and_then(|v| v.as_array())
                .map(|a| {
                    a.iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();

            let kind = if options.is_empty() {
                match detect_field_kind(resolved.get("type")) {
                    Some(kind) => kind,
                    None => continue,
                }
            } else {
                FieldKind::Choice
            };

            let min = lookup("minimum")
                .or_else(|| lookup("exclusiveMinimum"))
                .and_then(|v| v.as_f64());

            let max = lookup("maximum")
                .or_else(|| lookup("exclusiveMaximum"))
                .and_then(|v| v.as_f64());

            out.push(FieldSpec {
                name: name.clone(),
                title,
                description,
                required: required.iter().any(|r| r == name),
                kind,
                default,
                min,
                max,
                options,
                path: path_rule(annotated),
            });
        }

        return Ok(out);
    }

    bail!("no branch found for type={kind_key}");
}

fn path_rule(obj: &Map<String, Value>) -> Option<PathRule> {
    if obj.get("format").and_then(|v| v.as_str()) != Some("path") {
        return None;
    }
    let must_exist = obj
        .get("x-must-exist")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let extensions = obj
        .get("x-extensions")
        .and_then(|v| v.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    Some(PathRule {
        must_exist,
        extensions,
    })
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tval) = props.get("type") else {
        return false;
    };
    let Some(tobj) = tval.as_object() else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    if let Some(arr) = tobj.get("enum").and_then(|v| v.as_array()) {
        if arr.len() == 1 && arr[0].as_str() == Some(kind_key) {
            return true;
        }
    }
    false
}

/// Resolve a local $ref like "#/$defs/MovingAverageParameters" against the root object.
/// Returns the referenced object map, or None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let from_name = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    };
    match ty {
        Some(Value::String(s)) => from_name(s),
        // unions like ["null","integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(from_name),
        _ => None,
    }
}

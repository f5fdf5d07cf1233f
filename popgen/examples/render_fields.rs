//! Example that renders Go field-parsing statements through the function map.
//!
//! Run with: `RUST_LOG=trace cargo run --example render_fields`

use popgen::prelude::*;

/// Field names and types as a schema description would supply them.
const FIELDS: &[(&str, &str)] = &[
    ("ID", "int"),
    ("count", "uint16"),
    ("price", "float64"),
    ("active", "bool"),
    ("name", "string"),
    ("phase", "complex128"),
    ("order", "Order"),
];

fn render_field(funcs: &FuncMap, name: &str, ty: &str) -> Result<String, CodegenError> {
    let var = funcs.call("varname", &[name])?;

    if funcs.call("is_notsupported_type", &[ty])?.as_bool() == Some(true) {
        return Ok(format!("// {}: type {} is not supported\n", name, ty));
    }

    let expr = funcs.call("parsefunc", &[ty, name])?;
    match expr.as_str() {
        Some("") | None => Ok(format!("{} := {}Str\n", var, var)),
        Some(expr) => {
            let base = funcs.call("basetype", &[ty])?;
            Ok(format!(
                "{var}, err := {expr} // base type {base}\nif err != nil {{\n\treturn err\n}}\n"
            ))
        }
    }
}

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let funcs = get_func_map();
    tracing::info!("Registered template functions: {:?}", funcs);

    for &(name, ty) in FIELDS {
        if funcs.call("is_builtin", &[ty])?.as_bool() != Some(true) {
            tracing::warn!("Field '{}' has user-defined type '{}'", name, ty);
        }
        print!("{}", render_field(&funcs, name, ty)?);
    }

    Ok(())
}

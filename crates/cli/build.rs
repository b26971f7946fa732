// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

/// Environment variables read at runtime: (name, description).
const ENV_VARS: &[(&str, &str)] = &[
    ("GITHUB_TOKEN", "API credential sent as `Authorization: token <value>`."),
    ("GHTRIAGE_API_URL", "Overrides `api.base_url` from the config file."),
    ("GHTRIAGE_TIMINGS", "When set, phase timings are printed to stderr."),
    ("RUST_LOG", "Log filter directives; defaults to `info`."),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    for (name, doc) in ENV_VARS {
        writeln!(f, "/// {doc}")?;
        writeln!(f, "pub const {name}: &str = \"{name}\";")?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

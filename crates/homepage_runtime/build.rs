use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    #[serde(rename = "category")]
    categories: Vec<CategorySource>,
}

#[derive(Debug, Deserialize)]
struct CategorySource {
    id: String,
    name: String,
    glyph: Option<String>,
    #[serde(rename = "link", default)]
    links: Vec<LinkSource>,
}

#[derive(Debug, Deserialize)]
struct LinkSource {
    name: String,
    href: String,
    description: Option<String>,
}

#[derive(Debug, Serialize)]
struct CategoryOut {
    category_id: String,
    name: String,
    glyph: Option<String>,
    links: Vec<LinkOut>,
}

#[derive(Debug, Serialize)]
struct LinkOut {
    link_id: String,
    name: String,
    category_name: String,
    href: String,
    description: Option<String>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("links.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "link catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen_ids = HashSet::new();
    let mut categories = Vec::with_capacity(catalog.categories.len());
    for category in catalog.categories {
        if category.id.trim().is_empty() || category.name.trim().is_empty() {
            panic!("link catalog category needs a non-empty id and name");
        }
        if !seen_ids.insert(category.id.clone()) {
            panic!("duplicate link catalog category id `{}`", category.id);
        }

        let links = category
            .links
            .into_iter()
            .enumerate()
            .map(|(index, link)| {
                if link.name.trim().is_empty() {
                    panic!("link #{index} in `{}` has an empty name", category.id);
                }
                if !(link.href.starts_with("https://") || link.href.starts_with("http://")) {
                    panic!(
                        "link `{}` in `{}` must use an absolute http(s) href",
                        link.name, category.id
                    );
                }
                LinkOut {
                    link_id: format!("{}.{index}", category.id),
                    name: link.name,
                    category_name: category.name.clone(),
                    href: link.href,
                    description: link.description,
                }
            })
            .collect();

        categories.push(CategoryOut {
            category_id: category.id,
            name: category.name,
            glyph: category.glyph,
            links,
        });
    }

    let json = serde_json::to_string_pretty(&categories).expect("serialize link catalog");
    let generated = format!(
        "/// Build-time generated link directory JSON.\n\
pub const LINK_DIRECTORY_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("link_directory_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}

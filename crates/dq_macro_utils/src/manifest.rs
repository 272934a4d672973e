use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Name of the facade crate that re-exports every `dq_*` crate.
const FACADE_NAME: &str = "dataq";
/// Prefix shared by the member crates, stripped when going through the facade.
const MEMBER_PREFIX: &str = "dq_";
/// Dependency tables searched in order.
const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

/// The parsed `Cargo.toml` of the crate that invokes a derive macro.
///
/// Generated code has to name `dq_reflect` by a path that is valid *from the
/// user's crate*, which may depend on `dq_reflect` directly or only on the
/// `dataq` facade.
///
/// # Example
///
/// ```rust
/// # use dq_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("dq_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` is a direct dependency: `::name`.
/// 2. `name` starts with `dq_` and `dataq` is a dependency: `::dataq::<rest>`
///    (e.g. `dq_reflect` -> `::dataq::reflect`).
/// 3. Same as 1-2 for `dev-dependencies`.
/// 4. Otherwise `::name`.
///
/// A crate that derives on its own types should declare
/// `extern crate self as dq_reflect;` so that rule 4 still resolves.
#[derive(Debug)]
pub struct Manifest {
    pub document: Option<Document<Box<str>>>,
    pub modified_time: Option<SystemTime>,
}

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }

    #[inline(never)]
    fn read(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    fn lookup(table: &Table, name: &str) -> Option<String> {
        if table.contains_key(name) {
            return Some(format!("::{name}"));
        }
        let member = name.strip_prefix(MEMBER_PREFIX)?;
        table
            .contains_key(FACADE_NAME)
            .then(|| format!("::{FACADE_NAME}::{member}"))
    }

    /// Returns the path under which the crate `name` is reachable from the
    /// invoking crate. See the type-level docs for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let found = self.document.as_ref().and_then(|doc| {
            DEPENDENCY_TABLES.iter().find_map(|key| match doc.get(key) {
                Some(Item::Table(table)) => Self::lookup(table, name),
                _ => None,
            })
        });

        let text = found.unwrap_or_else(|| format!("::{name}"));
        syn::parse_str(&text).unwrap_or_else(|_| {
            // `name` is a plain crate identifier, so this only fails on a
            // malformed request from the macro crate itself.
            syn::Path::from(syn::Ident::new(name, Span::call_site()))
        })
    }

    /// Runs `func` against the (cached) manifest of the invoking crate.
    ///
    /// The manifest is re-read only when its modification time changes, since
    /// every derive in a crate asks for the same file.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Manifest {
                document: None,
                modified_time: None,
            });
        };
        let modified_time = Self::modified_time(&path);

        {
            let cache = CACHE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            document: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

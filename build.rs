use std::env;
use std::path::Path;

// Records the checkout this binary was built from, so an installed copy can
// still find `data/wines.json` when nothing else points at it.
fn main() {
    println!("cargo:rerun-if-env-changed=WINELIST_ROOT_HINT");
    println!("cargo:rerun-if-changed=data/wines.json");

    let hint = env::var_os("WINELIST_ROOT_HINT").or_else(|| env::var_os("CARGO_MANIFEST_DIR"));
    let Some(root) = hint else {
        return;
    };
    let root = Path::new(&root);
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    println!("cargo:rustc-env=WINELIST_ROOT_HINT={}", root.display());
}

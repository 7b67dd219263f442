use std::path::Path;

use walkdir::WalkDir;

fn main() {
    // `include_dir!` and askama do not report the files they read, so the
    // embedded icon dataset and templates are tracked here.
    for dir in ["assets/icons", "templates"] {
        let path = Path::new(dir);
        println!("cargo:rerun-if-changed={}", path.display());

        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().flatten() {
                println!("cargo:rerun-if-changed={}", entry.path().display());
            }
        }
    }
}

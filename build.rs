use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Copy config.toml next to the built binary
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .unwrap()
        .join("config.toml");

    fs::copy("config.toml", dest_path).unwrap();
    println!("cargo:rerun-if-changed=config.toml");
}

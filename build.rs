//! Puts `memory.x` on the linker search path for the RP2040 firmware.
//!
//! The host targets ignore it; only the `thumbv6m-none-eabi` rustflags in
//! `.cargo/config.toml` pull in `link.x`, `link-rp.x` and `defmt.x`.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

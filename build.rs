use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only compile the library, which needs no linker scripts
    if env::var_os("CARGO_FEATURE_FIRMWARE").is_none() {
        return;
    }

    // Set linker flags for the firmware binary
    println!("cargo:rustc-link-arg-bins=--nmagic");

    // Main linker script, memory.x is provided by embassy-stm32's `memory-x` feature
    println!("cargo:rustc-link-arg-bins=-Tlink.x");

    // Only link defmt if the debug feature is enabled
    if env::var_os("CARGO_FEATURE_DEBUG").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}

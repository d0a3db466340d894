use rand::Rng;
use sha2::{Digest, Sha256};
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

#[path = "src/key_source.rs"]
mod key_source;

use key_source::KeySource;

const API_KEY_ENV: &str = "API_KEY";

fn bootstrap_from_defaults(src_dir: &Path, generated_path: &Path) {
    let defaults_path = src_dir.join("config.defaults.rs");
    if !defaults_path.exists() {
        panic!(
            "Missing fallback template for config.rs: {}",
            defaults_path.display()
        );
    }

    fs::copy(&defaults_path, generated_path).unwrap_or_else(|error| {
        panic!(
            "Failed to bootstrap {} from {}: {}",
            generated_path.display(),
            defaults_path.display(),
            error
        )
    });

    println!(
        "cargo:warning={} not set, bootstrapped config.rs from config.defaults.rs",
        API_KEY_ENV
    );
}

fn generate_from_key(api_key: &str, generated_path: &Path) {
    let mut xor_key = [0u8; 32];
    rand::thread_rng().fill(&mut xor_key);

    let plain = api_key.as_bytes();
    let mut obfuscated = Vec::with_capacity(plain.len());
    for i in 0..plain.len() {
        obfuscated.push(plain[i] ^ xor_key[i % xor_key.len()]);
    }

    let mut hasher = Sha256::new();
    hasher.update(plain);
    let digest: [u8; 32] = hasher.finalize().into();

    let contents = format!(
        "// Generated by build.rs from ${env}. Do not edit.\n\
         \n\
         pub const API_KEY_XOR_KEY: [u8; 32] = {xor:?};\n\
         \n\
         pub const API_KEY_OBFUSCATED: &[u8] = &{obf:?};\n\
         \n\
         pub const API_KEY_SHA256: [u8; 32] = {digest:?};\n",
        env = API_KEY_ENV,
        xor = xor_key,
        obf = obfuscated,
        digest = digest,
    );

    fs::write(generated_path, contents).unwrap_or_else(|error| {
        panic!("Failed to write {}: {}", generated_path.display(), error)
    });

    println!(
        "cargo:warning=Embedded {} ({} bytes, sha256 {}...)",
        API_KEY_ENV,
        plain.len(),
        &hex::encode(digest)[..8]
    );
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR missing");
    let src_dir = PathBuf::from(manifest_dir).join("src");
    let generated_path = PathBuf::from(out_dir).join("config.rs");

    println!("cargo:rerun-if-changed=build.rs");
    println!(
        "cargo:rerun-if-changed={}",
        src_dir.join("config.defaults.rs").display()
    );
    println!("cargo:rerun-if-env-changed={}", API_KEY_ENV);

    match key_source::resolve(env::var(API_KEY_ENV)) {
        Ok(KeySource::Provided(api_key)) => generate_from_key(&api_key, &generated_path),
        Ok(KeySource::Defaults) => bootstrap_from_defaults(&src_dir, &generated_path),
        Err(message) => panic!("{}", message),
    }
}

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use std::env;
use std::fs;
use std::io::Error;

include!("src/cli.rs");

const BIN_NAME: &str = "memo";

// Completions are written only when COMPLETIONS_TARGET is set.
fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=COMPLETIONS_TARGET");

    let Some(outdir) = env::var_os("COMPLETIONS_TARGET") else {
        return Ok(());
    };
    fs::create_dir_all(&outdir)?;

    let mut cmd = Args::command();
    for &shell in Shell::value_variants() {
        let script = generate_to(shell, &mut cmd, BIN_NAME, outdir.clone())?;
        println!(
            "cargo:warning={shell:?} completions written to {}",
            script.display()
        );
    }

    Ok(())
}

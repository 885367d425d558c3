use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of src/inspect.rs: build scripts can't access src/ modules
const AVAILABLE_FORMATS: &[&str] = &["treeviz", "json", "ast"];

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("quire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the document trees quire builds from Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(Command::new("styles"));

    generate_to(Bash, &mut cmd, "quire", &outdir)?;
    generate_to(Zsh, &mut cmd, "quire", &outdir)?;
    generate_to(Fish, &mut cmd, "quire", &outdir)?;

    Ok(())
}

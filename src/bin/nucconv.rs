//! Command line tool to convert nuclide names and identifiers
//!
//! Converts any number of plaintext nuclide names into ZZZAAAM identifiers,
//! LaTeX markup, or converts ZZZAAAM identifiers back into readable names.
//!
//! # Usage
//!
//! ```text
//! Usage: nucconv <values>... [options]
//! ```
//!
//! Help is printed with the `-h` flag, and `--help` will show examples, default
//! values, and any important behaviour.
//!
//! ## Options
//!
//! By default every value is converted to a ZZZAAAM identifier.
//!
//! ```bash
//! # Prints 270601 and 942410
//! nucconv Co-60m 241Pu
//! ```
//!
//! ### Convert identifiers to names
//!
//! ```bash
//! # Prints 27-Co-60m1
//! nucconv 270601 --decode --include-z
//!
//! # Prints Co_60 from a ZZZAAA identifier
//! nucconv 27060 --decode --zzzaaa --delimiter _
//! ```
//!
//! ### Convert names to LaTeX
//!
//! ```bash
//! # Prints $^{60m}_{27}$Co
//! nucconv Co60m --latex --include-z
//! ```
//!
//! ### JSON output
//!
//! For use in other tools, `--json` prints every input and result as a JSON
//! list rather than one result per line.

// crate modules
use nuctools::format::{banner, f};
use nuctools::nuclide::{nuclide_to_latex, nuclide_to_zzzaaam, DecodeOptions};

// external crates
use anyhow::{bail, Result};
use clap::Parser;
use log::*;
use serde::Serialize;

#[doc(hidden)]
fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make 'Info' the default)
    let verbosity = cli.verbose as usize + 2;
    logging_init(verbosity, cli.quiet)?;

    let options = DecodeOptions::builder()
        .include_z(cli.include_z)
        .as_zzzaaa(cli.zzzaaa)
        .delimiter(&cli.delimiter)
        .build();

    debug!("Converting {} values", cli.values.len());
    let conversions = cli
        .values
        .iter()
        .map(|value| convert(value, &cli, &options))
        .collect::<Vec<Conversion>>();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&conversions)?);
    } else {
        for c in &conversions {
            if let Some(output) = &c.output {
                println!("{output}");
            } else if let Some(e) = &c.error {
                error!("Failed to convert \"{}\": {e}", c.input);
            }
        }
    }

    let failed = conversions.iter().filter(|c| c.error.is_some()).count();
    if failed > 0 {
        bail!("{failed} of {} values could not be converted", conversions.len());
    }

    Ok(())
}

/// Convert nuclide names and ZZZAAAM identifiers
///
/// Plaintext nuclide names are converted to ZZZAAAM = 10000*Z + 10*A + M
/// identifiers by default.
///
/// A huge variety of name formats are supported, e.g. Co-60m, 60mCo,
/// Co_60_m1, 241Pu, Tc99m, 1n. Isomers may be FISPACT-II style (m, n, o, p,
/// q) or ENSDF style (m1 to m5).
///
/// Examples
/// --------
///
///  Names to identifiers
///     $ nucconv Co-60m 241Pu
///
///  Identifiers to names
///     $ nucconv 270601 --decode
///     $ nucconv 270601 --decode --include-z
///     $ nucconv 27060 --decode --zzzaaa --delimiter _
///
///  Names to LaTeX markup
///     $ nucconv Co60m --latex --include-z
///
/// Notes
/// -----
///
/// Natural abundances (e.g. natU) have no ZZZAAAM identifier, but are fine
/// for LaTeX.
///
/// Identifiers are always decoded with numbered isomers, so 270602 is Co-60m2
/// even if it was encoded from Co60n.
#[doc(hidden)]
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner("Nuctools :: Nuclide converter", 70)),
    after_help("Typical use: nucconv Co-60m 241Pu\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    hide_possible_values(true),
    override_usage("nucconv <values>... [options]")
)]
struct Cli {
    // * Positional
    /// Nuclide names, or identifiers with --decode
    #[arg(name = "values", required = true)]
    values: Vec<String>,

    /// Convert ZZZAAAM identifiers to names
    #[arg(help_heading("Conversion options"))]
    #[arg(short, long)]
    #[arg(conflicts_with = "latex")]
    decode: bool,

    /// Convert names to LaTeX markup
    #[arg(help_heading("Conversion options"))]
    #[arg(short, long)]
    latex: bool,

    /// Include the atomic number in the output
    ///
    /// Added as a leading value for --decode, or as a subscript for --latex.
    #[arg(help_heading("Conversion options"))]
    #[arg(short = 'z', long)]
    include_z: bool,

    /// Identifiers are ZZZAAA, without the isomer digit
    #[arg(help_heading("Conversion options"))]
    #[arg(long)]
    #[arg(requires = "decode")]
    zzzaaa: bool,

    /// Separator between parts of decoded names
    #[arg(help_heading("Conversion options"))]
    #[arg(long)]
    #[arg(value_name = "str")]
    #[arg(default_value = "-")]
    #[arg(allow_hyphen_values = true)]
    delimiter: String,

    /// Print all results as JSON
    #[arg(help_heading("Conversion options"))]
    #[arg(short, long)]
    json: bool,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and Warnings are always logged unless in quiet
    /// (-q) mode.
    #[arg(short, long)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

/// Result of converting a single value
#[doc(hidden)]
#[derive(Serialize, Debug)]
struct Conversion {
    input: String,
    output: Option<String>,
    error: Option<String>,
}

/// Convert one value according to the chosen mode
#[doc(hidden)]
fn convert(value: &str, cli: &Cli, options: &DecodeOptions) -> Conversion {
    let result = if cli.decode {
        decode(value, options)
    } else if cli.latex {
        nuclide_to_latex(value, cli.include_z).map_err(anyhow::Error::from)
    } else {
        nuclide_to_zzzaaam(value)
            .map(|code| code.to_string())
            .map_err(anyhow::Error::from)
    };

    match result {
        Ok(output) => Conversion {
            input: value.to_string(),
            output: Some(output),
            error: None,
        },
        Err(e) => Conversion {
            input: value.to_string(),
            output: None,
            error: Some(f!("{e:#}")),
        },
    }
}

#[doc(hidden)]
fn decode(value: &str, options: &DecodeOptions) -> Result<String> {
    let code = match value.trim().parse::<u32>() {
        Ok(code) => code,
        Err(_) => bail!("\"{value}\" is not a valid identifier"),
    };
    Ok(options.decode(code)?)
}

/// Sets up logging at runtime to allow for multiple verbosity levels
#[doc(hidden)]
fn logging_init(verbosity: usize, quiet: bool) -> Result<()> {
    stderrlog::new()
        .modules(vec![
            module_path!(),
            "nuctools_elements",
            "nuctools_nuclide",
        ])
        .quiet(quiet)
        .verbosity(verbosity)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init()?;
    Ok(())
}

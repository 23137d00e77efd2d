extern crate clap;
use clap::*;
use tracing_subscriber::EnvFilter;

mod cmd_parsel;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, stdout is kept for data
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("PARSEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let app = Command::new("parsel")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`parsel` - Partition selector for PHYLIP alignments")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_parsel::extract::make_subcommand())
        .subcommand(cmd_parsel::glue::make_subcommand())
        .subcommand(cmd_parsel::assign::make_subcommand())
        .after_help(
            r###"Subcommands:

* extract - Mask, filter and sample partitions or taxa
* glue    - Concatenate all alignments of a directory
* assign  - Replace the models of a partition map

Set PARSEL_LOG (e.g. `info`, `debug`) for progress messages on stderr.

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("extract", sub_matches)) => cmd_parsel::extract::execute(sub_matches),
        Some(("glue", sub_matches)) => cmd_parsel::glue::execute(sub_matches),
        Some(("assign", sub_matches)) => cmd_parsel::assign::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}

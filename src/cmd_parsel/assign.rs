use clap::*;
use parsel::libs::phylip;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("assign")
        .about("Replace the models of a partition map")
        .after_help(
            r###"
Replaces the substitution model of every partition with the models listed in
<models>, one per line and in partition order (e.g. the result of a model
selection run). Blank lines are skipped. Both files must have the same number
of entries.

The new partition map is written to <models>.part unless --outfile is given.

Examples:
1. Writes tests/phylip/models.txt.part:
   parsel assign tests/phylip/small.part tests/phylip/models.txt

2. To screen:
   parsel assign tests/phylip/small.part tests/phylip/models.txt -o stdout

"###,
        )
        .arg(
            Arg::new("partfile")
                .required(true)
                .index(1)
                .num_args(1)
                .help("Partition map to update"),
        )
        .arg(
            Arg::new("models")
                .required(true)
                .index(2)
                .num_args(1)
                .help("File with one model per line"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .help("Output filename. [<models>.part], [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let partfile = args.get_one::<String>("partfile").unwrap();
    let models_file = args.get_one::<String>("models").unwrap();
    let outfile = match args.get_one::<String>("outfile") {
        Some(o) => o.to_string(),
        None => format!("{}.part", models_file),
    };

    let mut ranges = phylip::parse_partition_map(&parsel::read_to_string(partfile)?)
        .map_err(|e| anyhow::anyhow!("{}: {}", partfile, e))?;
    let models = parsel::read_lines(models_file)?;

    //----------------------------
    // Ops
    //----------------------------
    if ranges.len() != models.len() {
        anyhow::bail!(
            "{} has {} partitions but {} lists {} models",
            partfile,
            ranges.len(),
            models_file,
            models.len()
        );
    }
    for (range, model) in ranges.iter_mut().zip(models) {
        range.model = model.trim().to_string();
    }

    //----------------------------
    // Output
    //----------------------------
    tracing::info!("Writing {} with the assigned models", outfile);
    let mut writer = parsel::writer(&outfile)?;
    for range in &ranges {
        writer.write_all(format!("{}\n", range).as_ref())?;
    }
    writer.flush()?;

    Ok(())
}

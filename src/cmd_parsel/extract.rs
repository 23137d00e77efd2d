use clap::*;
use parsel::libs::phylip;
use parsel::libs::sample::SampleConfig;
use rand::SeedableRng;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("extract")
        .about("Mask, filter and sample partitions or taxa of an alignment")
        .after_help(
            r###"
Loads a relaxed PHYLIP alignment together with its partition map and applies
the requested operations. Partitions and taxa are addressed by their 0-based
position in the input.

Operations run in this order, whatever the order on the command line:
    -r  mask partitions
    -f  keep partitions filled above a percentage
    -m  keep random partitions (-d: distinct)
    -t  keep taxa by position
    -u  keep taxa by name
    -p  keep partitions in exactly the given order
    -s  keep random taxa

A random draw of -m is repeated until no taxon is left with gaps (`-`) and
unknowns (`X`) only.

Input files can be gzipped. Without --outfile the alignment and then the
partition map are printed to stdout.

Examples:
1. Partitions filled in more than 50% of the taxa:
   parsel extract tests/phylip/small.part tests/phylip/small.phy -f 50

2. Three distinct random partitions, reproducible:
   parsel extract tests/phylip/small.part tests/phylip/small.phy -m 3 -d --seed 42

3. Two taxa, written to out.phy and out.part:
   parsel extract tests/phylip/small.part tests/phylip/small.phy -u human,rat -o out

"###,
        )
        .arg(
            Arg::new("partfile")
                .required(true)
                .index(1)
                .num_args(1)
                .help("Partition map, one `model, name = start-end` per line"),
        )
        .arg(
            Arg::new("phyfile")
                .required(true)
                .index(2)
                .num_args(1)
                .help("Relaxed PHYLIP alignment"),
        )
        .arg(
            Arg::new("remove")
                .long("remove")
                .short('r')
                .num_args(1)
                .help("Comma separated partitions to mask"),
        )
        .arg(
            Arg::new("fill")
                .long("fill")
                .short('f')
                .value_parser(value_parser!(usize))
                .help("Keep partitions with data in more than this percentage of taxa"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .short('m')
                .value_parser(value_parser!(usize))
                .help("Number of partitions to pick at random"),
        )
        .arg(
            Arg::new("distinct")
                .long("distinct")
                .short('d')
                .action(ArgAction::SetTrue)
                .help("No partition is picked twice by --random"),
        )
        .arg(
            Arg::new("max_attempts")
                .long("max-attempts")
                .value_parser(value_parser!(usize))
                .help("Give up --random after this many rejected draws"),
        )
        .arg(
            Arg::new("taxa")
                .long("taxa")
                .short('t')
                .num_args(1)
                .help("Comma separated positions of taxa to keep"),
        )
        .arg(
            Arg::new("names")
                .long("names")
                .short('u')
                .num_args(1)
                .help("Comma separated names of taxa to keep"),
        )
        .arg(
            Arg::new("partitions")
                .long("partitions")
                .short('p')
                .num_args(1)
                .help("Comma separated partitions to keep, in this order"),
        )
        .arg(
            Arg::new("species")
                .long("species")
                .short('s')
                .value_parser(value_parser!(usize))
                .help("Number of taxa to pick at random"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Random seed. Unseeded by default"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .help("Prefix of the output files, writes <prefix>.phy and <prefix>.part"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let partfile = args.get_one::<String>("partfile").unwrap();
    let phyfile = args.get_one::<String>("phyfile").unwrap();

    let config = SampleConfig {
        distinct: args.get_flag("distinct"),
        max_attempts: args.get_one::<usize>("max_attempts").copied(),
    };
    let mut rng = match args.get_one::<u64>("seed") {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(*seed),
        None => rand::rngs::StdRng::from_entropy(),
    };

    let mut aln = phylip::load(phyfile, partfile)?;

    //----------------------------
    // Ops
    //----------------------------
    if let Some(list) = args.get_one::<String>("remove") {
        aln.mask_partitions(&parse_indices(list)?);
    }

    if let Some(fill) = args.get_one::<usize>("fill") {
        aln.extract_by_completeness(*fill);
    }

    if let Some(count) = args.get_one::<usize>("random") {
        if config.distinct && *count > aln.nr_partitions() {
            anyhow::bail!(
                "{} distinct partitions requested but only {} available",
                count,
                aln.nr_partitions()
            );
        }
        aln.extract_random(*count, config, &mut rng)?;
    }

    if let Some(list) = args.get_one::<String>("taxa") {
        aln.keep_taxa_at(&parse_indices(list)?);
    }

    if let Some(list) = args.get_one::<String>("names") {
        let names: Vec<&str> = list
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        aln.keep_taxa_named(&names);
        for taxon in aln.visible_taxa() {
            tracing::info!("Keeping taxon {}", taxon.name());
        }
    }

    if let Some(list) = args.get_one::<String>("partitions") {
        aln.select_partitions(&parse_indices(list)?)?;
    }

    if let Some(count) = args.get_one::<usize>("species") {
        aln.extract_random_taxa(*count, &mut rng)?;
    }

    //----------------------------
    // Output
    //----------------------------
    match args.get_one::<String>("outfile") {
        Some(prefix) => phylip::write_files(&aln, prefix)?,
        None => {
            let mut writer = parsel::writer("stdout")?;
            writer.write_all(phylip::to_phylip(&aln).as_ref())?;
            writer.write_all(phylip::to_partition_map(&aln).as_ref())?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// `0,5, 1,` -> [0, 5, 1]
fn parse_indices(list: &str) -> anyhow::Result<Vec<usize>> {
    list.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|e| anyhow::anyhow!("invalid index `{}`: {}", s, e))
        })
        .collect()
}

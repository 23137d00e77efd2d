use anyhow::Context;
use clap::*;
use parsel::libs::{aln, phylip};
use std::path::{Path, PathBuf};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("glue")
        .about("Concatenate the alignments of a directory")
        .after_help(
            r###"
Concatenates every PHYLIP alignment found in a directory into one.

Note:
- Files whose name contains `.phy` are picked up, except `synthetic.*`.
- Each `<stem>.phy` needs a `<stem>.part` partition map next to it.
- Files are glued in lexical order of their names.
- Taxa are matched by their position, all files must list them in the same order.
- The first partition of every file is appended to the first file's taxa.

Examples:
1. Writes tests/phylip/glue/synthetic.phy and .part:
   parsel glue tests/phylip/glue

2. Choose the output prefix:
   parsel glue tests/phylip/glue -o merged

"###,
        )
        .arg(
            Arg::new("dir")
                .required(true)
                .index(1)
                .num_args(1)
                .help("Directory with .phy and .part files"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .help("Prefix of the output files. [<dir>/synthetic]"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let dir = Path::new(args.get_one::<String>("dir").unwrap());
    let prefix = match args.get_one::<String>("outfile") {
        Some(p) => p.to_string(),
        None => dir.join("synthetic").to_string_lossy().to_string(),
    };

    let files = phy_files(dir)?;
    if files.is_empty() {
        anyhow::bail!("no .phy files in {}", dir.display());
    }

    //----------------------------
    // Ops
    //----------------------------
    let mut sources = Vec::with_capacity(files.len());
    for file in &files {
        let phyfile = file.to_string_lossy().to_string();
        let partfile = file.with_extension("part").to_string_lossy().to_string();
        sources.push(phylip::load(&phyfile, &partfile)?);
    }

    let glued = aln::glue(sources).with_context(|| format!("gluing {}", dir.display()))?;

    //----------------------------
    // Output
    //----------------------------
    tracing::info!("Glued {} files into {}.*", files.len(), prefix);
    phylip::write_files(&glued, &prefix)?;

    Ok(())
}

// sorted by file name
fn phy_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("could not read {}", dir.display()))?
    {
        let path = entry?.path();
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };
        if path.is_file() && name.contains(".phy") && !name.contains("synthetic") {
            files.push(path);
        }
    }
    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    Ok(files)
}

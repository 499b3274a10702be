use anyhow::Result;
use clap::Parser;
use daglp::areas::analyzer::Analyzer;
use daglp::artifacts::record::input_source::InputSource;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daglp",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Longest path through a commit history",
    long_about = "Reads a topologically sorted commit history, as produced by \
    `git log --topo-order --pretty=format:'%H %at %P'`, and prints the longest \
    path of the commit DAG from the oldest commit to the newest one as \
    \"<commit> <timestamp>\" lines.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The history file to read (standard input if omitted)")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let analyzer = Analyzer::new(Box::new(BufWriter::new(std::io::stdout())));
    analyzer.longest_path(&InputSource::from_path(cli.file))?;

    Ok(())
}

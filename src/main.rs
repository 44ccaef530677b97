use clap::Parser;
use operon_tools::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::SizeFilter {
            operon_file,
            output_file,
            top,
        } => commands::size_filter::run(operon_file, output_file, top),
        cli::Commands::Distribution {
            operon_file,
            output_file,
        } => commands::distribution::run(operon_file, output_file),
        cli::Commands::ExtractRrna {
            operon_file,
            rrna_file,
            output_file,
        } => commands::extract_rrna::run(operon_file, rrna_file, output_file),
        cli::Commands::BuildTree {
            fasta_file,
            align_file,
            tree_file,
            keep_alignment,
        } => commands::build_tree::run(fasta_file, align_file, tree_file, keep_alignment),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

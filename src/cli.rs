use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keep only the largest operon groups from a prediction file
    SizeFilter {
        /// Path to the operon prediction file
        operon_file: String,

        /// Output file for the filtered operons
        #[arg(short = 'o', long = "output", default_value = "operons.filtered.txt")]
        output_file: String,

        /// How many of the biggest groups to keep (default: 100)
        #[arg(short = 'k', long, default_value = "100")]
        top: usize,
    },

    /// Write an iTOL dataset of functional gene counts per genome
    Distribution {
        /// Path to the operon prediction file
        operon_file: String,

        /// Output file for the iTOL dataset
        #[arg(short = 'o', long = "output", default_value = "operon_distribution.txt")]
        output_file: String,
    },

    /// Extract one 16S rRNA sequence per genome referenced by an operon file
    ExtractRrna {
        /// Path to the operon prediction file
        operon_file: String,

        /// FASTA file of 16S rRNA sequences keyed by accession (may be compressed)
        rrna_file: String,

        /// Output FASTA file for the extracted sequences
        #[arg(short = 'o', long = "output", default_value = "operons.rrna.fa")]
        output_file: String,
    },

    /// Align extracted rRNAs and build a phylogenetic tree with external tools
    BuildTree {
        /// Input FASTA file (typically the extract-rrna output)
        fasta_file: String,

        /// Alignment file path (default: <input>.align)
        #[arg(long)]
        align_file: Option<String>,

        /// Tree file path (default: <input>.tree)
        #[arg(long)]
        tree_file: Option<String>,

        /// Keep the intermediate alignment instead of deleting it
        #[arg(long)]
        keep_alignment: bool,
    },
}

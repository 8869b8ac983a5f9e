use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use seqdot::{dump, match_format, plot, scan};

#[derive(Parser)]
#[command(name = "seqdot", about = "Exact k-mer match scanner and dot-plot renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan two FASTA files for shared k-length substrings
    Scan {
        /// Reference FASTA; one window every m positions is indexed
        #[arg(long)]
        seq_a: PathBuf,
        /// Query FASTA; every window is scanned
        #[arg(long)]
        seq_b: PathBuf,
        /// Window length
        #[arg(short, default_value_t = 8)]
        k: usize,
        /// Sampling interval for seq-a (must be >= k)
        #[arg(short, default_value_t = 100)]
        m: usize,
        /// Output path for the match file
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Render a scanned match set as a dot-plot image
    Plot {
        /// Path to the match file produced by scan
        #[arg(long)]
        matches: PathBuf,
        /// Output path for the PGM image
        #[arg(long, short)]
        output: PathBuf,
        /// Raster width in pixels
        #[arg(long, default_value_t = 500)]
        width: usize,
        /// Raster height in pixels
        #[arg(long, default_value_t = 500)]
        height: usize,
        /// Re-verify this file against the digest recorded for sequence A
        #[arg(long)]
        seq_a: Option<PathBuf>,
        /// Re-verify this file against the digest recorded for sequence B
        #[arg(long)]
        seq_b: Option<PathBuf>,
    },
    /// List a scanned match set as tab-separated positions
    Dump {
        /// Path to the match file produced by scan
        #[arg(long)]
        matches: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            seq_a,
            seq_b,
            k,
            m,
            output,
        } => {
            println!("Scanning for exact submatches...");
            println!("  A: {}", seq_a.display());
            println!("  B: {}", seq_b.display());
            println!("  k: {}  m: {}", k, m);

            let start = Instant::now();
            let summary = scan::scan_sequences(&seq_a, &seq_b, k, m, &output).await?;
            let elapsed = start.elapsed();

            println!("\nScan complete!");
            println!("  Symbols in A: {}", summary.symbols_a);
            println!("  Symbols in B: {}", summary.symbols_b);
            println!("  Windows indexed: {}", summary.windows_indexed);
            println!("  Matches found: {}", summary.matches);
            println!("  Output: {}", output.display());
            println!("  Time elapsed: {:.3}s", elapsed.as_secs_f64());
        }
        Commands::Plot {
            matches,
            output,
            width,
            height,
            seq_a,
            seq_b,
        } => {
            println!("Rendering dot plot...");
            println!("  Matches: {}", matches.display());
            println!("  Output: {}", output.display());

            let start = Instant::now();
            let summary = plot::render_plot(
                &matches,
                &output,
                width,
                height,
                seq_a.as_deref(),
                seq_b.as_deref(),
            )?;
            let elapsed = start.elapsed();

            println!("\nPlot rendered successfully!");
            println!("  Matches plotted: {}", summary.matches);
            println!("  Occupied bins: {}", summary.occupied_bins);
            println!("  Image size: {}x{}", summary.width, summary.height);
            println!("  Time elapsed: {:.3}s", elapsed.as_secs_f64());
        }
        Commands::Dump { matches, output } => {
            let set = match_format::read_match_set(&matches)?;
            match output {
                Some(path) => {
                    let mut file = std::fs::File::create(&path).with_context(|| {
                        format!("Failed to create output file: {}", path.display())
                    })?;
                    dump::write_matches(&mut file, &set)?;
                    println!("Wrote {} matches to {}", set.matches.len(), path.display());
                }
                None => {
                    dump::write_matches(&mut std::io::stdout().lock(), &set)?;
                }
            }
        }
    }

    Ok(())
}

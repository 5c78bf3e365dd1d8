//! Enrichment of FlyBase disease model qualifiers within MONDO categories
//!
//! ```bash
//! mondo-enrich --ontology mondo.json --annotations disease_model_annotations.tsv --top 10
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use mondo::annotations::flybase;
use mondo::parser::load;
use mondo::stats::{category_enrichment, significant, top, CategoryEnrichment, Correction, GeneProfiles};
use mondo::{CategoryResolver, Closure, DEFAULT_ALPHA, DEFAULT_MAX_DEPTH, DEFAULT_XREF_PREFIX};

/// Tests which disease model qualifiers are enriched in MONDO categories
#[derive(Parser, Debug)]
#[command(name = "mondo-enrich")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MONDO ontology in OBO-Graphs JSON format
    #[arg(long)]
    ontology: PathBuf,

    /// FlyBase disease model annotations (TSV)
    #[arg(long)]
    annotations: PathBuf,

    /// Prefix of the cross-references that link diseases to MONDO
    #[arg(long, default_value = DEFAULT_XREF_PREFIX)]
    xref_prefix: String,

    /// Number of generations to walk up the ontology
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Use all traversed generations as categories, not only the last one
    #[arg(long)]
    cumulative: bool,

    /// Number of results to print, sorted by p-value
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Significance level after correction
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Correction method: bonferroni, fdr_bh or fdr_by
    #[arg(long, default_value = "fdr_bh")]
    method: Correction,

    /// Increase logging output, can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn print_result(result: &CategoryEnrichment) {
    println!(
        "{}\t{}\t{:.3e}\t{:.3}\t{}\t{:.2}\t{:.3}",
        result.category(),
        result.qualifier(),
        result.pvalue(),
        result.odds_ratio(),
        result.count(),
        result.expected(),
        result.fold_change()
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    SimpleLogger::new()
        .with_level(level(cli.verbose))
        .init()
        .context("unable to initialize logging")?;

    let (ontology, xrefs) = load(&cli.ontology, &cli.xref_prefix)
        .with_context(|| format!("loading ontology {}", cli.ontology.display()))?;
    let records = flybase::read_file(&cli.annotations)
        .with_context(|| format!("reading annotations {}", cli.annotations.display()))?;

    let closure = if cli.cumulative {
        Closure::Cumulative
    } else {
        Closure::Frontier
    };
    let resolver = CategoryResolver::new(&ontology, &xrefs)
        .max_depth(cli.max_depth)
        .closure(closure);

    let profiles = GeneProfiles::build(&records, &resolver);
    let mut results = category_enrichment(&profiles).context("enrichment analysis")?;
    cli.method.apply(&mut results, cli.alpha);

    println!("# Top {} by p-value", cli.top);
    println!("category\tqualifier\tpvalue\todds_ratio\tobserved\texpected\tfold_change");
    for result in top(&results, cli.top) {
        print_result(result);
    }

    let rejected = significant(&results);
    println!();
    println!("# Significant after {} (alpha = {})", cli.method, cli.alpha);
    for result in &rejected {
        println!(
            "{}\t{}\t{:.3e}",
            result.category(),
            result.qualifier(),
            result.corrected_pvalue().unwrap_or(1.0)
        );
    }
    println!("# Total: {}", rejected.len());
    Ok(())
}

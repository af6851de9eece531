use apriori::apriori::AprioriRunner;
use apriori::{Format, TransactionSet};
use clap::Parser;
use clap::*;
use sampling::sample_size::SizeCurve;
use sampling::{
    DatasetParams, Experiment, ExperimentConfig, ExperimentError, Population, RiondatoUpfal,
    Toivonen,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Compares itemsets mined from a sample against the full dataset")]
pub struct Args {
    file: PathBuf,
    experiment: Experiments,
    /// Support an itemset needs on the full dataset to be frequent
    #[arg(short, long, default_value_t = 0.02)]
    support: f64,
    /// Tolerated error of a sample support
    #[arg(short, long, default_value_t = 0.05)]
    epsilon: f64,
    /// Probability that the guarantee fails
    #[arg(short, long, default_value_t = 0.01)]
    delta: f64,
    /// Probability that Toivonen misses a frequent itemset
    #[arg(short, long, default_value_t = 0.01)]
    miu: f64,
    #[arg(short = 'n', long, default_value_t = 10)]
    trials: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long, value_enum, default_value_t = Formats::Basket)]
    format: Formats,
    /// Longest itemset the miner looks for
    #[arg(long)]
    max_len: Option<usize>,
    /// Skip the Riondato-Upfal almost-frequent check
    #[arg(long)]
    no_almost_frequent: bool,
    /// Print the itemsets the last trial of each experiment found
    #[arg(long)]
    show: bool,
    #[arg(short, long, default_value = "false")]
    time: bool,
}
#[derive(Debug, Clone, ValueEnum)]
pub enum Experiments {
    Toivonen,
    RiondatoUpfal,
    Both,
    /// Print sample sizes over a range of epsilons instead of sampling
    Sizes,
}
#[derive(Debug, Clone, ValueEnum)]
pub enum Formats {
    Basket,
    ItemList,
}
impl From<Formats> for Format {
    fn from(f: Formats) -> Self {
        match f {
            Formats::Basket => Format::Basket,
            Formats::ItemList => Format::ItemList,
        }
    }
}

#[derive(Debug)]
pub enum MainError {
    InvalidInputFile(apriori::LoadError),
    Experiment(ExperimentError),
}
impl From<ExperimentError> for MainError {
    fn from(e: ExperimentError) -> Self {
        Self::Experiment(e)
    }
}
impl From<sampling::DomainError> for MainError {
    fn from(e: sampling::DomainError) -> Self {
        Self::Experiment(e.into())
    }
}

impl Args {
    fn config(&self) -> ExperimentConfig {
        let config = ExperimentConfig::default()
            .with_true_support(self.support)
            .with_epsilon(self.epsilon)
            .with_delta(self.delta)
            .with_miu(self.miu)
            .with_trials(self.trials)
            .with_almost_frequent_check(!self.no_almost_frequent);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
    fn miner(&self) -> AprioriRunner {
        match self.max_len {
            Some(m) => AprioriRunner::with_max_len(m),
            None => AprioriRunner::new(),
        }
    }
}

fn run(population: &Population, a: &Args) -> Result<(), MainError> {
    if let Experiments::Sizes = a.experiment {
        let curve = SizeCurve::new(
            population.total_items(),
            population.d_bound()?,
            population.dataset_size(),
        );
        print!("{curve}");
        return Ok(());
    }
    let config = a.config();
    let mut experiment = Experiment::new(population, a.miner(), config)?;
    println!("True support: {}", config.true_support);
    println!("Nr of true frequent itemsets: {}", experiment.true_frequent());
    if matches!(a.experiment, Experiments::Toivonen | Experiments::Both) {
        let summary = experiment.run(&Toivonen::from_config(&config))?;
        println!("{summary}");
        if a.show {
            println!("{}", summary.itemsets(population.universe()));
        }
    }
    if matches!(a.experiment, Experiments::RiondatoUpfal | Experiments::Both) {
        let summary = experiment.run(&RiondatoUpfal::from_config(&config))?;
        println!("{summary}");
        if a.show {
            println!("{}", summary.itemsets(population.universe()));
        }
    }
    Ok(())
}

fn main() -> Result<(), MainError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let a = Args::parse();
    let data = TransactionSet::from_path(&a.file, a.format.clone().into())
        .map_err(MainError::InvalidInputFile)?;
    let before = Instant::now();
    println!("Dataset size: {}", data.len());
    println!("Total nr of items: {}", data.num_items());
    let population = Population::new(data)?;
    run(&population, &a)?;
    if a.time {
        println!("Time Taken: {:?}", before.elapsed());
    }
    Ok(())
}

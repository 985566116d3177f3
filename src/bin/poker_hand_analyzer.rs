mod common;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use poker_hand_analyzer::analyzer::{read_hands_file, AnalysisReport};
use poker_hand_analyzer::core::{Deck, PokerHandError, DEFAULT_NUM_HANDS};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "poker_hand_analyzer",
    about = "Deal or read five card poker hands and print them in winning order",
    long_about = "Without a FILE a shuffled 52 card deck is dealt into hands.\n\
                  With a FILE every line is read as one hand, e.g. `2D 2C 9H 9S 5D`\n\
                  or `AD, KD, QD, JD, 10D`."
)]
struct Args {
    /// Tracing/logging options
    #[command(flatten)]
    tracing: common::TracingArgs,

    /// Test deck file, one hand per line
    file: Option<PathBuf>,

    /// Number of hands to deal from a shuffled deck
    #[arg(short = 'n', long = "hands", default_value_t = DEFAULT_NUM_HANDS)]
    num_hands: usize,

    /// Seed the shuffle so the deal can be repeated
    #[arg(long)]
    seed: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn run(args: &Args) -> Result<(), PokerHandError> {
    let text = args.format == OutputFormat::Text;
    if text {
        println!("*** P O K E R H A N D A N A L Y Z E R ***");
    }

    let hands = match &args.file {
        Some(path) => {
            info!(path = %path.display(), "Using test deck");
            if text {
                println!("*** USING TEST DECK ***");
                println!("*** File: {}", path.display());
            }
            read_hands_file(path)?
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let mut deck = Deck::default();
            deck.shuffle(&mut rng);
            info!(seed = ?args.seed, num_hands = args.num_hands, "Using shuffled deck");
            if text {
                println!("*** USING RANDOMIZED DECK OF CARDS ***");
                println!("*** Shuffled 52 card deck: {deck}");
            }
            deck.deal(args.num_hands)?
        }
    };

    let report = AnalysisReport::from_hands(&hands);
    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.tracing.init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Analysis failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

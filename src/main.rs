use clap::Parser;
use guess_my_number::{Game, Secret, play};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use tracing::{Level, debug};

/// Guess the secret number between 0 and 9.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Seed for the random generator (reproducible secret)
    #[arg(long)]
    seed: Option<u64>,

    /// Log debug output to stderr, including the secret
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // stdout belongs to the game
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let secret = Secret::draw(&mut rng);
    debug!(secret = secret.value(), seed = ?args.seed, "secret drawn");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(err) = play(Game::new(secret), stdin.lock(), stdout.lock()) {
        eprintln!("\nerror: {err}");
        std::process::exit(1);
    }
}

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, info};
use rand::SeedableRng;

use rsa_keygen::prime::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RATIO};
use rsa_keygen::rng::Csprng;
use rsa_keygen::{KeyGenParams, KeyGenerator, KeyInt};

/// Generate a toy RSA key pair over fixed-width integers.
#[derive(Parser, Debug)]
#[command(name = "rsa-keygen", version)]
struct Cli {
    /// Integer width of the key components, in bits
    #[arg(long, value_enum, default_value_t = Width::W32)]
    width: Width,

    /// Upper bound for p and q as a power of two (defaults to half the width)
    #[arg(long)]
    prime_bits: Option<u32>,

    /// Primes are drawn from [bound / ratio + 1, bound)
    #[arg(long, default_value_t = DEFAULT_RATIO)]
    ratio: u32,

    /// Retry ceiling for every sampling loop
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Fixed seed for reproducible output (OS entropy otherwise)
    #[arg(long)]
    seed: Option<u64>,

    /// Also print p, q and phi
    #[arg(long)]
    show_factors: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Width {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    match cli.width {
        Width::W16 => run::<u16>(&cli),
        Width::W32 => run::<u32>(&cli),
        Width::W64 => run::<u64>(&cli),
    }
}

fn run<T: KeyInt>(cli: &Cli) -> anyhow::Result<()> {
    let params = match cli.prime_bits {
        Some(bits) => KeyGenParams::<T>::from_prime_bits(bits)?,
        None => KeyGenParams::default(),
    }
    .with_ratio(cli.ratio)
    .with_max_attempts(cli.max_attempts);

    info!(
        "generating {}-bit key components, primes below {}",
        T::BITS,
        params.prime_bound
    );

    let keys = match cli.seed {
        Some(seed) => {
            let mut rng = Csprng::seed_from_u64(seed);
            KeyGenerator::generate(&params, &mut rng)
        }
        None => KeyGenerator::with_params(params),
    }
    .context("key generation failed")?;

    println!("n   = {}", keys.n());
    println!("e   = {}", keys.e());
    println!("d   = {}", keys.d());

    if cli.show_factors {
        println!("p   = {}", keys.p());
        println!("q   = {}", keys.q());
        println!("phi = {}", keys.phi());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rsa_keygen::KeyGenError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rsa-keygen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn width_values() {
        assert_eq!(parse(&[]).width, Width::W32);
        assert_eq!(parse(&["--width", "16"]).width, Width::W16);
        assert_eq!(parse(&["--width", "32"]).width, Width::W32);
        assert_eq!(parse(&["--width", "64"]).width, Width::W64);

        for bad in ["8", "128", "W32", ""] {
            assert!(Cli::try_parse_from(["rsa-keygen", "--width", bad]).is_err());
        }
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.prime_bits, None);
        assert_eq!(cli.ratio, DEFAULT_RATIO);
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.seed, None);
        assert!(!cli.show_factors);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        assert_eq!(parse(&[]).log_level(), LevelFilter::Warn);
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvv"]).log_level(), LevelFilter::Trace);
        assert_eq!(parse(&["-v", "-v", "-v", "-v"]).log_level(), LevelFilter::Trace);
    }

    #[test]
    fn seeded_run_succeeds() {
        let cli = parse(&["--seed", "1", "--show-factors"]);

        assert_eq!(cli.seed, Some(1));
        assert!(cli.show_factors);
        assert!(run::<u32>(&cli).is_ok());
        assert!(run::<u64>(&parse(&["--width", "64", "--seed", "1"])).is_ok());
    }

    #[test]
    fn oversized_prime_bound_reports_overflow() {
        let cli = parse(&["--width", "16", "--prime-bits", "15", "--seed", "3"]);
        let err = run::<u16>(&cli).unwrap_err();

        assert_eq!(err.to_string(), "key generation failed");
        assert!(matches!(
            err.downcast_ref::<KeyGenError>(),
            Some(KeyGenError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn zero_ratio_is_rejected() {
        let cli = parse(&["--ratio", "0", "--seed", "1"]);
        let err = run::<u32>(&cli).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<KeyGenError>(),
            Some(KeyGenError::InvalidParameters(_))
        ));
    }

    #[test]
    fn prime_bits_out_of_range_is_rejected() {
        let cli = parse(&["--prime-bits", "32", "--seed", "1"]);
        let err = run::<u32>(&cli).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<KeyGenError>(),
            Some(KeyGenError::InvalidParameters(_))
        ));
    }
}

//! Command-line interface for `feistel-shuffle`.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use feistel_shuffle::{
    generate_keys, get_index, random_index, shuffle, FeistelNetwork, KeyMaterial, ShuffleStream,
    DEFAULT_ROUNDS,
};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Feistel index shuffling CLI.
#[derive(Parser)]
#[command(
    name = "fshuffle",
    version,
    author,
    about = "Format-preserving index permutation by Feistel cycle walking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random round keys and write them as key material.
    Keygen {
        /// Number of Feistel rounds.
        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,
        /// Output path for the serialized key material.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Optional RNG seed for reproducible keys.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Map a linear index to its permuted position.
    Index {
        /// Path to the key material.
        #[arg(long, value_name = "FILE")]
        keys: PathBuf,
        /// Exclusive upper bound; 0 means the whole 64-bit domain.
        #[arg(long)]
        max: u64,
        /// Index to permute.
        idx: u64,
    },
    /// Map a permuted position back to its linear index.
    Unindex {
        /// Path to the key material.
        #[arg(long, value_name = "FILE")]
        keys: PathBuf,
        /// Exclusive upper bound; 0 means the whole 64-bit domain.
        #[arg(long)]
        max: u64,
        /// Permuted position to invert.
        permutation: u64,
    },
    /// Print the shuffled range `[min, max)`, one value per line.
    Shuffle {
        /// Path to the key material.
        #[arg(long, value_name = "FILE")]
        keys: PathBuf,
        /// Lower bound (inclusive).
        #[arg(long)]
        min: u64,
        /// Upper bound (exclusive); equal bounds mean the whole domain.
        #[arg(long)]
        max: u64,
        /// Stop after this many values.
        #[arg(long)]
        limit: Option<u64>,
        /// Produce values on a background thread.
        #[arg(long, default_value_t = false)]
        background: bool,
    },
    /// Run a local demo: generate keys, shuffle a small range, invert every value.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { rounds, out, seed } => cmd_keygen(rounds, &out, seed),
        Commands::Index { keys, max, idx } => cmd_index(&keys, max, idx),
        Commands::Unindex {
            keys,
            max,
            permutation,
        } => cmd_unindex(&keys, max, permutation),
        Commands::Shuffle {
            keys,
            min,
            max,
            limit,
            background,
        } => cmd_shuffle(&keys, min, max, limit, background),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen(rounds: usize, out: &Path, seed: Option<u64>) -> Result<()> {
    if rounds == 0 {
        bail!("at least one round is required");
    }
    let mut rng = seeded_rng(seed);
    let keys = generate_keys(&mut rng, rounds);
    let bytes = KeyMaterial::new(&keys)
        .context("build key material")?
        .to_bytes()
        .context("serialize key material")?;
    fs::write(out, bytes).with_context(|| format!("write {}", out.display()))?;
    Ok(())
}

fn cmd_index(keys_path: &Path, max: u64, idx: u64) -> Result<()> {
    let network = load_network(keys_path)?;
    let permutation = random_index(idx, max, &network).context("permute index")?;
    println!("{permutation}");
    Ok(())
}

fn cmd_unindex(keys_path: &Path, max: u64, permutation: u64) -> Result<()> {
    let network = load_network(keys_path)?;
    let idx = get_index(permutation, max, &network).context("invert permutation")?;
    println!("{idx}");
    Ok(())
}

fn cmd_shuffle(
    keys_path: &Path,
    min: u64,
    max: u64,
    limit: Option<u64>,
    background: bool,
) -> Result<()> {
    let network = load_network(keys_path)?;
    let take = limit.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if background {
        let stream = ShuffleStream::spawn(min, max, Arc::new(network)).context("start shuffle")?;
        write_values(&mut out, stream.take(take))?;
    } else {
        let sequence = shuffle(min, max, &network).context("start shuffle")?;
        write_values(&mut out, sequence.take(take))?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let keys = generate_keys(&mut rng, DEFAULT_ROUNDS);
    let network = FeistelNetwork::<u64>::with_default_round(keys.clone());

    let (min, max) = (1000u64, 1020u64);
    let values: Vec<u64> = shuffle(min, max, &network)
        .context("start shuffle")?
        .collect();
    for (i, value) in values.iter().enumerate() {
        let idx = get_index(value - min, max - min, &network).context("invert permutation")?;
        if idx != i as u64 {
            bail!("demo inversion failed at position {i}");
        }
    }

    let key_hex: Vec<String> = keys
        .as_slice()
        .iter()
        .map(|k| hex::encode(k.to_be_bytes()))
        .collect();
    println!("demo keys: {}", key_hex.join(" "));
    println!("shuffled [{min}, {max}): {values:?}");
    println!("every value inverts to its position");
    Ok(())
}

fn write_values(out: &mut impl Write, values: impl Iterator<Item = u64>) -> Result<()> {
    for value in values {
        writeln!(out, "{value}").context("write value")?;
    }
    Ok(())
}

fn load_network(path: &Path) -> Result<FeistelNetwork<u64>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let material = KeyMaterial::from_bytes(&bytes).context("deserialize key material")?;
    Ok(material.into_network())
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

//! Command-line settings.

use crate::odds::{DEFAULT_ENDPOINT, DEFAULT_TRIALS};
use crate::selection::ScanOrder;
use clap::{Parser, Subcommand};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "poker-odds", version, about = "Pick Hold'em cards and ask a remote engine for the odds")]
pub struct Settings {
    /// Odds engine endpoint.
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Monte Carlo trials requested per calculation.
    #[arg(long, global = true, default_value_t = DEFAULT_TRIALS)]
    pub trials: u32,

    /// Players preselected on the setup screen.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=9))]
    pub players: u8,

    /// Slot order used when a card is placed by clicking.
    #[arg(long, default_value_t = ScanOrder::DealRound)]
    pub scan_order: ScanOrder,

    /// Do not ring the bell when a card is placed.
    #[arg(long)]
    pub mute: bool,

    /// Where log output goes; the terminal belongs to the UI.
    #[arg(long, default_value = "poker-odds.log")]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Give up on the engine after this many seconds. Waits forever if unset.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Ask for the odds of one spot and print them, without the UI.
    Calc {
        /// Hero hole cards, e.g. "Ah Ks".
        #[arg(long)]
        hero: String,
        /// Board cards, e.g. "2h 9d Tc".
        #[arg(long, default_value = "")]
        board: String,
        /// Opponent hands separated by ';', e.g. "Qh Qs; Ad Kd". Leave a group empty for unknown cards.
        #[arg(long, default_value = "")]
        opps: String,
        /// Table size. Defaults to one more than the number of opponents, at least 2.
        #[arg(long)]
        players: Option<usize>,
    },
}

impl Settings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Open the log file for appending, so earlier sessions survive.
    pub fn open_log_file(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.log_file)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            trials: DEFAULT_TRIALS,
            players: 2,
            scan_order: ScanOrder::default(),
            mute: false,
            log_file: PathBuf::from("poker-odds.log"),
            verbose: false,
            timeout_secs: None,
            command: None,
        }
    }
}

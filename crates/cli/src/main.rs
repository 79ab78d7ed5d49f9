//! MIPS datapath simulator CLI.
//!
//! This binary provides the entry point for running program images. It performs:
//! 1. **Run:** Load a hex-word program, step until halt (or the cycle budget), report final state.
//! 2. **Disasm:** Print the disassembly of a program image without running it.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::sim::loader;
use mipsim_core::sim::{Simulator, StopReason};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Single-cycle MIPS datapath simulator",
    long_about = "Run or disassemble a program image: one hexadecimal word per line, '#' starts a comment.\n\nExamples:\n  mipsim run -f programs/sum.asc\n  mipsim run -f programs/loop.asc --max-cycles 10000 --trace\n  mipsim disasm -f programs/sum.asc"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run {
        /// Program image to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file (memory geometry, start PC, initial registers).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many cycles (overrides the configuration).
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,
    },

    /// Disassemble a program image.
    Disasm {
        /// Program image to disassemble.
        #[arg(short, long)]
        file: PathBuf,

        /// Address of the first word.
        #[arg(long, default_value_t = 0x4000, value_parser = parse_addr)]
        base: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            max_cycles,
            trace,
        } => cmd_run(&file, config.as_deref(), max_cycles, trace),
        Commands::Disasm { file, base } => cmd_disasm(&file, base),
    }
}

/// Accepts decimal or `0x`-prefixed hexadecimal addresses.
fn parse_addr(text: &str) -> Result<u32, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid address `{text}`: {e}"))
}

/// Installs the log subscriber. `RUST_LOG` wins over the built-in default.
fn init_tracing(trace: bool) {
    let default = if trace { "mipsim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints an error and exits with status 1.
fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("[!] FATAL: {msg}");
    process::exit(1);
}

/// Loads the program, runs it to completion, and reports final state.
fn cmd_run(file: &Path, config: Option<&Path>, max_cycles: Option<u64>, trace: bool) {
    let mut config = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .unwrap_or_else(|e| fatal(format!("could not read '{}': {e}", path.display())));
            Config::from_json(&text).unwrap_or_else(|e| fatal(e))
        }
        None => Config::default(),
    };
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    init_tracing(trace || config.general.trace_instructions);

    let mut sim = Simulator::new(&config).unwrap_or_else(|e| fatal(e));
    let words = sim.load_file(file).unwrap_or_else(|e| fatal(e));

    println!("[*] Loaded {} words from {}", words, file.display());
    println!(
        "    load={:#x}  start PC={:#x}  memory={} words  access limit={:#x}",
        config.memory.load_addr,
        config.general.start_pc,
        config.memory.words,
        config.memory.access_limit
    );

    let outcome = sim.run();
    match outcome.stop {
        StopReason::Halted(halt) => {
            println!("\n[*] Halted after {} cycles: {halt}", outcome.cycles);
        }
        StopReason::CycleLimit => {
            println!("\n[*] Cycle limit reached after {} cycles", outcome.cycles);
        }
    }
    println!();
    print!("{}", sim.cpu);
    println!();
    sim.cpu.stats.print();
}

/// Prints `address: word  mnemonic` for every word of the image.
fn cmd_disasm(file: &Path, base: u32) {
    let words = loader::load_program_file(file).unwrap_or_else(|e| fatal(e));
    let mut addr = base;
    for word in words {
        println!("{addr:#010x}: {word:08x}  {}", disassemble(word));
        addr = addr.wrapping_add(4);
    }
}

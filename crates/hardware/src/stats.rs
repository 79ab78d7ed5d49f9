//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator. It provides:
//! 1. **Cycles:** Datapath cycles attempted and instructions retired.
//! 2. **Instruction mix:** Counts per instruction class.
//! 3. **Control flow:** Taken and not-taken branches, and jumps.

use std::fmt;
use std::time::Instant;

use crate::core::cpu::Retired;
use crate::isa::InstrClass;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total datapath cycles started, including one that halted.
    pub cycles: u64,
    /// Number of instructions that completed without halting.
    pub instructions_retired: u64,
    /// Retired count per instruction class, indexed by `InstrClass as usize`.
    per_class: [u64; InstrClass::ALL.len()],
    /// Branches whose equality condition held.
    pub branches_taken: u64,
    /// Number of register writes performed.
    pub reg_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            per_class: [0; InstrClass::ALL.len()],
            branches_taken: 0,
            reg_writes: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    pub fn record(&mut self, retired: &Retired) {
        self.instructions_retired += 1;
        self.per_class[retired.class as usize] += 1;
        if retired.branch_taken {
            self.branches_taken += 1;
        }
        if retired.write.is_some() {
            self.reg_writes += 1;
        }
    }

    /// Number of retired instructions of one class.
    pub const fn count(&self, class: InstrClass) -> u64 {
        self.per_class[class as usize]
    }

    /// Retired loads and stores.
    pub const fn memory_ops(&self) -> u64 {
        self.count(InstrClass::LoadWord) + self.count(InstrClass::StoreWord)
    }

    /// Branches that fell through.
    pub const fn branches_not_taken(&self) -> u64 {
        self.count(InstrClass::BranchEq) - self.branches_taken
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        writeln!(f, "==========================================================")?;
        writeln!(f, "MIPS DATAPATH SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for class in InstrClass::ALL {
            writeln!(f, "  {:<22} {}", class.mnemonic(), self.count(class))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  branch.not_taken       {}", self.branches_not_taken())?;
        writeln!(f, "  reg.writes             {}", self.reg_writes)?;
        write!(f, "==========================================================")
    }
}

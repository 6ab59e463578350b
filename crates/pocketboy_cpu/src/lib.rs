pub mod cpu;

pub use cpu::{Bus, Cpu, ExecError, Flag, Reg16, Reg8, Registers};

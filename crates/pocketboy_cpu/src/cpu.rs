//! Instruction execution engine for the LR35902 (Game Boy) CPU.
//!
//! The core is Z80-like with an 8-bit ALU and a 16-bit address space. It
//! owns the register file and flag semantics, dispatches opcodes through
//! fixed descriptor tables, and talks to the rest of the machine only
//! through the [`Bus`] trait.

mod alu;
mod bus;
mod error;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;
pub mod table;


pub use bus::Bus;
pub use error::ExecError;
pub use regs::{Flag, Reg16, Reg8, Registers};

/// CPU state: the register file (including F, PC, and SP).
///
/// Execution is single-threaded and synchronous; each [`Cpu::step`] call
/// runs exactly one instruction.
#[derive(Clone, Copy, Debug)]
pub struct Cpu {
    pub regs: Registers,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.clear_flags();
    }

    /// Read a register by name (debug/host surface).
    #[inline]
    pub fn reg8(&self, reg: Reg8) -> u8 {
        self.regs.reg8(reg)
    }

    #[inline]
    pub fn set_reg8(&mut self, reg: Reg8, value: u8) {
        self.regs.set_reg8(reg, value);
    }

    /// Read a register pair by name (debug/host surface).
    #[inline]
    pub fn reg16(&self, pair: Reg16) -> u16 {
        self.regs.reg16(pair)
    }

    #[inline]
    pub fn set_reg16(&mut self, pair: Reg16, value: u16) {
        self.regs.set_reg16(pair, value);
    }
}

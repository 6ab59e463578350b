use crate::cpu::table::Cond;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// JR (cc,)r8. The displacement is signed and relative to the address
    /// following the operand. Returns the taken-branch penalty.
    pub(super) fn exec_jr(&mut self, cond: Cond, offset: u8) -> u32 {
        if self.cond_met(cond) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i8 as u16);
            4
        } else {
            0
        }
    }

    pub(super) fn exec_jp(&mut self, cond: Cond, addr: u16) -> u32 {
        if self.cond_met(cond) {
            self.regs.pc = addr;
            4
        } else {
            0
        }
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Cond, addr: u16) -> u32 {
        if self.cond_met(cond) {
            let ret = self.regs.pc;
            self.push16(bus, ret);
            self.regs.pc = addr;
            12
        } else {
            0
        }
    }

    /// RET / RET cc. The unconditional form's full cost (16 T-cycles)
    /// lives in its descriptor; only RET cc pays a taken penalty on top
    /// of its 8-cycle base.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Cond) -> u32 {
        match cond {
            Cond::Always => {
                self.regs.pc = self.pop16(bus);
                0
            }
            _ if self.cond_met(cond) => {
                self.regs.pc = self.pop16(bus);
                12
            }
            _ => 0,
        }
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) {
        let ret = self.regs.pc;
        self.push16(bus, ret);
        self.regs.pc = u16::from(vector);
    }
}

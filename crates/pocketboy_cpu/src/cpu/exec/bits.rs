use crate::cpu::step::Operand;
use crate::cpu::table::ShiftOp;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// CB rotate/shift group on a register or (HL).
    pub(super) fn exec_cb_shift<B: Bus>(
        &mut self,
        bus: &mut B,
        op: ShiftOp,
        reg: u8,
        operand: Operand,
    ) {
        let value = self.operand_or_reg8(bus, operand, reg);
        let result = match op {
            ShiftOp::Rlc => self.alu_rlc(value),
            ShiftOp::Rrc => self.alu_rrc(value),
            ShiftOp::Rl => self.alu_rl(value),
            ShiftOp::Rr => self.alu_rr(value),
            ShiftOp::Sla => self.alu_sla(value),
            ShiftOp::Sra => self.alu_sra(value),
            ShiftOp::Swap => self.alu_swap(value),
            ShiftOp::Srl => self.alu_srl(value),
        };
        self.write_reg8(bus, reg, result);
    }

    /// BIT b,r: Z from the tested bit, N=0, H=1, C preserved. Never
    /// writes back, so BIT b,(HL) performs a single bus read.
    pub(super) fn exec_bit<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: u8, operand: Operand) {
        let value = self.operand_or_reg8(bus, operand, reg);
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
    }

    /// RES/SET b,r: flags untouched.
    pub(super) fn exec_res_set<B: Bus>(
        &mut self,
        bus: &mut B,
        bit: u8,
        reg: u8,
        operand: Operand,
        set: bool,
    ) {
        let value = self.operand_or_reg8(bus, operand, reg);
        let result = if set {
            value | (1 << bit)
        } else {
            value & !(1 << bit)
        };
        self.write_reg8(bus, reg, result);
    }
}

use crate::cpu::table::{AluOp, RotA};
use crate::cpu::{Cpu, Flag};

impl Cpu {
    /// Apply one of the eight accumulator operations to A.
    pub(super) fn exec_alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// RLCA/RRCA/RLA/RRA share the CB rotate helpers, but the unprefixed
    /// forms always clear Z.
    pub(super) fn exec_rotate_a(&mut self, kind: RotA) {
        let a = self.regs.a;
        let result = match kind {
            RotA::Rlca => self.alu_rlc(a),
            RotA::Rrca => self.alu_rrc(a),
            RotA::Rla => self.alu_rl(a),
            RotA::Rra => self.alu_rr(a),
        };
        self.regs.a = result;
        self.set_flag(Flag::Z, false);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
    }
}

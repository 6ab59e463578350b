use crate::cpu::step::Operand;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, reg: u8, operand: Operand) {
        let value = self.operand_or_reg8(bus, operand, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, reg, result);
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, reg: u8, operand: Operand) {
        let value = self.operand_or_reg8(bus, operand, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, reg, result);
    }
}

use crate::cpu::step::Operand;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, dst: u8, src: u8, operand: Operand) {
        let value = self.operand_or_reg8(bus, operand, src);
        self.write_reg8(bus, dst, value);
    }

    pub(super) fn exec_ld_r_imm<B: Bus>(&mut self, bus: &mut B, dst: u8, operand: Operand) {
        self.write_reg8(bus, dst, operand.byte());
    }

    /// LD (BC/DE/HL+/HL-),A. The post-increment/decrement forms update HL
    /// after the store.
    pub(super) fn exec_ld_ind_from_a<B: Bus>(&mut self, bus: &mut B, mode: u8) {
        let addr = self.indirect_addr(mode);
        bus.write8(addr, self.regs.a);
        self.apply_hl_postop(mode, addr);
    }

    /// LD A,(BC/DE/HL+/HL-).
    pub(super) fn exec_ld_a_from_ind<B: Bus>(&mut self, bus: &mut B, mode: u8) {
        let addr = self.indirect_addr(mode);
        self.regs.a = bus.read8(addr);
        self.apply_hl_postop(mode, addr);
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B, addr: u16) {
        let sp = self.regs.sp;
        bus.write8(addr, sp as u8);
        bus.write8(addr.wrapping_add(1), (sp >> 8) as u8);
    }

    #[inline]
    fn indirect_addr(&self, mode: u8) -> u16 {
        match mode {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            _ => self.regs.hl(),
        }
    }

    #[inline]
    fn apply_hl_postop(&mut self, mode: u8, addr: u16) {
        match mode {
            2 => self.regs.set_hl(addr.wrapping_add(1)),
            3 => self.regs.set_hl(addr.wrapping_sub(1)),
            _ => {}
        }
    }
}

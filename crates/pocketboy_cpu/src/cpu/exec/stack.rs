use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// PUSH rr; rp encoding 0=BC, 1=DE, 2=HL, 3=AF.
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, rp: u8) {
        let value = match rp {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        };
        self.push16(bus, value);
    }

    /// POP rr. POP AF goes through `set_af`, which keeps the low nibble
    /// of F clear whatever was on the stack.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, rp: u8) {
        let value = self.pop16(bus);
        match rp {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.set_af(value),
        }
    }
}

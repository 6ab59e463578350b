use super::step::Operand;
use super::table::Cond;
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Read an 8-bit register or (HL) by opcode-table index.
    ///
    /// Encoding: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&mut self, bus: &mut B, index: u8) -> u8 {
        match index {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Write an 8-bit register or (HL) by opcode-table index; the
    /// encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, index: u8, value: u8) {
        match index {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Read a register pair by index: 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(super) fn read_rp(&self, index: u8) -> u16 {
        match index {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_rp(&mut self, index: u8, value: u16) {
        match index {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Source value for an instruction that operates on a register or
    /// (HL): if operand resolution already read the byte (immediate or
    /// indirect), use it; otherwise read the named register. This keeps
    /// (HL) at exactly one bus read per instruction.
    #[inline]
    pub(super) fn operand_or_reg8<B: Bus>(
        &mut self,
        bus: &mut B,
        operand: Operand,
        reg: u8,
    ) -> u8 {
        match operand {
            Operand::Byte(value) => value,
            _ => {
                debug_assert!(reg != 6, "(HL) source must come from operand resolution");
                self.read_reg8(bus, reg)
            }
        }
    }

    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = u16::from(self.fetch8(bus));
        let hi = u16::from(self.fetch8(bus));
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn push16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        // Stack grows downward; memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, (value >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, value as u8);
    }

    #[inline]
    pub(super) fn pop16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = u16::from(bus.read8(self.regs.sp));
        let hi = u16::from(bus.read8(self.regs.sp.wrapping_add(1)));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn cond_met(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::NotZero => !self.get_flag(Flag::Z),
            Cond::Zero => self.get_flag(Flag::Z),
            Cond::NotCarry => !self.get_flag(Flag::C),
            Cond::Carry => self.get_flag(Flag::C),
        }
    }
}

use super::{Cpu, Flag};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true). Every ADD
    /// variant in the instruction set, including `ADD A,A`, goes through
    /// this one routine so the flag outputs always match the general
    /// two-operand formula.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flag::C));

        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (a & 0x0F) + (value & 0x0F) + carry_in > 0x0F);
        self.set_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// Carry is a borrow here: C is set when `A < value + carry_in`, and
    /// H is set when the low nibble borrows.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flag::C));

        let operand = u16::from(value) + u16::from(carry_in);
        let result = (u16::from(a)).wrapping_sub(operand) as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(
            Flag::H,
            u16::from(a & 0x0F) < u16::from(value & 0x0F) + u16::from(carry_in),
        );
        self.set_flag(Flag::C, u16::from(a) < operand);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
        // N and C are already cleared.
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    /// Compare A with `value`: the SUB flag computation without the
    /// writeback. A itself is never modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        self.alu_sub(value, false);
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) + 1 > 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and C
    /// the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, u32::from(hl) + u32::from(value) > 0xFFFF);

        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// 16-bit add of a signed 8-bit immediate to a 16-bit base, used by
    /// ADD SP,r8 and LD HL,SP+r8.
    ///
    /// Z and N are cleared; H and C are computed from the low byte of the
    /// addition, as the hardware does.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.set_flag(Flag::Z, false);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N, and A to compute a correction value; updates A, Z,
    /// H, C and leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::N) {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            // After a subtraction.
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// Rotate left, bit 7 into both C and bit 0.
    #[inline]
    pub(super) fn alu_rlc(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(1);
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, (value & 0x80) != 0);
        result
    }

    /// Rotate right, bit 0 into both C and bit 7.
    #[inline]
    pub(super) fn alu_rrc(&mut self, value: u8) -> u8 {
        let result = value.rotate_right(1);
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, (value & 0x01) != 0);
        result
    }

    /// Rotate left through the carry flag.
    #[inline]
    pub(super) fn alu_rl(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.get_flag(Flag::C));
        let result = (value << 1) | carry_in;
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, (value & 0x80) != 0);
        result
    }

    /// Rotate right through the carry flag.
    #[inline]
    pub(super) fn alu_rr(&mut self, value: u8) -> u8 {
        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
        let result = (value >> 1) | carry_in;
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, (value & 0x01) != 0);
        result
    }

    /// Arithmetic shift left.
    #[inline]
    pub(super) fn alu_sla(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, (value & 0x80) != 0);
        result
    }

    /// Arithmetic shift right (bit 7 is preserved).
    #[inline]
    pub(super) fn alu_sra(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (value & 0x80);
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, (value & 0x01) != 0);
        result
    }

    /// Swap the high and low nibbles.
    #[inline]
    pub(super) fn alu_swap(&mut self, value: u8) -> u8 {
        let result = (value << 4) | (value >> 4);
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        result
    }

    /// Logical shift right (bit 7 becomes zero).
    #[inline]
    pub(super) fn alu_srl(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, (value & 0x01) != 0);
        result
    }
}

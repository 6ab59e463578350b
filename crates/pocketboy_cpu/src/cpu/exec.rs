mod alu;
mod bits;
mod control;
mod incdec;
mod ld;
mod stack;

use super::step::Operand;
use super::table::Op;
use super::{Bus, Cpu};

impl Cpu {
    /// Invoke the handler for a decoded operation.
    ///
    /// Returns the extra T-cycles on top of the descriptor's base cost
    /// (non-zero only for taken conditional branches).
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, op: Op, operand: Operand) -> u32 {
        match op {
            Op::Unimplemented => {
                unreachable!("sentinel descriptors are rejected before execution")
            }
            Op::CbPrefix => {
                unreachable!("the CB prefix is resolved during dispatch")
            }

            Op::Nop => 0,

            Op::LdRR { dst, src } => {
                self.exec_ld_r_r(bus, dst, src, operand);
                0
            }
            Op::LdRImm { dst } => {
                self.exec_ld_r_imm(bus, dst, operand);
                0
            }
            Op::LdRpImm { rp } => {
                self.write_rp(rp, operand.word());
                0
            }
            Op::LdIndFromA { mode } => {
                self.exec_ld_ind_from_a(bus, mode);
                0
            }
            Op::LdAFromInd { mode } => {
                self.exec_ld_a_from_ind(bus, mode);
                0
            }
            Op::LdA16Sp => {
                self.exec_ld_a16_sp(bus, operand.word());
                0
            }
            Op::LdA16FromA => {
                bus.write8(operand.word(), self.regs.a);
                0
            }
            Op::LdAFromA16 => {
                self.regs.a = bus.read8(operand.word());
                0
            }
            Op::LdhA8FromA => {
                let addr = 0xFF00u16.wrapping_add(u16::from(operand.byte()));
                bus.write8(addr, self.regs.a);
                0
            }
            Op::LdhAFromA8 => {
                let addr = 0xFF00u16.wrapping_add(u16::from(operand.byte()));
                self.regs.a = bus.read8(addr);
                0
            }
            Op::LdhCFromA => {
                let addr = 0xFF00u16.wrapping_add(u16::from(self.regs.c));
                bus.write8(addr, self.regs.a);
                0
            }
            Op::LdhAFromC => {
                let addr = 0xFF00u16.wrapping_add(u16::from(self.regs.c));
                self.regs.a = bus.read8(addr);
                0
            }
            Op::LdSpHl => {
                self.regs.sp = self.regs.hl();
                0
            }
            Op::LdHlSpR8 => {
                let result = self.alu_add16_signed(self.regs.sp, operand.byte());
                self.regs.set_hl(result);
                0
            }

            Op::Alu { op, src } => {
                let value = self.operand_or_reg8(bus, operand, src);
                self.exec_alu(op, value);
                0
            }
            Op::AluImm { op } => {
                self.exec_alu(op, operand.byte());
                0
            }
            Op::Inc8 { reg } => {
                self.exec_inc8(bus, reg, operand);
                0
            }
            Op::Dec8 { reg } => {
                self.exec_dec8(bus, reg, operand);
                0
            }
            Op::Inc16 { rp } => {
                self.write_rp(rp, self.read_rp(rp).wrapping_add(1));
                0
            }
            Op::Dec16 { rp } => {
                self.write_rp(rp, self.read_rp(rp).wrapping_sub(1));
                0
            }
            Op::AddHl { rp } => {
                let value = self.read_rp(rp);
                self.alu_add16_hl(value);
                0
            }
            Op::AddSpR8 => {
                self.regs.sp = self.alu_add16_signed(self.regs.sp, operand.byte());
                0
            }

            Op::RotateA(kind) => {
                self.exec_rotate_a(kind);
                0
            }
            Op::Daa => {
                self.alu_daa();
                0
            }
            Op::Cpl => {
                self.exec_cpl();
                0
            }
            Op::Scf => {
                self.exec_scf();
                0
            }
            Op::Ccf => {
                self.exec_ccf();
                0
            }

            Op::Jr { cond } => self.exec_jr(cond, operand.byte()),
            Op::Jp { cond } => self.exec_jp(cond, operand.word()),
            Op::JpHl => {
                self.regs.pc = self.regs.hl();
                0
            }
            Op::Call { cond } => self.exec_call(bus, cond, operand.word()),
            Op::Ret { cond } => self.exec_ret(bus, cond),
            Op::Rst { vector } => {
                self.exec_rst(bus, vector);
                0
            }
            Op::Push { rp } => {
                self.exec_push(bus, rp);
                0
            }
            Op::Pop { rp } => {
                self.exec_pop(bus, rp);
                0
            }

            Op::CbShift { op, reg } => {
                self.exec_cb_shift(bus, op, reg, operand);
                0
            }
            Op::Bit { bit, reg } => {
                self.exec_bit(bus, bit, reg, operand);
                0
            }
            Op::Res { bit, reg } => {
                self.exec_res_set(bus, bit, reg, operand, false);
                0
            }
            Op::Set { bit, reg } => {
                self.exec_res_set(bus, bit, reg, operand, true);
                0
            }
        }
    }
}

use super::table::{self, Op, OperandKind};
use super::{Bus, Cpu, ExecError};

/// Operand value produced by the operand-resolution stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

impl Operand {
    #[inline]
    pub(super) fn byte(self) -> u8 {
        match self {
            Operand::Byte(value) => value,
            _ => {
                debug_assert!(false, "descriptor promised a byte operand");
                0
            }
        }
    }

    #[inline]
    pub(super) fn word(self) -> u16 {
        match self {
            Operand::Word(value) => value,
            _ => {
                debug_assert!(false, "descriptor promised a word operand");
                0
            }
        }
    }
}

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles it
    /// consumed.
    ///
    /// One call runs one full fetch/operand-resolution/execute pass and
    /// returns: the opcode byte is read at PC (PC advances past it), the
    /// dispatch table supplies the descriptor, immediates are fetched
    /// from PC and (HL) operands read through the bus, and the handler
    /// runs to completion. Given identical CPU state and identical bus
    /// responses the result is always the same, so callers can single-step
    /// deterministically.
    ///
    /// An opcode that resolves to the sentinel descriptor returns
    /// [`ExecError::UnimplementedOpcode`]; PC has advanced past the
    /// opcode byte but no other state changed.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, ExecError> {
        let addr = self.regs.pc;
        let opcode = self.fetch8(bus);
        self.dispatch(bus, opcode, addr)
    }

    /// Run a single opcode's handler directly, bypassing the opcode-byte
    /// fetch.
    ///
    /// Operand resolution still consults PC and the bus exactly as `step`
    /// would, so the side effects match `step` for a program whose opcode
    /// byte is already known. Intended for testing opcodes in isolation.
    pub fn execute_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<u32, ExecError> {
        let addr = self.regs.pc;
        self.dispatch(bus, opcode, addr)
    }

    fn dispatch<B: Bus>(&mut self, bus: &mut B, opcode: u8, addr: u16) -> Result<u32, ExecError> {
        if opcode == 0xCB {
            // The CB table is total, so prefixed dispatch cannot fail.
            // Its cycle costs already include the prefix fetch.
            let cb = self.fetch8(bus);
            let desc = table::cb_descriptor(cb);
            let operand = self.resolve_operand(bus, desc.operand);
            let extra = self.execute(bus, desc.op, operand);
            return Ok(desc.cycles + extra);
        }

        let desc = table::base_descriptor(opcode);
        if desc.op == Op::Unimplemented {
            log::error!(
                "unimplemented opcode 0x{opcode:02X} at PC=0x{addr:04X} \
                 (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            return Err(ExecError::UnimplementedOpcode { opcode, addr });
        }

        let operand = self.resolve_operand(bus, desc.operand);
        let extra = self.execute(bus, desc.op, operand);
        Ok(desc.cycles + extra)
    }

    fn resolve_operand<B: Bus>(&mut self, bus: &mut B, kind: OperandKind) -> Operand {
        match kind {
            OperandKind::None => Operand::None,
            OperandKind::Imm8 => Operand::Byte(self.fetch8(bus)),
            OperandKind::Imm16 => Operand::Word(self.fetch16(bus)),
            OperandKind::IndirectHl => Operand::Byte(bus.read8(self.regs.hl())),
        }
    }
}

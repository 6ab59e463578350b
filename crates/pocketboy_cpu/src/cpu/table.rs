//! Opcode dispatch tables.
//!
//! Two fixed 256-entry tables map every base and CB-prefixed opcode value
//! to an immutable [`OpcodeDescriptor`]. Both tables are built exactly
//! once by a deterministic routine and never mutated afterwards; opcodes
//! the core does not define resolve to the explicit
//! [`Op::Unimplemented`] sentinel rather than a silent no-op.

use lazy_static::lazy_static;

/// How the operand for an opcode is obtained before its handler runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// No operand fetch; the handler works on registers only (or performs
    /// its own writes).
    None,
    /// One immediate byte at PC; PC advances by 1.
    Imm8,
    /// One immediate little-endian word at PC; PC advances by 2.
    Imm16,
    /// A byte read at the address in HL; PC does not advance.
    IndirectHl,
}

/// The eight accumulator operations of the 0x80–0xBF block and their
/// immediate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// Branch conditions for JR/JP/CALL/RET.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Always,
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

/// The four unprefixed rotate-A instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotA {
    Rlca,
    Rrca,
    Rla,
    Rra,
}

/// Rotate/shift group of the CB-prefixed space (x = 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

/// Decoded behaviour of one opcode.
///
/// Register indices follow the standard Game Boy opcode-table encoding:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A. Register-pair indices are
/// 0=BC, 1=DE, 2=HL, 3=SP (3=AF for PUSH/POP).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Sentinel for opcodes with no defined behaviour in this core.
    Unimplemented,
    Nop,
    /// LD r,r' (and LD (HL),r / LD r,(HL)).
    LdRR { dst: u8, src: u8 },
    /// LD r,d8 / LD (HL),d8.
    LdRImm { dst: u8 },
    /// LD rr,d16.
    LdRpImm { rp: u8 },
    /// LD (BC/DE/HL+/HL-),A; mode 0..=3 in that order.
    LdIndFromA { mode: u8 },
    /// LD A,(BC/DE/HL+/HL-).
    LdAFromInd { mode: u8 },
    /// LD (a16),SP.
    LdA16Sp,
    /// LD (a16),A.
    LdA16FromA,
    /// LD A,(a16).
    LdAFromA16,
    /// LDH (a8),A.
    LdhA8FromA,
    /// LDH A,(a8).
    LdhAFromA8,
    /// LD (0xFF00+C),A.
    LdhCFromA,
    /// LD A,(0xFF00+C).
    LdhAFromC,
    LdSpHl,
    /// LD HL,SP+r8.
    LdHlSpR8,
    Alu { op: AluOp, src: u8 },
    AluImm { op: AluOp },
    Inc8 { reg: u8 },
    Dec8 { reg: u8 },
    Inc16 { rp: u8 },
    Dec16 { rp: u8 },
    AddHl { rp: u8 },
    AddSpR8,
    RotateA(RotA),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jr { cond: Cond },
    Jp { cond: Cond },
    JpHl,
    Call { cond: Cond },
    Ret { cond: Cond },
    Rst { vector: u8 },
    Push { rp: u8 },
    Pop { rp: u8 },
    /// 0xCB; the next byte selects an entry in the CB table.
    CbPrefix,
    /// CB rotate/shift on a register or (HL).
    CbShift { op: ShiftOp, reg: u8 },
    /// CB BIT b,r: test a bit, C preserved.
    Bit { bit: u8, reg: u8 },
    /// CB RES b,r: clear a bit, flags untouched.
    Res { bit: u8, reg: u8 },
    /// CB SET b,r: set a bit, flags untouched.
    Set { bit: u8, reg: u8 },
}

/// One immutable dispatch-table entry.
///
/// `cycles` is the T-cycle cost of the instruction; conditional
/// control-flow entries store the not-taken cost and the handler reports
/// the taken penalty on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeDescriptor {
    pub op: Op,
    pub operand: OperandKind,
    pub cycles: u32,
}

impl OpcodeDescriptor {
    pub const UNIMPLEMENTED: OpcodeDescriptor = OpcodeDescriptor {
        op: Op::Unimplemented,
        operand: OperandKind::None,
        cycles: 0,
    };

    const fn new(op: Op, operand: OperandKind, cycles: u32) -> Self {
        OpcodeDescriptor { op, operand, cycles }
    }
}

lazy_static! {
    static ref BASE_TABLE: [OpcodeDescriptor; 256] = build_base_table();
    static ref CB_TABLE: [OpcodeDescriptor; 256] = build_cb_table();
}

/// Look up the descriptor for a base-space opcode.
#[inline]
pub fn base_descriptor(opcode: u8) -> &'static OpcodeDescriptor {
    &BASE_TABLE[opcode as usize]
}

/// Look up the descriptor for a CB-prefixed opcode. The stored cycle
/// costs include the prefix byte fetch.
#[inline]
pub fn cb_descriptor(opcode: u8) -> &'static OpcodeDescriptor {
    &CB_TABLE[opcode as usize]
}

/// Base opcodes that deliberately resolve to the sentinel descriptor:
/// the eleven hardware opcode holes plus the interrupt/power instructions
/// (HALT, STOP, DI, EI, RETI) that belong to the interrupt controller
/// integration rather than this core.
pub const UNDEFINED_OPCODES: [u8; 16] = [
    0x10, 0x76, 0xD3, 0xD9, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF3, 0xF4, 0xFB, 0xFC,
    0xFD,
];

fn build_base_table() -> [OpcodeDescriptor; 256] {
    use OperandKind::{Imm16, Imm8, IndirectHl, None};

    let mut table = [OpcodeDescriptor::UNIMPLEMENTED; 256];
    let mut define = |opcode: u8, op: Op, operand: OperandKind, cycles: u32| {
        let entry = &mut table[opcode as usize];
        debug_assert!(
            entry.op == Op::Unimplemented,
            "duplicate dispatch entry for opcode {opcode:#04X}"
        );
        *entry = OpcodeDescriptor::new(op, operand, cycles);
    };

    define(0x00, Op::Nop, None, 4);
    define(0x08, Op::LdA16Sp, Imm16, 20);

    // Register-pair immediates, inc/dec, and ADD HL,rr (rp = BC/DE/HL/SP).
    for rp in 0..4u8 {
        let base = rp << 4;
        define(base | 0x01, Op::LdRpImm { rp }, Imm16, 12);
        define(base | 0x03, Op::Inc16 { rp }, None, 8);
        define(base | 0x09, Op::AddHl { rp }, None, 8);
        define(base | 0x0B, Op::Dec16 { rp }, None, 8);
    }

    // Indirect accumulator loads: (BC), (DE), (HL+), (HL-).
    for mode in 0..4u8 {
        let base = mode << 4;
        define(base | 0x02, Op::LdIndFromA { mode }, None, 8);
        define(base | 0x0A, Op::LdAFromInd { mode }, None, 8);
    }

    // INC r / DEC r / LD r,d8 for every register destination including (HL).
    for reg in 0..8u8 {
        let base = reg << 3;
        let operand = if reg == 6 { IndirectHl } else { None };
        define(base | 0x04, Op::Inc8 { reg }, operand, if reg == 6 { 12 } else { 4 });
        define(base | 0x05, Op::Dec8 { reg }, operand, if reg == 6 { 12 } else { 4 });
        define(base | 0x06, Op::LdRImm { dst: reg }, Imm8, if reg == 6 { 12 } else { 8 });
    }

    define(0x07, Op::RotateA(RotA::Rlca), None, 4);
    define(0x0F, Op::RotateA(RotA::Rrca), None, 4);
    define(0x17, Op::RotateA(RotA::Rla), None, 4);
    define(0x1F, Op::RotateA(RotA::Rra), None, 4);

    define(0x18, Op::Jr { cond: Cond::Always }, Imm8, 8);
    define(0x20, Op::Jr { cond: Cond::NotZero }, Imm8, 8);
    define(0x28, Op::Jr { cond: Cond::Zero }, Imm8, 8);
    define(0x30, Op::Jr { cond: Cond::NotCarry }, Imm8, 8);
    define(0x38, Op::Jr { cond: Cond::Carry }, Imm8, 8);

    define(0x27, Op::Daa, None, 4);
    define(0x2F, Op::Cpl, None, 4);
    define(0x37, Op::Scf, None, 4);
    define(0x3F, Op::Ccf, None, 4);

    // LD r,r' block. 0x76 is the HALT hole and stays undefined.
    for opcode in 0x40..=0x7Fu8 {
        if opcode == 0x76 {
            continue;
        }
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let operand = if src == 6 { IndirectHl } else { None };
        let cycles = if src == 6 || dst == 6 { 8 } else { 4 };
        define(opcode, Op::LdRR { dst, src }, operand, cycles);
    }

    // Accumulator ALU block: ADD/ADC/SUB/SBC/AND/XOR/OR/CP against r or (HL).
    for opcode in 0x80..=0xBFu8 {
        let op = alu_op_from_index((opcode >> 3) & 0x07);
        let src = opcode & 0x07;
        let operand = if src == 6 { IndirectHl } else { None };
        define(opcode, Op::Alu { op, src }, operand, if src == 6 { 8 } else { 4 });
    }

    // ...and the d8 immediate forms.
    for index in 0..8u8 {
        let opcode = 0xC6 | (index << 3);
        define(opcode, Op::AluImm { op: alu_op_from_index(index) }, Imm8, 8);
    }

    define(0xC0, Op::Ret { cond: Cond::NotZero }, None, 8);
    define(0xC8, Op::Ret { cond: Cond::Zero }, None, 8);
    define(0xD0, Op::Ret { cond: Cond::NotCarry }, None, 8);
    define(0xD8, Op::Ret { cond: Cond::Carry }, None, 8);
    define(0xC9, Op::Ret { cond: Cond::Always }, None, 16);

    define(0xC2, Op::Jp { cond: Cond::NotZero }, Imm16, 12);
    define(0xCA, Op::Jp { cond: Cond::Zero }, Imm16, 12);
    define(0xD2, Op::Jp { cond: Cond::NotCarry }, Imm16, 12);
    define(0xDA, Op::Jp { cond: Cond::Carry }, Imm16, 12);
    define(0xC3, Op::Jp { cond: Cond::Always }, Imm16, 12);
    define(0xE9, Op::JpHl, None, 4);

    define(0xC4, Op::Call { cond: Cond::NotZero }, Imm16, 12);
    define(0xCC, Op::Call { cond: Cond::Zero }, Imm16, 12);
    define(0xD4, Op::Call { cond: Cond::NotCarry }, Imm16, 12);
    define(0xDC, Op::Call { cond: Cond::Carry }, Imm16, 12);
    define(0xCD, Op::Call { cond: Cond::Always }, Imm16, 12);

    // PUSH/POP use rp encoding 3 = AF.
    for rp in 0..4u8 {
        let base = 0xC0 | (rp << 4);
        define(base | 0x01, Op::Pop { rp }, None, 12);
        define(base | 0x05, Op::Push { rp }, None, 16);
    }

    // RST vectors 0x00, 0x08, ..., 0x38.
    for index in 0..8u8 {
        let opcode = 0xC7 | (index << 3);
        define(opcode, Op::Rst { vector: opcode & 0x38 }, None, 16);
    }

    define(0xCB, Op::CbPrefix, None, 4);

    define(0xE0, Op::LdhA8FromA, Imm8, 12);
    define(0xF0, Op::LdhAFromA8, Imm8, 12);
    define(0xE2, Op::LdhCFromA, None, 8);
    define(0xF2, Op::LdhAFromC, None, 8);
    define(0xE8, Op::AddSpR8, Imm8, 16);
    define(0xEA, Op::LdA16FromA, Imm16, 16);
    define(0xFA, Op::LdAFromA16, Imm16, 16);
    define(0xF8, Op::LdHlSpR8, Imm8, 12);
    define(0xF9, Op::LdSpHl, None, 8);

    table
}

fn build_cb_table() -> [OpcodeDescriptor; 256] {
    let mut table = [OpcodeDescriptor::UNIMPLEMENTED; 256];

    for index in 0..=255u8 {
        let x = index >> 6;
        let y = (index >> 3) & 0x07;
        let reg = index & 0x07;

        let operand = if reg == 6 {
            OperandKind::IndirectHl
        } else {
            OperandKind::None
        };

        let (op, cycles) = match x {
            0 => {
                let shift = match y {
                    0 => ShiftOp::Rlc,
                    1 => ShiftOp::Rrc,
                    2 => ShiftOp::Rl,
                    3 => ShiftOp::Rr,
                    4 => ShiftOp::Sla,
                    5 => ShiftOp::Sra,
                    6 => ShiftOp::Swap,
                    _ => ShiftOp::Srl,
                };
                (Op::CbShift { op: shift, reg }, if reg == 6 { 16 } else { 8 })
            }
            // BIT only reads (HL), so its memory form is one cycle shorter
            // than RES/SET.
            1 => (Op::Bit { bit: y, reg }, if reg == 6 { 12 } else { 8 }),
            2 => (Op::Res { bit: y, reg }, if reg == 6 { 16 } else { 8 }),
            _ => (Op::Set { bit: y, reg }, if reg == 6 { 16 } else { 8 }),
        };

        table[index as usize] = OpcodeDescriptor::new(op, operand, cycles);
    }

    table
}

fn alu_op_from_index(index: u8) -> AluOp {
    match index {
        0 => AluOp::Add,
        1 => AluOp::Adc,
        2 => AluOp::Sub,
        3 => AluOp::Sbc,
        4 => AluOp::And,
        5 => AluOp::Xor,
        6 => AluOp::Or,
        _ => AluOp::Cp,
    }
}

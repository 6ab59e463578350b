use std::fmt;

/// Errors reported by the instruction execution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecError {
    /// The dispatch table resolved to the sentinel descriptor: the opcode
    /// has no defined behaviour in this core. Silently treating these as
    /// no-ops would corrupt the emulated program's control flow, so the
    /// condition is surfaced to the caller instead.
    ///
    /// `addr` is the address the opcode byte was fetched from; after a
    /// failed `step` the PC has already advanced past it.
    UnimplementedOpcode { opcode: u8, addr: u16 },
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExecError::UnimplementedOpcode { opcode, addr } => {
                write!(f, "unimplemented opcode 0x{opcode:02X} at 0x{addr:04X}")
            }
        }
    }
}

impl std::error::Error for ExecError {}

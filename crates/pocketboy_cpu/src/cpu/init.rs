use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
        };
        cpu.apply_power_up_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Idempotent, and callable between any two steps; the result never
    /// depends on prior state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.apply_power_up_state();
    }

    /// Register values after the DMG boot ROM hands control to cartridge
    /// code at 0x0100, as documented in Pan Docs and used by common
    /// emulator implementations.
    fn apply_power_up_state(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}

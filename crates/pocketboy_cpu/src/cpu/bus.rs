/// Abstraction over the memory bus.
///
/// The CPU core consumes exactly two primitives: a byte read and a byte
/// write at a 16-bit address. Address decoding (cartridge, VRAM, IO
/// registers, echo RAM) lives entirely on the other side of this trait.
///
/// The bus is shared with other subsystems, so the core routes every
/// access through it and never caches byte values across steps.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

//! Disassembly listing built from the opcode table.

use std::collections::BTreeMap;

use emu_core::Bus;

use crate::addressing::AddrMode;
use crate::opcodes;

/// Disassemble every instruction starting in `start..=stop`.
///
/// Returns one line per instruction keyed by its address, e.g.
/// `$C000: LDA #$42 {IMM}`. Implicit-mode lines carry two spaces before
/// the tag, e.g. `$C002: ASL  {IMP}`. The last instruction may read operand
/// bytes past `stop`. Reading goes through the bus, so side-effecting
/// devices see it.
pub fn disassemble(bus: &mut dyn Bus, start: u16, stop: u16) -> BTreeMap<u16, String> {
    let mut lines = BTreeMap::new();
    let mut addr = u32::from(start);

    while addr <= u32::from(stop) {
        let line_addr = addr as u16;
        let (text, len) = decode(bus, line_addr);
        lines.insert(line_addr, text);
        addr += len;
    }

    lines
}

/// Render the instruction at `addr`; returns the text and its byte length.
fn decode(bus: &mut dyn Bus, addr: u16) -> (String, u32) {
    let ins = opcodes::lookup(bus.read(addr));
    let b1 = bus.read(addr.wrapping_add(1));
    let b2 = bus.read(addr.wrapping_add(2));
    let word = u16::from_le_bytes([b1, b2]);

    let operand = match ins.mode {
        AddrMode::Imp => " ".to_string(),
        AddrMode::Imm => format!("#${b1:02X} "),
        AddrMode::Zp0 => format!("${b1:02X} "),
        AddrMode::Zpx => format!("${b1:02X}, X "),
        AddrMode::Zpy => format!("${b1:02X}, Y "),
        AddrMode::Izx => format!("(${b1:02X}, X) "),
        AddrMode::Izy => format!("(${b1:02X}), Y "),
        AddrMode::Abs => format!("${word:04X} "),
        AddrMode::Abx => format!("${word:04X}, X "),
        AddrMode::Aby => format!("${word:04X}, Y "),
        AddrMode::Ind => format!("(${word:04X}) "),
        AddrMode::Rel => {
            let target = addr.wrapping_add(2).wrapping_add(b1 as i8 as u16);
            format!("${b1:02X} [${target:04X}] ")
        }
    };

    let text = format!("${addr:04X}: {} {operand}{{{}}}", ins.name, ins.mode.tag());
    (text, 1 + u32::from(ins.mode.operand_len()))
}

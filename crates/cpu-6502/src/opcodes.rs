//! Opcode table.
//!
//! Maps every opcode byte to its mnemonic, operation, addressing mode and
//! base cycle count. Undocumented opcodes are named `???` and decode to
//! `Nop` or `Xxx`, both of which only burn their tabulated cycles.

use crate::addressing::AddrMode;
use crate::execute::Op;

/// Decoded form of one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Mnemonic, `???` for undocumented opcodes.
    pub name: &'static str,
    pub op: Op,
    pub mode: AddrMode,
    /// Cycles before any page-cross or branch adjustment.
    pub cycles: u8,
}

impl Instruction {
    /// True for opcodes the table leaves unnamed.
    #[must_use]
    pub fn is_undocumented(&self) -> bool {
        self.name == "???"
    }
}

const fn ins(name: &'static str, op: Op, mode: AddrMode, cycles: u8) -> Instruction {
    Instruction {
        name,
        op,
        mode,
        cycles,
    }
}

/// Look up the descriptor for `opcode`.
#[must_use]
pub fn lookup(opcode: u8) -> &'static Instruction {
    &INSTRUCTIONS[usize::from(opcode)]
}

/// Every opcode, indexed by its byte value.
pub static INSTRUCTIONS: [Instruction; 256] = [
    // $0x
    ins("BRK", Op::Brk, AddrMode::Imm, 7), // $00
    ins("ORA", Op::Ora, AddrMode::Izx, 6), // $01
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $02
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $03
    ins("???", Op::Nop, AddrMode::Imp, 3), // $04
    ins("ORA", Op::Ora, AddrMode::Zp0, 3), // $05
    ins("ASL", Op::Asl, AddrMode::Zp0, 5), // $06
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $07
    ins("PHP", Op::Php, AddrMode::Imp, 3), // $08
    ins("ORA", Op::Ora, AddrMode::Imm, 2), // $09
    ins("ASL", Op::Asl, AddrMode::Imp, 2), // $0A
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $0B
    ins("???", Op::Nop, AddrMode::Imp, 4), // $0C
    ins("ORA", Op::Ora, AddrMode::Abs, 4), // $0D
    ins("ASL", Op::Asl, AddrMode::Abs, 6), // $0E
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $0F

    // $1x
    ins("BPL", Op::Bpl, AddrMode::Rel, 2), // $10
    ins("ORA", Op::Ora, AddrMode::Izy, 5), // $11
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $12
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $13
    ins("???", Op::Nop, AddrMode::Imp, 4), // $14
    ins("ORA", Op::Ora, AddrMode::Zpx, 4), // $15
    ins("ASL", Op::Asl, AddrMode::Zpx, 6), // $16
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $17
    ins("CLC", Op::Clc, AddrMode::Imp, 2), // $18
    ins("ORA", Op::Ora, AddrMode::Aby, 4), // $19
    ins("???", Op::Nop, AddrMode::Imp, 2), // $1A
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $1B
    ins("???", Op::Nop, AddrMode::Imp, 4), // $1C
    ins("ORA", Op::Ora, AddrMode::Abx, 4), // $1D
    ins("ASL", Op::Asl, AddrMode::Abx, 7), // $1E
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $1F

    // $2x
    ins("JSR", Op::Jsr, AddrMode::Abs, 6), // $20
    ins("AND", Op::And, AddrMode::Izx, 6), // $21
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $22
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $23
    ins("BIT", Op::Bit, AddrMode::Zp0, 3), // $24
    ins("AND", Op::And, AddrMode::Zp0, 3), // $25
    ins("ROL", Op::Rol, AddrMode::Zp0, 5), // $26
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $27
    ins("PLP", Op::Plp, AddrMode::Imp, 4), // $28
    ins("AND", Op::And, AddrMode::Imm, 2), // $29
    ins("ROL", Op::Rol, AddrMode::Imp, 2), // $2A
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $2B
    ins("BIT", Op::Bit, AddrMode::Abs, 4), // $2C
    ins("AND", Op::And, AddrMode::Abs, 4), // $2D
    ins("ROL", Op::Rol, AddrMode::Abs, 6), // $2E
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $2F

    // $3x
    ins("BMI", Op::Bmi, AddrMode::Rel, 2), // $30
    ins("AND", Op::And, AddrMode::Izy, 5), // $31
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $32
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $33
    ins("???", Op::Nop, AddrMode::Imp, 4), // $34
    ins("AND", Op::And, AddrMode::Zpx, 4), // $35
    ins("ROL", Op::Rol, AddrMode::Zpx, 6), // $36
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $37
    ins("SEC", Op::Sec, AddrMode::Imp, 2), // $38
    ins("AND", Op::And, AddrMode::Aby, 4), // $39
    ins("???", Op::Nop, AddrMode::Imp, 2), // $3A
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $3B
    ins("???", Op::Nop, AddrMode::Imp, 4), // $3C
    ins("AND", Op::And, AddrMode::Abx, 4), // $3D
    ins("ROL", Op::Rol, AddrMode::Abx, 7), // $3E
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $3F

    // $4x
    ins("RTI", Op::Rti, AddrMode::Imp, 6), // $40
    ins("EOR", Op::Eor, AddrMode::Izx, 6), // $41
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $42
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $43
    ins("???", Op::Nop, AddrMode::Imp, 3), // $44
    ins("EOR", Op::Eor, AddrMode::Zp0, 3), // $45
    ins("LSR", Op::Lsr, AddrMode::Zp0, 5), // $46
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $47
    ins("PHA", Op::Pha, AddrMode::Imp, 3), // $48
    ins("EOR", Op::Eor, AddrMode::Imm, 2), // $49
    ins("LSR", Op::Lsr, AddrMode::Imp, 2), // $4A
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $4B
    ins("JMP", Op::Jmp, AddrMode::Abs, 3), // $4C
    ins("EOR", Op::Eor, AddrMode::Abs, 4), // $4D
    ins("LSR", Op::Lsr, AddrMode::Abs, 6), // $4E
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $4F

    // $5x
    ins("BVC", Op::Bvc, AddrMode::Rel, 2), // $50
    ins("EOR", Op::Eor, AddrMode::Izy, 5), // $51
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $52
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $53
    ins("???", Op::Nop, AddrMode::Imp, 4), // $54
    ins("EOR", Op::Eor, AddrMode::Zpx, 4), // $55
    ins("LSR", Op::Lsr, AddrMode::Zpx, 6), // $56
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $57
    ins("CLI", Op::Cli, AddrMode::Imp, 2), // $58
    ins("EOR", Op::Eor, AddrMode::Aby, 4), // $59
    ins("???", Op::Nop, AddrMode::Imp, 2), // $5A
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $5B
    ins("???", Op::Nop, AddrMode::Imp, 4), // $5C
    ins("EOR", Op::Eor, AddrMode::Abx, 4), // $5D
    ins("LSR", Op::Lsr, AddrMode::Abx, 7), // $5E
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $5F

    // $6x
    ins("RTS", Op::Rts, AddrMode::Imp, 6), // $60
    ins("ADC", Op::Adc, AddrMode::Izx, 6), // $61
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $62
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $63
    ins("???", Op::Nop, AddrMode::Imp, 3), // $64
    ins("ADC", Op::Adc, AddrMode::Zp0, 3), // $65
    ins("ROR", Op::Ror, AddrMode::Zp0, 5), // $66
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $67
    ins("PLA", Op::Pla, AddrMode::Imp, 4), // $68
    ins("ADC", Op::Adc, AddrMode::Imm, 2), // $69
    ins("ROR", Op::Ror, AddrMode::Imp, 2), // $6A
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $6B
    ins("JMP", Op::Jmp, AddrMode::Ind, 5), // $6C
    ins("ADC", Op::Adc, AddrMode::Abs, 4), // $6D
    ins("ROR", Op::Ror, AddrMode::Abs, 6), // $6E
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $6F

    // $7x
    ins("BVS", Op::Bvs, AddrMode::Rel, 2), // $70
    ins("ADC", Op::Adc, AddrMode::Izy, 5), // $71
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $72
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $73
    ins("???", Op::Nop, AddrMode::Imp, 4), // $74
    ins("ADC", Op::Adc, AddrMode::Zpx, 4), // $75
    ins("ROR", Op::Ror, AddrMode::Zpx, 6), // $76
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $77
    ins("SEI", Op::Sei, AddrMode::Imp, 2), // $78
    ins("ADC", Op::Adc, AddrMode::Aby, 4), // $79
    ins("???", Op::Nop, AddrMode::Imp, 2), // $7A
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $7B
    ins("???", Op::Nop, AddrMode::Imp, 4), // $7C
    ins("ADC", Op::Adc, AddrMode::Abx, 4), // $7D
    ins("ROR", Op::Ror, AddrMode::Abx, 7), // $7E
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $7F

    // $8x
    ins("???", Op::Nop, AddrMode::Imp, 2), // $80
    ins("STA", Op::Sta, AddrMode::Izx, 6), // $81
    ins("???", Op::Nop, AddrMode::Imp, 2), // $82
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $83
    ins("STY", Op::Sty, AddrMode::Zp0, 3), // $84
    ins("STA", Op::Sta, AddrMode::Zp0, 3), // $85
    ins("STX", Op::Stx, AddrMode::Zp0, 3), // $86
    ins("???", Op::Xxx, AddrMode::Imp, 3), // $87
    ins("DEY", Op::Dey, AddrMode::Imp, 2), // $88
    ins("???", Op::Nop, AddrMode::Imp, 2), // $89
    ins("TXA", Op::Txa, AddrMode::Imp, 2), // $8A
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $8B
    ins("STY", Op::Sty, AddrMode::Abs, 4), // $8C
    ins("STA", Op::Sta, AddrMode::Abs, 4), // $8D
    ins("STX", Op::Stx, AddrMode::Abs, 4), // $8E
    ins("???", Op::Xxx, AddrMode::Imp, 4), // $8F

    // $9x
    ins("BCC", Op::Bcc, AddrMode::Rel, 2), // $90
    ins("STA", Op::Sta, AddrMode::Izy, 6), // $91
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $92
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $93
    ins("STY", Op::Sty, AddrMode::Zpx, 4), // $94
    ins("STA", Op::Sta, AddrMode::Zpx, 4), // $95
    ins("STX", Op::Stx, AddrMode::Zpy, 4), // $96
    ins("???", Op::Xxx, AddrMode::Imp, 4), // $97
    ins("TYA", Op::Tya, AddrMode::Imp, 2), // $98
    ins("STA", Op::Sta, AddrMode::Aby, 5), // $99
    ins("TXS", Op::Txs, AddrMode::Imp, 2), // $9A
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $9B
    ins("???", Op::Nop, AddrMode::Imp, 5), // $9C
    ins("STA", Op::Sta, AddrMode::Abx, 5), // $9D
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $9E
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $9F

    // $Ax
    ins("LDY", Op::Ldy, AddrMode::Imm, 2), // $A0
    ins("LDA", Op::Lda, AddrMode::Izx, 6), // $A1
    ins("LDX", Op::Ldx, AddrMode::Imm, 2), // $A2
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $A3
    ins("LDY", Op::Ldy, AddrMode::Zp0, 3), // $A4
    ins("LDA", Op::Lda, AddrMode::Zp0, 3), // $A5
    ins("LDX", Op::Ldx, AddrMode::Zp0, 3), // $A6
    ins("???", Op::Xxx, AddrMode::Imp, 3), // $A7
    ins("TAY", Op::Tay, AddrMode::Imp, 2), // $A8
    ins("LDA", Op::Lda, AddrMode::Imm, 2), // $A9
    ins("TAX", Op::Tax, AddrMode::Imp, 2), // $AA
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $AB
    ins("LDY", Op::Ldy, AddrMode::Abs, 4), // $AC
    ins("LDA", Op::Lda, AddrMode::Abs, 4), // $AD
    ins("LDX", Op::Ldx, AddrMode::Abs, 4), // $AE
    ins("???", Op::Xxx, AddrMode::Imp, 4), // $AF

    // $Bx
    ins("BCS", Op::Bcs, AddrMode::Rel, 2), // $B0
    ins("LDA", Op::Lda, AddrMode::Izy, 5), // $B1
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $B2
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $B3
    ins("LDY", Op::Ldy, AddrMode::Zpx, 4), // $B4
    ins("LDA", Op::Lda, AddrMode::Zpx, 4), // $B5
    ins("LDX", Op::Ldx, AddrMode::Zpy, 4), // $B6
    ins("???", Op::Xxx, AddrMode::Imp, 4), // $B7
    ins("CLV", Op::Clv, AddrMode::Imp, 2), // $B8
    ins("LDA", Op::Lda, AddrMode::Aby, 4), // $B9
    ins("TSX", Op::Tsx, AddrMode::Imp, 2), // $BA
    ins("???", Op::Xxx, AddrMode::Imp, 4), // $BB
    ins("LDY", Op::Ldy, AddrMode::Abx, 4), // $BC
    ins("LDA", Op::Lda, AddrMode::Abx, 4), // $BD
    ins("LDX", Op::Ldx, AddrMode::Aby, 4), // $BE
    ins("???", Op::Xxx, AddrMode::Imp, 4), // $BF

    // $Cx
    ins("CPY", Op::Cpy, AddrMode::Imm, 2), // $C0
    ins("CMP", Op::Cmp, AddrMode::Izx, 6), // $C1
    ins("???", Op::Nop, AddrMode::Imp, 2), // $C2
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $C3
    ins("CPY", Op::Cpy, AddrMode::Zp0, 3), // $C4
    ins("CMP", Op::Cmp, AddrMode::Zp0, 3), // $C5
    ins("DEC", Op::Dec, AddrMode::Zp0, 5), // $C6
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $C7
    ins("INY", Op::Iny, AddrMode::Imp, 2), // $C8
    ins("CMP", Op::Cmp, AddrMode::Imm, 2), // $C9
    ins("DEX", Op::Dex, AddrMode::Imp, 2), // $CA
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $CB
    ins("CPY", Op::Cpy, AddrMode::Abs, 4), // $CC
    ins("CMP", Op::Cmp, AddrMode::Abs, 4), // $CD
    ins("DEC", Op::Dec, AddrMode::Abs, 6), // $CE
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $CF

    // $Dx
    ins("BNE", Op::Bne, AddrMode::Rel, 2), // $D0
    ins("CMP", Op::Cmp, AddrMode::Izy, 5), // $D1
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $D2
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $D3
    ins("???", Op::Nop, AddrMode::Imp, 4), // $D4
    ins("CMP", Op::Cmp, AddrMode::Zpx, 4), // $D5
    ins("DEC", Op::Dec, AddrMode::Zpx, 6), // $D6
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $D7
    ins("CLD", Op::Cld, AddrMode::Imp, 2), // $D8
    ins("CMP", Op::Cmp, AddrMode::Aby, 4), // $D9
    ins("NOP", Op::Nop, AddrMode::Imp, 2), // $DA
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $DB
    ins("???", Op::Nop, AddrMode::Imp, 4), // $DC
    ins("CMP", Op::Cmp, AddrMode::Abx, 4), // $DD
    ins("DEC", Op::Dec, AddrMode::Abx, 7), // $DE
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $DF

    // $Ex
    ins("CPX", Op::Cpx, AddrMode::Imm, 2), // $E0
    ins("SBC", Op::Sbc, AddrMode::Izx, 6), // $E1
    ins("???", Op::Nop, AddrMode::Imp, 2), // $E2
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $E3
    ins("CPX", Op::Cpx, AddrMode::Zp0, 3), // $E4
    ins("SBC", Op::Sbc, AddrMode::Zp0, 3), // $E5
    ins("INC", Op::Inc, AddrMode::Zp0, 5), // $E6
    ins("???", Op::Xxx, AddrMode::Imp, 5), // $E7
    ins("INX", Op::Inx, AddrMode::Imp, 2), // $E8
    ins("SBC", Op::Sbc, AddrMode::Imm, 2), // $E9
    ins("NOP", Op::Nop, AddrMode::Imp, 2), // $EA
    ins("???", Op::Nop, AddrMode::Imp, 2), // $EB
    ins("CPX", Op::Cpx, AddrMode::Abs, 4), // $EC
    ins("SBC", Op::Sbc, AddrMode::Abs, 4), // $ED
    ins("INC", Op::Inc, AddrMode::Abs, 6), // $EE
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $EF

    // $Fx
    ins("BEQ", Op::Beq, AddrMode::Rel, 2), // $F0
    ins("SBC", Op::Sbc, AddrMode::Izy, 5), // $F1
    ins("???", Op::Xxx, AddrMode::Imp, 2), // $F2
    ins("???", Op::Xxx, AddrMode::Imp, 8), // $F3
    ins("???", Op::Nop, AddrMode::Imp, 4), // $F4
    ins("SBC", Op::Sbc, AddrMode::Zpx, 4), // $F5
    ins("INC", Op::Inc, AddrMode::Zpx, 6), // $F6
    ins("???", Op::Xxx, AddrMode::Imp, 6), // $F7
    ins("SED", Op::Sed, AddrMode::Imp, 2), // $F8
    ins("SBC", Op::Sbc, AddrMode::Aby, 4), // $F9
    ins("NOP", Op::Nop, AddrMode::Imp, 2), // $FA
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $FB
    ins("???", Op::Nop, AddrMode::Imp, 4), // $FC
    ins("SBC", Op::Sbc, AddrMode::Abx, 4), // $FD
    ins("INC", Op::Inc, AddrMode::Abx, 7), // $FE
    ins("???", Op::Xxx, AddrMode::Imp, 7), // $FF
];

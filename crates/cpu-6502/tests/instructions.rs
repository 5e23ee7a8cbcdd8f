//! Unit tests for 6502 instruction behavior.

use std::cell::RefCell;
use std::rc::Rc;

use cpu_6502::{Cpu, CpuConfig, Flag, Mos6502, Ram};

/// Load a program at $0200, connect a fresh CPU and point PC at it.
fn setup_program(program: &[u8]) -> (Mos6502, Rc<RefCell<Ram>>) {
    setup_with_config(program, CpuConfig::default())
}

fn setup_with_config(program: &[u8], config: CpuConfig) -> (Mos6502, Rc<RefCell<Ram>>) {
    let bus = Rc::new(RefCell::new(Ram::new()));
    bus.borrow_mut().load(0x0200, program);
    let mut cpu = Mos6502::with_config(config);
    cpu.connect(&bus);
    cpu.regs.pc = 0x0200;
    (cpu, bus)
}

/// Run `count` complete instructions.
fn run_instructions(cpu: &mut Mos6502, count: usize) {
    for _ in 0..count {
        cpu.step().expect("bus connected");
    }
}

fn flag(cpu: &Mos6502, flag: Flag) -> bool {
    cpu.regs.p.is_set(flag)
}

#[test]
fn test_stack_pha_pla() {
    let (mut cpu, bus) = setup_program(&[
        0xA9, 0x42, // LDA #$42
        0x48, // PHA
        0xA9, 0x00, // LDA #$00
        0x68, // PLA
    ]);

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.s, 0xFB);
    assert_eq!(bus.borrow().peek(0x01FC), 0x42);

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.a, 0x42, "PLA should restore A");
    assert_eq!(cpu.regs.s, 0xFC, "SP should be back where it started");
    assert!(!flag(&cpu, Flag::Z));
}

#[test]
fn test_stack_php_plp() {
    let (mut cpu, bus) = setup_program(&[
        0x38, // SEC
        0x08, // PHP
        0x18, // CLC
        0x28, // PLP
    ]);

    run_instructions(&mut cpu, 2);
    assert_eq!(
        bus.borrow().peek(0x01FC),
        0x31,
        "pushed copy has B, U and C set"
    );
    assert!(!flag(&cpu, Flag::B), "live B stays clear after PHP");
    assert!(flag(&cpu, Flag::U));

    run_instructions(&mut cpu, 2);
    assert!(flag(&cpu, Flag::C), "PLP should restore carry flag");
    assert!(flag(&cpu, Flag::U));
    assert_eq!(cpu.regs.s, 0xFC);
}

#[test]
fn test_stack_pointer_wraps_in_page_one() {
    let (mut cpu, bus) = setup_program(&[
        0xA9, 0x77, // LDA #$77
        0x48, // PHA
        0x68, // PLA
    ]);
    cpu.regs.s = 0x00;

    run_instructions(&mut cpu, 2);
    assert_eq!(bus.borrow().peek(0x0100), 0x77);
    assert_eq!(cpu.regs.s, 0xFF);

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.s, 0x00);
    assert_eq!(cpu.regs.a, 0x77);
}

#[test]
fn test_jsr_rts_round_trip() {
    let (mut cpu, bus) = setup_program(&[
        0x20, 0x00, 0x03, // JSR $0300
        0xA9, 0x01, // LDA #$01
    ]);
    bus.borrow_mut().load(0x0300, &[0x60]); // RTS

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.pc(), 0x0300);
    assert_eq!(cpu.regs.s, 0xFA);
    // Return address is the last byte of the JSR.
    assert_eq!(bus.borrow().peek(0x01FC), 0x02);
    assert_eq!(bus.borrow().peek(0x01FB), 0x02);

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.pc(), 0x0203, "RTS resumes after the JSR");
    assert_eq!(cpu.regs.s, 0xFC);

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.a, 0x01);
}

#[test]
fn test_adc_signed_overflow() {
    let (mut cpu, _bus) = setup_program(&[
        0x18, // CLC
        0xA9, 0x50, // LDA #$50
        0x69, 0x50, // ADC #$50
    ]);
    run_instructions(&mut cpu, 3);

    assert_eq!(cpu.regs.a, 0xA0);
    assert!(!flag(&cpu, Flag::C));
    assert!(flag(&cpu, Flag::V));
    assert!(flag(&cpu, Flag::N));
    assert!(!flag(&cpu, Flag::Z));
}

#[test]
fn test_adc_unsigned_carry() {
    let (mut cpu, _bus) = setup_program(&[
        0x18, // CLC
        0xA9, 0xFF, // LDA #$FF
        0x69, 0x01, // ADC #$01
    ]);
    run_instructions(&mut cpu, 3);

    assert_eq!(cpu.regs.a, 0x00);
    assert!(flag(&cpu, Flag::C));
    assert!(flag(&cpu, Flag::Z));
    assert!(!flag(&cpu, Flag::V));
    assert!(!flag(&cpu, Flag::N));
}

#[test]
fn test_adc_uses_carry_in() {
    let (mut cpu, _bus) = setup_program(&[
        0x38, // SEC
        0xA9, 0x10, // LDA #$10
        0x69, 0x20, // ADC #$20
    ]);
    run_instructions(&mut cpu, 3);
    assert_eq!(cpu.regs.a, 0x31);
    assert!(!flag(&cpu, Flag::C));
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let (mut cpu, _bus) = setup_program(&[
        0xF8, // SED
        0x18, // CLC
        0xA9, 0x09, // LDA #$09
        0x69, 0x01, // ADC #$01
    ]);
    run_instructions(&mut cpu, 4);
    assert_eq!(cpu.regs.a, 0x0A, "binary result even with D set");
    assert!(flag(&cpu, Flag::D));
}

#[test]
fn test_sbc_without_borrow() {
    let (mut cpu, _bus) = setup_program(&[
        0x38, // SEC
        0xA9, 0xD0, // LDA #$D0
        0xE9, 0x70, // SBC #$70
    ]);
    run_instructions(&mut cpu, 3);

    assert_eq!(cpu.regs.a, 0x60);
    assert!(flag(&cpu, Flag::C), "no borrow");
    assert!(flag(&cpu, Flag::V), "-48 - 112 overflows");
    assert!(!flag(&cpu, Flag::N));
}

#[test]
fn test_sbc_with_borrow() {
    let (mut cpu, _bus) = setup_program(&[
        0x38, // SEC
        0xA9, 0x50, // LDA #$50
        0xE9, 0xF0, // SBC #$F0
    ]);
    run_instructions(&mut cpu, 3);

    assert_eq!(cpu.regs.a, 0x60);
    assert!(!flag(&cpu, Flag::C), "borrow occurred");
    assert!(!flag(&cpu, Flag::V));
}

#[test]
fn test_sbc_consumes_clear_carry_as_borrow() {
    let (mut cpu, _bus) = setup_program(&[
        0x18, // CLC
        0xA9, 0x05, // LDA #$05
        0xE9, 0x03, // SBC #$03
    ]);
    run_instructions(&mut cpu, 3);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(flag(&cpu, Flag::C));
}

#[test]
fn test_cmp_family() {
    let (mut cpu, _bus) = setup_program(&[
        0xA9, 0x40, // LDA #$40
        0xC9, 0x40, // CMP #$40
        0xC9, 0x41, // CMP #$41
        0xC9, 0x01, // CMP #$01
    ]);

    run_instructions(&mut cpu, 2);
    assert!(flag(&cpu, Flag::Z));
    assert!(flag(&cpu, Flag::C));
    assert!(!flag(&cpu, Flag::N));

    run_instructions(&mut cpu, 1);
    assert!(!flag(&cpu, Flag::Z));
    assert!(!flag(&cpu, Flag::C));
    assert!(flag(&cpu, Flag::N));

    run_instructions(&mut cpu, 1);
    assert!(!flag(&cpu, Flag::Z));
    assert!(flag(&cpu, Flag::C));
    assert!(!flag(&cpu, Flag::N));
    assert_eq!(cpu.regs.a, 0x40, "compare leaves A alone");
}

#[test]
fn test_cpx_cpy_memory() {
    let (mut cpu, bus) = setup_program(&[
        0xA2, 0x10, // LDX #$10
        0xA0, 0x80, // LDY #$80
        0xE4, 0x20, // CPX $20
        0xCC, 0x21, 0x00, // CPY $0021
    ]);
    bus.borrow_mut().load(0x0020, &[0x20, 0x7F]);

    run_instructions(&mut cpu, 3);
    assert!(!flag(&cpu, Flag::C));
    assert!(flag(&cpu, Flag::N), "$10 - $20 = $F0");

    run_instructions(&mut cpu, 1);
    assert!(flag(&cpu, Flag::C));
    assert!(!flag(&cpu, Flag::Z));
    assert!(!flag(&cpu, Flag::N));
}

#[test]
fn test_logical_operations() {
    let (mut cpu, _bus) = setup_program(&[
        0xA9, 0xF0, // LDA #$F0
        0x29, 0x0F, // AND #$0F
        0x09, 0x80, // ORA #$80
        0x49, 0xFF, // EOR #$FF
    ]);

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(flag(&cpu, Flag::Z));

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(flag(&cpu, Flag::N));
    assert!(!flag(&cpu, Flag::Z));

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.a, 0x7F);
    assert!(!flag(&cpu, Flag::N));
}

#[test]
fn test_bit() {
    let (mut cpu, bus) = setup_program(&[
        0xA9, 0x01, // LDA #$01
        0x24, 0x10, // BIT $10
    ]);
    bus.borrow_mut().load(0x0010, &[0xC0]);

    run_instructions(&mut cpu, 2);
    assert!(flag(&cpu, Flag::Z));
    assert!(flag(&cpu, Flag::N));
    assert!(flag(&cpu, Flag::V));
    assert_eq!(cpu.regs.a, 0x01);
}

#[test]
fn test_accumulator_shifts() {
    let (mut cpu, _bus) = setup_program(&[
        0xA9, 0x81, // LDA #$81
        0x0A, // ASL A
        0x4A, // LSR A
        0x4A, // LSR A
    ]);

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.a, 0x02);
    assert!(flag(&cpu, Flag::C));

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(!flag(&cpu, Flag::C));

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(flag(&cpu, Flag::C));
    assert!(flag(&cpu, Flag::Z));
}

#[test]
fn test_memory_rotates() {
    let (mut cpu, bus) = setup_program(&[
        0x38, // SEC
        0x66, 0x10, // ROR $10
        0x2E, 0x11, 0x00, // ROL $0011
    ]);
    bus.borrow_mut().load(0x0010, &[0x01, 0x80]);

    run_instructions(&mut cpu, 2);
    assert_eq!(bus.borrow().peek(0x0010), 0x80);
    assert!(flag(&cpu, Flag::C));
    assert!(flag(&cpu, Flag::N));

    run_instructions(&mut cpu, 1);
    assert_eq!(bus.borrow().peek(0x0011), 0x01);
    assert!(flag(&cpu, Flag::C));
    assert!(!flag(&cpu, Flag::N));
    assert_eq!(cpu.regs.a, 0x00, "memory form leaves A alone");
}

#[test]
fn test_inc_dec_memory_wrap() {
    let (mut cpu, bus) = setup_program(&[
        0xE6, 0x10, // INC $10
        0xCE, 0x11, 0x00, // DEC $0011
    ]);
    bus.borrow_mut().load(0x0010, &[0xFF, 0x00]);

    run_instructions(&mut cpu, 1);
    assert_eq!(bus.borrow().peek(0x0010), 0x00);
    assert!(flag(&cpu, Flag::Z));

    run_instructions(&mut cpu, 1);
    assert_eq!(bus.borrow().peek(0x0011), 0xFF);
    assert!(flag(&cpu, Flag::N));
    assert!(!flag(&cpu, Flag::Z));
    assert_eq!(cpu.pc(), 0x0205, "INC must not write over the program");
    assert_eq!(bus.borrow().peek(0x0201), 0x10);
}

#[test]
fn test_register_steps_wrap() {
    let (mut cpu, _bus) = setup_program(&[
        0xA2, 0xFF, // LDX #$FF
        0xE8, // INX
        0x88, // DEY
        0xC8, // INY
    ]);

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.x, 0x00);
    assert!(flag(&cpu, Flag::Z));

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.y, 0xFF);
    assert!(flag(&cpu, Flag::N));

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.y, 0x00);
    assert!(flag(&cpu, Flag::Z));
}

#[test]
fn test_transfers_update_flags() {
    let (mut cpu, _bus) = setup_program(&[
        0xA9, 0x80, // LDA #$80
        0xAA, // TAX
        0xA9, 0x00, // LDA #$00
        0xA8, // TAY
        0xBA, // TSX
        0xA2, 0x00, // LDX #$00
        0x8A, // TXA
    ]);

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.x, 0x80);
    assert!(flag(&cpu, Flag::N));

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.y, 0x00);
    assert!(flag(&cpu, Flag::Z));

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.x, 0xFC);
    assert!(flag(&cpu, Flag::N));
    assert!(!flag(&cpu, Flag::Z));

    cpu.regs.a = 0x55;
    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(flag(&cpu, Flag::Z));
}

#[test]
fn test_tya_and_txs_leave_flags() {
    let (mut cpu, _bus) = setup_program(&[
        0xA0, 0x00, // LDY #$00
        0xA9, 0x80, // LDA #$80
        0x98, // TYA
        0xA2, 0x80, // LDX #$80
        0xA9, 0x00, // LDA #$00
        0x9A, // TXS
    ]);

    run_instructions(&mut cpu, 3);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(flag(&cpu, Flag::N), "TYA keeps flags from LDA #$80");
    assert!(!flag(&cpu, Flag::Z));

    run_instructions(&mut cpu, 3);
    assert_eq!(cpu.regs.s, 0x80);
    assert!(flag(&cpu, Flag::Z), "TXS keeps flags from LDA #$00");
    assert!(!flag(&cpu, Flag::N));
}

#[test]
fn test_status_opcodes() {
    let (mut cpu, _bus) = setup_program(&[
        0x38, // SEC
        0x78, // SEI
        0xF8, // SED
        0x18, // CLC
        0x58, // CLI
        0xD8, // CLD
        0xA9, 0x7F, // LDA #$7F
        0x69, 0x01, // ADC #$01
        0xB8, // CLV
    ]);

    run_instructions(&mut cpu, 3);
    assert!(flag(&cpu, Flag::C));
    assert!(flag(&cpu, Flag::I));
    assert!(flag(&cpu, Flag::D));

    run_instructions(&mut cpu, 3);
    assert!(!flag(&cpu, Flag::C));
    assert!(!flag(&cpu, Flag::I));
    assert!(!flag(&cpu, Flag::D));

    run_instructions(&mut cpu, 2);
    assert!(flag(&cpu, Flag::V));
    run_instructions(&mut cpu, 1);
    assert!(!flag(&cpu, Flag::V));
}

#[test]
fn test_loads_read_effective_address() {
    let (mut cpu, bus) = setup_program(&[
        0xA0, 0x02, // LDY #$02
        0xBE, 0x00, 0x40, // LDX $4000,Y
        0xB4, 0x10, // LDY $10,X
    ]);
    bus.borrow_mut().load(0x4002, &[0x05]);
    bus.borrow_mut().load(0x0015, &[0x99]);

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.regs.x, 0x05);

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.y, 0x99);
    assert!(flag(&cpu, Flag::N));
}

#[test]
fn test_load_flags_for_every_byte() {
    for value in 0..=0xFF_u8 {
        let (mut cpu, _bus) = setup_program(&[0xA9, value]);
        run_instructions(&mut cpu, 1);
        assert_eq!(cpu.regs.a, value);
        assert_eq!(flag(&cpu, Flag::Z), value == 0, "Z for {value:#04X}");
        assert_eq!(flag(&cpu, Flag::N), value & 0x80 != 0, "N for {value:#04X}");
    }
}

#[test]
fn test_indirect_stores() {
    let (mut cpu, bus) = setup_program(&[
        0xA9, 0xAB, // LDA #$AB
        0xA2, 0x04, // LDX #$04
        0xA0, 0x01, // LDY #$01
        0x81, 0x0C, // STA ($0C,X)
        0x91, 0x10, // STA ($10),Y
        0x96, 0x30, // STX $30,Y
        0x8C, 0x00, 0x50, // STY $5000
    ]);
    bus.borrow_mut().load(0x0010, &[0x00, 0x30]);

    run_instructions(&mut cpu, 7);
    let bus = bus.borrow();
    // ($0C,X) reads the pointer at $10 -> $3000.
    assert_eq!(bus.peek(0x3000), 0xAB);
    assert_eq!(bus.peek(0x3001), 0xAB);
    assert_eq!(bus.peek(0x0031), 0x04);
    assert_eq!(bus.peek(0x5000), 0x01);
}

#[test]
fn test_jmp_indirect_default_and_page_wrap() {
    let program = [0x6C, 0xFF, 0x30]; // JMP ($30FF)

    let (mut cpu, bus) = setup_program(&program);
    bus.borrow_mut().load(0x30FF, &[0x34, 0x12]);
    bus.borrow_mut().load(0x3000, &[0x56]);
    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.pc(), 0x1234);

    let (mut cpu, bus) = setup_with_config(
        &program,
        CpuConfig {
            indirect_page_wrap: true,
        },
    );
    bus.borrow_mut().load(0x30FF, &[0x34, 0x12]);
    bus.borrow_mut().load(0x3000, &[0x56]);
    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.pc(), 0x5634);
}

#[test]
fn test_brk_stack_layout() {
    let (mut cpu, bus) = setup_program(&[
        0x00, // BRK         @ $0200
        0xEA, // padding     @ $0201
    ]);
    bus.borrow_mut().load(0xFFFE, &[0x00, 0x03]);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.pc(), 0x0300, "PC should be at BRK vector target");
    assert_eq!(cpu.regs.s, 0xF9);
    assert!(flag(&cpu, Flag::I));
    assert!(!flag(&cpu, Flag::B));

    let bus = bus.borrow();
    assert_eq!(bus.peek(0x01FC), 0x02, "pushed PCH");
    assert_eq!(bus.peek(0x01FB), 0x02, "pushed PCL skips padding");
    assert_eq!(bus.peek(0x01FA), 0x34, "pushed P has B, U and I");
}

#[test]
fn test_brk_then_rti_resumes_after_padding() {
    let (mut cpu, bus) = setup_program(&[
        0x00, 0xEA, // BRK + padding
        0xA9, 0x07, // LDA #$07
    ]);
    bus.borrow_mut().load(0xFFFE, &[0x00, 0x03]);
    bus.borrow_mut().load(0x0300, &[0x40]); // RTI

    run_instructions(&mut cpu, 2);
    assert_eq!(cpu.pc(), 0x0202);
    assert!(flag(&cpu, Flag::I), "BRK pushed P with I already set");
    assert!(!flag(&cpu, Flag::B));
    assert!(flag(&cpu, Flag::U));
    assert_eq!(cpu.regs.s, 0xFC);

    run_instructions(&mut cpu, 1);
    assert_eq!(cpu.regs.a, 0x07);
}

#[test]
fn test_undefined_opcode_is_timed_noop() {
    let (mut cpu, bus) = setup_program(&[
        0x03, // ??? (8 cycles)
        0x02, // ??? (2 cycles)
    ]);
    cpu.regs.a = 0x11;
    cpu.regs.x = 0x22;
    cpu.regs.y = 0x33;
    let before = cpu.registers();

    assert_eq!(cpu.step(), Ok(8));
    assert_eq!(cpu.step(), Ok(2));

    let after = cpu.registers();
    assert_eq!(after.a, before.a);
    assert_eq!(after.x, before.x);
    assert_eq!(after.y, before.y);
    assert_eq!(after.s, before.s);
    assert_eq!(after.p.0, before.p.0 | Flag::U.bits());
    assert_eq!(after.pc, 0x0202);
    assert_eq!(bus.borrow().peek(0x0200), 0x03);
}

#[test]
fn test_execution_is_deterministic() {
    let program = [
        0xA2, 0x05, // LDX #$05
        0x8A, // TXA
        0x69, 0x33, // ADC #$33
        0x95, 0x40, // STA $40,X
        0xCA, // DEX
        0xD0, 0xF8, // BNE -8
        0x00, // BRK
    ];

    let run = || {
        let (mut cpu, bus) = setup_program(&program);
        for _ in 0..200 {
            cpu.clock().expect("bus connected");
        }
        let ram = bus.borrow();
        let zp: Vec<u8> = (0x40..0x50).map(|addr| ram.peek(addr)).collect();
        (cpu.registers(), cpu.cycle_count(), zp)
    };

    assert_eq!(run(), run());
}

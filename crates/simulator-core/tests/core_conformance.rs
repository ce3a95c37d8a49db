//! Whole-program conformance tests through the simulation driver.

#![allow(clippy::cast_possible_wrap)]

use proptest as _;
use thiserror as _;

use rstest::rstest;
use simulator_core::{
    CoreConfig, DecodeError, ExecFault, Operation, SimError, Simulator, LINK_REGISTER,
};

const SYSCALL: u32 = 0xFC00_0000;

const fn r_type(funct: u32, rs: u32, rt: u32, rd: u32, shamt: u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | (shamt << 6) | funct
}

const fn i_type(key: u32, rs: u32, rt: u32, imm: u32) -> u32 {
    key | (rs << 21) | (rt << 16) | (imm & 0xFFFF)
}

const fn j_type(key: u32, target: u32) -> u32 {
    key | (target & 0x03FF_FFFF)
}

fn image(words: &[u32]) -> Vec<i32> {
    let mut memory: Vec<i32> = words.iter().map(|w| *w as i32).collect();
    // Data space past the program.
    memory.resize(256, 0);
    memory
}

#[test]
fn straight_line_arithmetic_program() {
    // addi $1, $0, 5
    // addi $2, $0, 7
    // add  $3, $1, $2
    // sw   $3, 100($0)
    // syscall
    let mut sim = Simulator::new(
        image(&[
            i_type(0x2000_0000, 0, 1, 5),
            i_type(0x2000_0000, 0, 2, 7),
            r_type(0x20, 1, 2, 3, 0),
            i_type(0xAC00_0000, 0, 3, 100),
            SYSCALL,
        ]),
        CoreConfig::default(),
    );

    let stats = sim.run().expect("program halts cleanly");

    assert_eq!(sim.registers()[3], 12);
    assert_eq!(sim.memory()[100], 12);
    assert_eq!(stats.instructions, 5);
    // Three register-class ops, one store, one halt.
    assert_eq!(stats.cycles, 4 + 4 + 4 + 4 + 1);
    assert_eq!(stats.branches_not_taken, 0);
}

#[test]
fn countdown_loop_accounts_for_taken_and_not_taken_branches() {
    // addi $1, $0, 3
    // loop: addi $2, $2, 1
    //       addi $1, $1, -1
    //       bne  $1, $0, -8     ; back to loop while $1 != 0
    // syscall
    let mut sim = Simulator::new(
        image(&[
            i_type(0x2000_0000, 0, 1, 3),
            i_type(0x2000_0000, 2, 2, 1),
            i_type(0x2000_0000, 1, 1, 0xFFFF),
            i_type(0x1400_0000, 1, 0, 0xFFF8),
            SYSCALL,
        ]),
        CoreConfig::default(),
    );

    let stats = sim.run().expect("program halts cleanly");

    assert_eq!(sim.registers()[2], 3);
    assert_eq!(sim.registers()[1], 0);
    assert_eq!(stats.branches_not_taken, 1);
    assert_eq!(stats.instructions, 1 + 3 * 3 + 1);
    // Seven addi at 4, three bne at 3, one halt.
    assert_eq!(stats.cycles, 7 * 4 + 3 * 3 + 1);
}

#[test]
fn jal_and_jr_round_trip_through_a_subroutine() {
    // 0x00: jal 0x0C            ; link = 0x00, target = pc_start + 0x0C
    // 0x04: syscall
    // 0x08: nop                 ; never reached
    // 0x0C: addi $4, $0, 42
    // 0x10: addi $31, $31, 4    ; step the link past the call site
    // 0x14: jr $31
    let mut sim = Simulator::new(
        image(&[
            j_type(0x0C00_0000, 0x0C),
            SYSCALL,
            0,
            i_type(0x2000_0000, 0, 4, 42),
            i_type(0x2000_0000, 31, 31, 4),
            r_type(0x08, 31, 0, 0, 0),
        ]),
        CoreConfig::default(),
    );

    let stats = sim.run().expect("program halts cleanly");

    assert_eq!(sim.registers()[4], 42);
    assert_eq!(sim.registers()[LINK_REGISTER], 4);
    assert_eq!(stats.instructions, 5);
}

#[test]
fn beq_taken_skips_forward_using_the_raw_offset() {
    // 0x00: beq $0, $0, 8       ; always taken, lands on 0x08
    // 0x04: addi $5, $0, 1      ; skipped
    // 0x08: syscall
    let mut sim = Simulator::new(
        image(&[
            i_type(0x1000_0000, 0, 0, 8),
            i_type(0x2000_0000, 0, 5, 1),
            SYSCALL,
        ]),
        CoreConfig::default(),
    );

    let stats = sim.run().expect("program halts cleanly");

    assert_eq!(sim.registers()[5], 0);
    assert_eq!(stats.instructions, 2);
    assert_eq!(stats.branches_not_taken, 0);
}

#[test]
fn load_store_round_trip_between_registers() {
    // addi $1, $0, 200
    // addi $2, $0, -17
    // sw   $2, 0($1)
    // lw   $3, 0($1)
    // syscall
    let mut sim = Simulator::new(
        image(&[
            i_type(0x2000_0000, 0, 1, 200),
            i_type(0x2000_0000, 0, 2, 0xFFEF),
            i_type(0xAC00_0000, 1, 2, 0),
            i_type(0x8C00_0000, 1, 3, 0),
            SYSCALL,
        ]),
        CoreConfig::default(),
    );

    let _ = sim.run().expect("program halts cleanly");

    assert_eq!(sim.registers()[3], -17);
    assert_eq!(sim.memory()[200], -17);
}

#[test]
fn out_of_range_store_surfaces_an_execution_fault() {
    // sw $0, 0x7FFF($0) with a 256-word image
    let mut sim = Simulator::new(
        image(&[i_type(0xAC00_0000, 0, 0, 0x7FFF), SYSCALL]),
        CoreConfig::default(),
    );

    assert_eq!(
        sim.run(),
        Err(SimError::Exec(ExecFault::MemoryOutOfBounds {
            index: 0x7FFF,
            len: 256
        }))
    );
}

#[test]
fn unrecognized_word_stops_the_run_with_a_decode_error() {
    let mut sim = Simulator::new(image(&[0x4000_0000, SYSCALL]), CoreConfig::default());

    assert_eq!(
        sim.run(),
        Err(SimError::Decode(DecodeError { word: 0x4000_0000 }))
    );
    // The failed instruction never retires.
    assert_eq!(sim.stats().instructions, 0);
}

#[test]
fn halt_is_a_clean_signal_not_an_error() {
    let mut sim = Simulator::new(image(&[SYSCALL]), CoreConfig::default());

    let stats = sim.run().expect("halt is a normal outcome");

    assert_eq!(stats.instructions, 1);
    assert!(sim.registers().iter().all(|r| *r == 0));
}

#[rstest]
#[case::nop(0, Operation::Nop)]
#[case::sll_with_nonzero_shamt(r_type(0x00, 0, 7, 3, 5), Operation::Sll)]
#[case::syscall_ignores_low_bits(0xFC12_3456, Operation::Syscall)]
#[case::jr(r_type(0x08, 31, 0, 0, 0), Operation::Jr)]
#[case::lw(i_type(0x8C00_0000, 1, 2, 4), Operation::Lw)]
fn decode_resolves_representative_words(#[case] word: u32, #[case] expected: Operation) {
    assert_eq!(simulator_core::Decoder::decode(word), Ok(expected));
}

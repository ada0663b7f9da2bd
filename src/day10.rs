// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(any(test, LOGGING), derive(Debug, PartialEq, Eq))]
enum Instr {
	Nop,
	AddX(i32),
}

impl Instr {
	fn latency(&self) -> u8 {
		match self {
			Instr::Nop => 1,
			Instr::AddX(_) => 2,
		}
	}

	fn effect(&self) -> i32 {
		match self {
			Instr::Nop => 0,
			Instr::AddX(v) => *v,
		}
	}
}

mod cpu {
	use super::Instr;

	#[derive(Clone, Copy)]
	#[cfg_attr(any(test, LOGGING), derive(Debug, PartialEq, Eq))]
	pub(super) enum State {
		Idle,
		/// `pending` is added to the register once `remaining` reaches zero.
		Running { remaining: u8, pending: i32 },
	}

	/// The register as observed *during* a (1-based) cycle.
	#[derive(Clone, Copy)]
	#[cfg_attr(any(test, LOGGING), derive(Debug, PartialEq, Eq))]
	pub(super) struct Tick {
		pub(super) cycle: usize,
		pub(super) x: i32,
	}

	#[cfg_attr(any(test, LOGGING), derive(Debug))]
	pub(super) struct Cpu {
		pub(super) x: i32,
		pub(super) cycle: usize,
		pub(super) state: State,
	}

	impl Default for Cpu {
		fn default() -> Self {
			Cpu { x: 1, cycle: 0, state: State::Idle }
		}
	}

	impl Cpu {
		/// Runs one cycle, fetching the next instruction from `instrs` when idle.
		/// Returns `None` (without advancing) once idle with nothing left to fetch.
		pub(super) fn tick(&mut self, instrs: &mut impl Iterator<Item = Instr>) -> Option<Tick> {
			let (remaining, pending) = match self.state {
				State::Idle => {
					let instr = instrs.next()?;
					(instr.latency(), instr.effect())
				}
				State::Running { remaining, pending } => (remaining, pending),
			};

			self.cycle += 1;
			let tick = Tick { cycle: self.cycle, x: self.x };

			self.state = match remaining - 1 {
				0 => {
					self.x += pending;
					State::Idle
				}
				remaining => State::Running { remaining, pending },
			};

			#[cfg(LOGGING)]
			println!("{tick:?} -> {self:?}");
			Some(tick)
		}
	}

	pub(super) fn execute(instrs: impl IntoIterator<Item = Instr>) -> impl Iterator<Item = Tick> {
		let mut instrs = instrs.into_iter();
		let mut cpu = Cpu::default();
		std::iter::from_fn(move || cpu.tick(&mut instrs))
	}
}


const FIRST_SAMPLE_CYCLE: usize = 20;
const SAMPLE_STRIDE: usize = 40;
const LAST_SAMPLE_CYCLE: usize = 220;

fn is_sampled(cycle: usize) -> bool {
	cycle >= FIRST_SAMPLE_CYCLE
		&& cycle <= LAST_SAMPLE_CYCLE
		&& (cycle - FIRST_SAMPLE_CYCLE) % SAMPLE_STRIDE == 0
}


const CRT_WIDTH: usize = 40;
const CRT_HEIGHT: usize = 6;

struct Crt([bool; CRT_WIDTH * CRT_HEIGHT]);

impl Default for Crt {
	fn default() -> Self {
		Crt([false; CRT_WIDTH * CRT_HEIGHT])
	}
}

impl Crt {
	/// Draws the pixel belonging to `tick`’s cycle; cycles beyond the last pixel draw nothing.
	fn draw(&mut self, tick: cpu::Tick) {
		let idx = tick.cycle - 1;
		let Some(pixel) = self.0.get_mut(idx) else { return };
		let (_, column) = num_integer::div_rem(idx, CRT_WIDTH);
		*pixel = (column as i32).abs_diff(tick.x) <= 1;
	}
}

impl std::fmt::Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for y in 0..CRT_HEIGHT {
			for x in 0..CRT_WIDTH {
				f.write_char(if self.0[y * CRT_WIDTH + x] { '#' } else { '.' })?
			}
			if y < CRT_HEIGHT - 1 { f.write_char('\n')? }
		}
		Ok(())
	}
}


fn input_instrs_from_str(s: &str) -> Result<Vec<Instr>, parsing::InstrsError> {
	parsing::try_instrs_from_str(s)
}


fn part1_impl(input_instrs: Vec<Instr>) -> i64 {
	cpu::execute(input_instrs)
		.take_while(|tick| tick.cycle <= LAST_SAMPLE_CYCLE)
		.filter(|tick| is_sampled(tick.cycle))
		.map(|tick| tick.cycle as i64 * tick.x as i64)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<i64, parsing::InstrsError> {
	Ok(part1_impl(input_instrs_from_str(input)?))
}


fn part2_impl(input_instrs: Vec<Instr>) -> Crt {
	let mut crt = Crt::default();
	for tick in cpu::execute(input_instrs) {
		crt.draw(tick)
	}
	crt
}

pub(crate) fn part2(input: &str) -> Result<impl std::fmt::Display, parsing::InstrsError> {
	Ok(part2_impl(input_instrs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum InstrError {
		Opcode(String),
		MissingOperand,
		UnexpectedOperand,
		AddX(ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.split_once(' ') {
				None if s == "noop" => Ok(Instr::Nop),
				None if s == "addx" => Err(InstrError::MissingOperand),
				None => Err(InstrError::Opcode(s.to_owned())),
				Some(("addx", v)) => Ok(Instr::AddX(v.parse().map_err(InstrError::AddX)?)),
				Some(("noop", _)) => Err(InstrError::UnexpectedOperand),
				Some((op, _)) => Err(InstrError::Opcode(op.to_owned())),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct InstrsError {
		line: usize,
		source: InstrError,
	}

	pub(super) fn try_instrs_from_str(s: &str) -> Result<Vec<Instr>, InstrsError> {
		s.lines()
			.take_while(|line| !line.is_empty())
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| InstrsError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		use Instr::*;
		assert!(matches!(try_instrs_from_str(super::tests::INPUTS[0]).as_deref(),
			Ok([Nop, AddX(3), AddX(-5)])));
		assert!(matches!(try_instrs_from_str("noop\n\naddx oops\n").as_deref(), Ok([Nop])));
		assert!(matches!(try_instrs_from_str("noop\nmulx 3"),
			Err(InstrsError { line: 2, source: InstrError::Opcode(op) }) if op == "mulx"));
		assert!(matches!(try_instrs_from_str("nop"),
			Err(InstrsError { line: 1, source: InstrError::Opcode(_) })));
		assert!(matches!(try_instrs_from_str("noop\nnoop\naddx"),
			Err(InstrsError { line: 3, source: InstrError::MissingOperand })));
		assert!(matches!(try_instrs_from_str("addx 3x"),
			Err(InstrsError { line: 1, source: InstrError::AddX(_) })));
		assert!(matches!(try_instrs_from_str("noop 1"),
			Err(InstrsError { line: 1, source: InstrError::UnexpectedOperand })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::{*, cpu::{Cpu, State, Tick}};

	pub(super) const INPUTS: [&str; 2] = [
		indoc! { "
			noop
			addx 3
			addx -5
		" },
		indoc! { "
			addx 15
			addx -11
			addx 6
			addx -3
			addx 5
			addx -1
			addx -8
			addx 13
			addx 4
			noop
			addx -1
			addx 5
			addx -1
			addx 5
			addx -1
			addx 5
			addx -1
			addx 5
			addx -1
			addx -35
			addx 1
			addx 24
			addx -19
			addx 1
			addx 16
			addx -11
			noop
			noop
			addx 21
			addx -15
			noop
			noop
			addx -3
			addx 9
			addx 1
			addx -3
			addx 8
			addx 1
			addx 5
			noop
			noop
			noop
			noop
			noop
			addx -36
			noop
			addx 1
			addx 7
			noop
			noop
			noop
			addx 2
			addx 6
			noop
			noop
			noop
			noop
			noop
			addx 1
			noop
			noop
			addx 7
			addx 1
			noop
			addx -13
			addx 13
			addx 7
			noop
			addx 1
			addx -33
			noop
			noop
			noop
			addx 2
			noop
			noop
			noop
			addx 8
			noop
			addx -1
			addx 2
			addx 1
			noop
			addx 17
			addx -9
			addx 1
			addx 1
			addx -3
			addx 11
			noop
			noop
			addx 1
			noop
			addx 1
			noop
			noop
			addx -13
			addx -19
			addx 1
			addx 3
			addx 26
			addx -30
			addx 12
			addx -1
			addx 3
			addx 1
			noop
			noop
			noop
			addx -9
			addx 18
			addx 1
			addx 2
			noop
			noop
			addx 9
			noop
			noop
			noop
			addx -1
			addx 2
			addx -37
			addx 1
			addx 3
			noop
			addx 15
			addx -21
			addx 22
			addx -6
			addx 1
			noop
			addx 2
			addx 1
			noop
			addx -10
			noop
			noop
			addx 20
			addx 1
			addx 2
			addx 2
			addx -6
			addx -11
			noop
			noop
			noop
		" },
	];

	#[test]
	fn cycle_timing() {
		let mut instrs = input_instrs_from_str(INPUTS[0]).unwrap().into_iter();
		let mut cpu = Cpu::default();

		assert_eq!(cpu.tick(&mut instrs), Some(Tick { cycle: 1, x: 1 }));
		assert_eq!((cpu.x, cpu.state), (1, State::Idle));
		assert_eq!(cpu.tick(&mut instrs), Some(Tick { cycle: 2, x: 1 }));
		assert_eq!((cpu.x, cpu.state), (1, State::Running { remaining: 1, pending: 3 }));
		assert_eq!(cpu.tick(&mut instrs), Some(Tick { cycle: 3, x: 1 }));
		assert_eq!((cpu.x, cpu.state), (4, State::Idle));
		assert_eq!(cpu.tick(&mut instrs), Some(Tick { cycle: 4, x: 4 }));
		assert_eq!((cpu.x, cpu.state), (4, State::Running { remaining: 1, pending: -5 }));
		assert_eq!(cpu.tick(&mut instrs), Some(Tick { cycle: 5, x: 4 }));
		assert_eq!((cpu.x, cpu.state), (-1, State::Idle));
		assert_eq!(cpu.tick(&mut instrs), None);
		assert_eq!((cpu.x, cpu.cycle), (-1, 5));
	}

	#[test]
	fn sampling() {
		let samples = cpu::execute(input_instrs_from_str(INPUTS[1]).unwrap())
			.filter(|tick| is_sampled(tick.cycle))
			.map(|tick| (tick.cycle, tick.x))
			.collect::<Vec<_>>();
		assert_eq!(samples, [(20, 21), (60, 19), (100, 18), (140, 21), (180, 16), (220, 18)]);
		assert!(!is_sampled(0));
		assert!(!is_sampled(40));
		assert!(!is_sampled(260));
	}

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 0);
		assert_eq!(part1(INPUTS[1]).unwrap(), 13140);
		assert_eq!(part2(INPUTS[1]).unwrap().to_string(), indoc! { "
			##..##..##..##..##..##..##..##..##..##..
			###...###...###...###...###...###...###.
			####....####....####....####....####....
			#####.....#####.....#####.....#####.....
			######......######......######......####
			#######.......#######.......#######....." });
		assert_eq!(part2(INPUTS[1]).unwrap().to_string(), part2(INPUTS[1]).unwrap().to_string());
		assert!(part1("noop\nadd 1\n").is_err());
	}

	#[test]
	fn sprite_is_not_wrapped() {
		let mut crt = Crt::default();
		crt.draw(Tick { cycle: 1, x: 41 });
		crt.draw(Tick { cycle: 2, x: -39 });
		crt.draw(Tick { cycle: 41, x: 1 });
		crt.draw(Tick { cycle: 42, x: 41 });
		assert_eq!(&crt.0[..2], [false, false]);
		assert_eq!(&crt.0[CRT_WIDTH..CRT_WIDTH + 2], [true, false]);
	}

	#[test]
	fn partial_and_overlong_programs() {
		let dark_row = ".".repeat(CRT_WIDTH);
		let expected = std::iter::once(format!("#{}", &dark_row[1..]))
			.chain(std::iter::repeat(dark_row.clone()).take(CRT_HEIGHT - 1))
			.collect::<Vec<_>>()
			.join("\n");
		assert_eq!(part2("noop").unwrap().to_string(), expected);

		let sprite_row = format!("###{}", &dark_row[3..]);
		let expected = vec![sprite_row; CRT_HEIGHT].join("\n");
		assert_eq!(part2(&"noop\n".repeat(250)).unwrap().to_string(), expected);
	}
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Bottom crate first.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Stacks(Vec<Vec<u8>>);

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Move {
	count: usize,
	/// Zero-based.
	from: usize,
	/// Zero-based.
	to: usize,
}

#[derive(Clone, Copy)]
enum Crane {
	/// Moves one crate at a time.
	OneByOne,
	/// Moves all crates at once, retaining their order.
	AllAtOnce,
}

#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum Error {
	Input(parsing::InputError),
	Underflow { line: usize, stack: usize, count: usize, available: usize },
}

impl From<parsing::InputError> for Error {
	fn from(e: parsing::InputError) -> Self {
		Error::Input(e)
	}
}

impl Stacks {
	fn rearrange(&mut self, mv: &Move, crane: Crane) -> Result<(), usize> {
		let from = &mut self.0[mv.from];
		if mv.count > from.len() { return Err(from.len()) }
		// Either crane puts crates back in place when a stack is moved onto itself
		if mv.from == mv.to { return Ok(()) }
		let mut crates = from.split_off(from.len() - mv.count);
		if let Crane::OneByOne = crane { crates.reverse() }
		self.0[mv.to].extend(crates);
		Ok(())
	}

	fn tops(&self) -> String {
		self.0.iter()
			.filter_map(|stack| stack.last().map(|&c| c as char))
			.collect()
	}
}

#[cfg(any(test, LOGGING))]
impl std::fmt::Display for Stacks {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let height = self.0.iter().map(Vec::len).max().unwrap_or(0);
		for y in (0..height).rev() {
			let row = self.0.iter()
				.map(|stack| stack.get(y).map_or("   ".to_owned(), |&c| format!("[{}]", c as char)))
				.collect::<Vec<_>>()
				.join(" ");
			writeln!(f, "{}", row.trim_end())?
		}
		let labels = (1..=self.0.len()).map(|l| format!(" {l} ")).collect::<Vec<_>>().join(" ");
		write!(f, "{}", labels.trim_end())
	}
}


fn input_from_str(s: &str) -> Result<(Stacks, Vec<(usize, Move)>), parsing::InputError> {
	parsing::try_input_from_str(s)
}

fn top_crates_after(input: &str, crane: Crane) -> Result<String, Error> {
	let (mut stacks, moves) = input_from_str(input)?;
	for (line, mv) in &moves {
		stacks.rearrange(mv, crane)
			.map_err(|available| Error::Underflow {
				line: *line, stack: mv.from + 1, count: mv.count, available })?;
	}
	#[cfg(LOGGING)]
	println!("{stacks}\n");
	Ok(stacks.tops())
}


pub(crate) fn part1(input: &str) -> Result<String, Error> {
	top_crates_after(input, Crane::OneByOne)
}


pub(crate) fn part2(input: &str) -> Result<String, Error> {
	top_crates_after(input, Crane::AllAtOnce)
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Move, Stacks};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum DrawingErrorKind {
		MissingLabels,
		Label(String),
		Crate { column: usize },
		Floating { column: usize },
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum MoveErrorKind {
		Format,
		Count(ParseIntError),
		Label(ParseIntError),
		UnknownStack(usize),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum InputErrorKind {
		Drawing(DrawingErrorKind),
		Move(MoveErrorKind),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct InputError {
		line: usize,
		kind: InputErrorKind,
	}

	/// Each cell of a drawing row is 3 characters wide, with 1 space in between cells.
	const CELL_STRIDE: usize = 4;

	fn try_num_stacks_from_str(s: &str) -> Result<usize, DrawingErrorKind> {
		let mut num_stacks = 0;
		for (i, label) in s.split_whitespace().enumerate() {
			if label != (i + 1).to_string() { return Err(DrawingErrorKind::Label(label.to_owned())) }
			num_stacks = i + 1;
		}
		if num_stacks == 0 { return Err(DrawingErrorKind::MissingLabels) }
		Ok(num_stacks)
	}

	/// Returns the crates of one drawing row, `None` for empty cells.
	fn try_crates_row_from_str(s: &str, num_stacks: usize)
	-> Result<Vec<Option<u8>>, DrawingErrorKind> {
		let mut row = vec![None; num_stacks];
		for (c, chunk) in s.as_bytes().chunks(CELL_STRIDE).enumerate() {
			let column = c * CELL_STRIDE + 1;
			let cell = match chunk {
				[b'[', cr, b']'] | [b'[', cr, b']', b' '] if cr.is_ascii_uppercase() => Some(*cr),
				chunk if chunk.iter().all(|&b| b == b' ') => None,
				_ => return Err(DrawingErrorKind::Crate { column }),
			};
			if cell.is_some() && c >= num_stacks { return Err(DrawingErrorKind::Crate { column }) }
			if let Some(slot) = row.get_mut(c) { *slot = cell }
		}
		Ok(row)
	}

	fn try_stacks_from_lines(lines: &[&str]) -> Result<Stacks, InputError> {
		let (labels, rows) = lines.split_last()
			.ok_or(InputError { line: 1, kind: InputErrorKind::Drawing(DrawingErrorKind::MissingLabels) })?;
		let num_stacks = try_num_stacks_from_str(labels)
			.map_err(|e| InputError { line: lines.len(), kind: InputErrorKind::Drawing(e) })?;

		let mut stacks = vec![vec![]; num_stacks];
		for (l, line) in rows.iter().enumerate().rev() {
			let row = try_crates_row_from_str(line, num_stacks)
				.map_err(|e| InputError { line: l + 1, kind: InputErrorKind::Drawing(e) })?;
			for (i, (stack, cell)) in stacks.iter_mut().zip(row).enumerate() {
				match cell {
					Some(_) if stack.len() + l + 1 < rows.len() => return Err(InputError { line: l + 1,
						kind: InputErrorKind::Drawing(DrawingErrorKind::Floating { column: i * CELL_STRIDE + 1 }) }),
					Some(cr) => stack.push(cr),
					None => (),
				}
			}
		}
		Ok(Stacks(stacks))
	}

	fn try_move_from_str(s: &str, num_stacks: usize) -> Result<Move, MoveErrorKind> {
		let words = s.split(' ').collect::<Vec<_>>();
		let &["move", count, "from", from, "to", to] = &words[..] else {
			return Err(MoveErrorKind::Format)
		};
		let count = count.parse().map_err(MoveErrorKind::Count)?;
		let stack = |label: &str| -> Result<usize, MoveErrorKind> {
			let label: usize = label.parse().map_err(MoveErrorKind::Label)?;
			if !(1..=num_stacks).contains(&label) { return Err(MoveErrorKind::UnknownStack(label)) }
			Ok(label - 1)
		};
		Ok(Move { count, from: stack(from)?, to: stack(to)? })
	}

	/// The drawing ends at the first blank line, the moves at the next (or at the end).
	pub(super) fn try_input_from_str(s: &str) -> Result<(Stacks, Vec<(usize, Move)>), InputError> {
		let mut lines = s.lines().enumerate();
		let drawing = lines.by_ref()
			.map(|(_, line)| line)
			.take_while(|line| !line.is_empty())
			.collect::<Vec<_>>();
		let stacks = try_stacks_from_lines(&drawing)?;
		let moves = lines
			.take_while(|(_, line)| !line.is_empty())
			.map(|(l, line)| try_move_from_str(line, stacks.0.len())
				.map(|mv| (l + 1, mv))
				.map_err(|e| InputError { line: l + 1, kind: InputErrorKind::Move(e) }))
			.collect::<Result<_, _>>()?;
		Ok((stacks, moves))
	}

	#[test]
	fn tests() {
		use {InputErrorKind as K, DrawingErrorKind as D, MoveErrorKind as M};

		let (stacks, moves) = try_input_from_str(super::tests::INPUT).unwrap();
		assert_eq!(stacks, Stacks(vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]));
		assert_eq!(moves.len(), 4);
		assert_eq!(moves[0], (6, Move { count: 1, from: 1, to: 0 }));
		assert_eq!(moves[3], (9, Move { count: 1, from: 0, to: 1 }));

		// Trailing spaces are optional
		let (stacks, moves) = try_input_from_str("    [A]\n[B] [C]\n 1   2\n").unwrap();
		assert_eq!(stacks, Stacks(vec![b"B".to_vec(), b"CA".to_vec()]));
		assert!(moves.is_empty());

		assert!(matches!(try_input_from_str(""),
			Err(InputError { line: 1, kind: K::Drawing(D::MissingLabels) })));
		assert!(matches!(try_input_from_str("[A] [B]\n 1   3 \n"),
			Err(InputError { line: 2, kind: K::Drawing(D::Label(l)) }) if l == "3"));
		assert!(matches!(try_input_from_str("[A] {B}\n 1   2 \n"),
			Err(InputError { line: 1, kind: K::Drawing(D::Crate { column: 5 }) })));
		assert!(matches!(try_input_from_str("[A] [B] [C]\n 1   2 \n"),
			Err(InputError { line: 1, kind: K::Drawing(D::Crate { column: 9 }) })));
		assert!(matches!(try_input_from_str("[A] [B]\n    [C]\n 1   2 \n"),
			Err(InputError { line: 1, kind: K::Drawing(D::Floating { column: 1 }) })));
		assert!(matches!(try_input_from_str("[A]\n 1 \n\nmove 1 from 1 to 2\n"),
			Err(InputError { line: 4, kind: K::Move(M::UnknownStack(2)) })));
		assert!(matches!(try_input_from_str("[A]\n 1 \n\nmove x from 1 to 1\n"),
			Err(InputError { line: 4, kind: K::Move(M::Count(_)) })));
		assert!(matches!(try_input_from_str("[A]\n 1 \n\nmove 1 from 1 to y\n"),
			Err(InputError { line: 4, kind: K::Move(M::Label(_)) })));
		assert!(matches!(try_input_from_str("[A]\n 1 \n\nmove 1 to 1\n"),
			Err(InputError { line: 4, kind: K::Move(M::Format) })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	// Not using `indoc` here, because the drawing’s leading spaces are significant
	pub(super) const INPUT: &str = concat!(
		"    [D]    \n",
		"[N] [C]    \n",
		"[Z] [M] [P]\n",
		" 1   2   3 \n",
		"\n",
		"move 1 from 2 to 1\n",
		"move 3 from 1 to 3\n",
		"move 2 from 2 to 1\n",
		"move 1 from 1 to 2\n",
	);

	#[test]
	fn rearranging() {
		let mut stacks = Stacks(vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]);
		let mut all_at_once = stacks.clone();
		let mv = Move { count: 2, from: 1, to: 2 };
		stacks.rearrange(&mv, Crane::OneByOne).unwrap();
		all_at_once.rearrange(&mv, Crane::AllAtOnce).unwrap();
		assert_eq!(stacks, Stacks(vec![b"ZN".to_vec(), b"M".to_vec(), b"PDC".to_vec()]));
		assert_eq!(all_at_once, Stacks(vec![b"ZN".to_vec(), b"M".to_vec(), b"PCD".to_vec()]));
		assert_eq!(stacks.rearrange(&Move { count: 2, from: 1, to: 0 }, Crane::OneByOne), Err(1));
		assert_eq!(stacks.to_string(), "        [C]\n[N]     [D]\n[Z] [M] [P]\n 1   2   3");

		let onto_itself = Move { count: 2, from: 2, to: 2 };
		stacks.rearrange(&onto_itself, Crane::OneByOne).unwrap();
		all_at_once.rearrange(&onto_itself, Crane::AllAtOnce).unwrap();
		assert_eq!(stacks, Stacks(vec![b"ZN".to_vec(), b"M".to_vec(), b"PDC".to_vec()]));
		assert_eq!(all_at_once, Stacks(vec![b"ZN".to_vec(), b"M".to_vec(), b"PCD".to_vec()]));
		assert_eq!(stacks.rearrange(&Move { count: 4, from: 2, to: 2 }, Crane::OneByOne), Err(3));
	}

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), "CMZ");
		assert_eq!(part2(INPUT).unwrap(), "MCD");
		assert!(matches!(part1("[A]\n 1 \n\nmove 2 from 1 to 1\n"),
			Err(Error::Underflow { line: 4, stack: 1, count: 2, available: 1 })));
		assert_eq!(part2("[A]\n 1   2\n\nmove 1 from 1 to 2\n").unwrap(), "A");
		assert_eq!(part1("[A]\n[B]\n[C]\n 1 \n\nmove 2 from 1 to 1\n").unwrap(), "A");
		assert_eq!(part2("[A]\n[B]\n[C]\n 1 \n\nmove 2 from 1 to 1\n").unwrap(), "A");
	}
}

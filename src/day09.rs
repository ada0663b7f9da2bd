// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


#[derive(Clone, Copy)]
#[cfg_attr(any(test, LOGGING), derive(Debug, PartialEq, Eq))]
enum Dir { Up, Down, Left, Right }

type Pos = (i32, i32);

impl std::ops::AddAssign<Dir> for Pos {
	fn add_assign(&mut self, rhs: Dir) {
		use Dir::*;
		match rhs {
			Up => self.1 += 1,
			Down => self.1 -= 1,
			Left => self.0 -= 1,
			Right => self.0 += 1,
		}
	}
}

#[cfg_attr(any(test, LOGGING), derive(Debug, PartialEq, Eq))]
struct Move(Dir, usize);

fn steps(moves: &[Move]) -> impl Iterator<Item = Dir> + '_ {
	moves.iter().flat_map(|&Move(dir, amount)| std::iter::repeat(dir).take(amount))
}


fn chebyshev_dist(a: Pos, b: Pos) -> i32 {
	(a.0 - b.0).abs().max((a.1 - b.1).abs())
}

/// Pulls `seg` one step toward `pred` along every axis on which they differ,
/// unless the two are already touching. Returns whether `seg` moved.
fn follow(pred: Pos, seg: &mut Pos) -> bool {
	if chebyshev_dist(pred, *seg) <= 1 { return false }
	seg.0 += (pred.0 - seg.0).signum();
	seg.1 += (pred.1 - seg.1).signum();
	true
}

/// Head at index `0`, tail at index `N - 1`.
struct Rope<const N: usize>([Pos; N]);

impl<const N: usize> Default for Rope<N> {
	fn default() -> Self {
		let () = Self::HAS_HEAD;
		Rope([(0, 0); N])
	}
}

impl<const N: usize> Rope<N> {
	/// Fails to compile for `Rope<0>`.
	const HAS_HEAD: () = assert!(N >= 1, "a rope needs at least a head");

	fn tail(&self) -> Pos {
		self.0[N - 1]
	}

	fn step(&mut self, dir: Dir) {
		self.0[0] += dir;
		for i in 1..N {
			let pred = self.0[i - 1];
			// A segment that stays put leaves everything behind it in place too
			if !follow(pred, &mut self.0[i]) { break }
		}
	}
}

#[cfg(any(test, LOGGING))]
impl<const N: usize> std::fmt::Display for Rope<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		let (min_x, max_x, min_y, max_y) = self.0.iter()
			.fold((0, 0, 0, 0), |(x0, x1, y0, y1), &(x, y)|
				(x0.min(x), x1.max(x), y0.min(y), y1.max(y)));
		for y in (min_y..=max_y).rev() {
			for x in min_x..=max_x {
				let chr = match self.0.iter().position(|&p| p == (x, y)) {
					Some(0) => 'H',
					Some(_) if N == 2 => 'T',
					Some(i) => char::from_digit(i as u32 % 10, 10).unwrap_or('#'),
					None if (x, y) == (0, 0) => 's',
					None => '.',
				};
				f.write_char(chr)?
			}
			if y > min_y { f.write_char('\n')? }
		}
		Ok(())
	}
}

fn num_tail_positions<const N: usize>(moves: &[Move]) -> usize {
	let mut rope = Rope::<N>::default();
	let mut visited = HashSet::from([rope.tail()]);
	for dir in steps(moves) {
		rope.step(dir);
		visited.insert(rope.tail());
	}
	#[cfg(LOGGING)]
	println!("{rope}\n");
	visited.len()
}


fn input_moves_from_str(s: &str) -> Result<Vec<Move>, parsing::MovesError> {
	parsing::try_moves_from_str(s)
}


fn part1_impl(input_moves: &[Move]) -> usize {
	num_tail_positions::<2>(input_moves)
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::MovesError> {
	Ok(part1_impl(&input_moves_from_str(input)?))
}


fn part2_impl(input_moves: &[Move]) -> usize {
	num_tail_positions::<10>(input_moves)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::MovesError> {
	Ok(part2_impl(&input_moves_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dir, Move};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct DirError(String);

	impl FromStr for Dir {
		type Err = DirError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"U" => Ok(Dir::Up),
				"D" => Ok(Dir::Down),
				"L" => Ok(Dir::Left),
				"R" => Ok(Dir::Right),
				invalid => Err(DirError(invalid.to_owned())),
			}
		}
	}

	#[derive(Debug)]
	pub(crate) enum MoveError {
		Format,
		Dir(DirError),
		Amount(ParseIntError),
	}

	impl FromStr for Move {
		type Err = MoveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (dir, amount) = s.split_once(' ').ok_or(MoveError::Format)?;
			let dir = dir.parse().map_err(MoveError::Dir)?;
			let amount = amount.parse().map_err(MoveError::Amount)?;
			Ok(Move(dir, amount))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct MovesError {
		line: usize,
		source: MoveError,
	}

	pub(super) fn try_moves_from_str(s: &str) -> Result<Vec<Move>, MovesError> {
		s.lines()
			.take_while(|line| !line.is_empty())
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| MovesError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		use Dir::*;
		assert!(matches!(try_moves_from_str(super::tests::INPUTS[0]).as_deref(), Ok([
			Move(Right, 4), Move(Up, 4), Move(Left, 3), Move(Down, 1),
			Move(Right, 4), Move(Down, 1), Move(Left, 5), Move(Right, 2)])));
		assert!(matches!(try_moves_from_str("R 4\n\nnonsense\n").as_deref(), Ok([Move(Right, 4)])));
		assert!(matches!(try_moves_from_str("R 4\nX 2\n"),
			Err(MovesError { line: 2, source: MoveError::Dir(DirError(d)) }) if d == "X"));
		assert!(matches!(try_moves_from_str("RR 4"),
			Err(MovesError { line: 1, source: MoveError::Dir(_) })));
		assert!(matches!(try_moves_from_str("U 1\nD two"),
			Err(MovesError { line: 2, source: MoveError::Amount(_) })));
		assert!(matches!(try_moves_from_str("U -1"),
			Err(MovesError { line: 1, source: MoveError::Amount(_) })));
		assert!(matches!(try_moves_from_str("L3"),
			Err(MovesError { line: 1, source: MoveError::Format })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;

	pub(super) const INPUTS: [&str; 2] = [
		indoc! { "
			R 4
			U 4
			L 3
			D 1
			R 4
			D 1
			L 5
			R 2
		" },
		indoc! { "
			R 5
			U 8
			L 8
			D 3
			R 17
			D 10
			L 25
			U 20
		" },
	];

	fn assert_connected<const N: usize>(rope: &Rope<N>) {
		for i in 1..N {
			assert!(chebyshev_dist(rope.0[i - 1], rope.0[i]) <= 1, "segment {i} detached: {:?}", rope.0);
		}
	}

	#[test]
	fn following() {
		let mut seg = (0, 0);
		assert!(!follow((1, 1), &mut seg));
		assert_eq!(seg, (0, 0));
		assert!(follow((2, 0), &mut seg));
		assert_eq!(seg, (1, 0));
		assert!(follow((2, 2), &mut seg));
		assert_eq!(seg, (2, 1));

		// Diagonal catch-up is clamped to a single step per axis
		let mut seg = (0, 0);
		assert!(follow((2, 2), &mut seg));
		assert_eq!(seg, (1, 1));
		let mut seg = (0, 0);
		assert!(follow((-2, 1), &mut seg));
		assert_eq!(seg, (-1, 1));
	}

	#[test]
	fn stays_connected() {
		for input in INPUTS {
			let moves = input_moves_from_str(input).unwrap();
			let mut short = Rope::<2>::default();
			let mut long = Rope::<10>::default();
			for dir in steps(&moves) {
				short.step(dir);
				long.step(dir);
				assert_connected(&short);
				assert_connected(&long);
			}
		}

		// Some arbitrary but reproducible wandering
		let mut seed = 0x2545_f491_u32;
		let moves = (0..500).map(|_| {
			seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
			let dir = [Dir::Up, Dir::Down, Dir::Left, Dir::Right][(seed >> 16) as usize % 4];
			Move(dir, (seed >> 8) as usize % 12)
		}).collect::<Vec<_>>();
		let mut rope = Rope::<10>::default();
		let mut num_visited = 1;
		let mut visited = HashSet::from([rope.tail()]);
		for dir in steps(&moves) {
			rope.step(dir);
			assert_connected(&rope);
			visited.insert(rope.tail());
			assert!(visited.len() >= num_visited);
			num_visited = visited.len();
		}
		assert_eq!(num_tail_positions::<10>(&moves), num_visited);
	}

	#[test]
	fn head_only() {
		let mut rope = Rope::<1>::default();
		rope.step(Dir::Right);
		rope.step(Dir::Up);
		assert_eq!(rope.tail(), (1, 1));
		assert_eq!(rope.to_string(), ".H\ns.");
	}

	#[test]
	fn display() {
		let mut rope = Rope::<2>::default();
		rope.step(Dir::Right);
		rope.step(Dir::Right);
		assert_eq!(rope.to_string(), "sTH");
		let mut rope = Rope::<10>::default();
		for _ in 0..4 { rope.step(Dir::Right) }
		assert_eq!(rope.to_string(), "4321H");
		rope.step(Dir::Up);
		assert_eq!(rope.to_string(), "....H\n4321.");
	}

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 13);
		assert_eq!(part2(INPUTS[0]).unwrap(), 1);
		assert_eq!(part2(INPUTS[1]).unwrap(), 36);
		assert_eq!(part1("").unwrap(), 1);
		assert!(part1("R 4\nU four\n").is_err());
		assert!(part2("R 4\nQ 4\n").is_err());
	}
}

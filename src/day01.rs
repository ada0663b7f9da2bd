// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Elf(Vec<u64>);

impl Elf {
	fn total_calories(&self) -> u64 {
		self.0.iter().sum()
	}
}


fn input_elves_from_str(s: &str) -> Result<Vec<Elf>, parsing::ElvesError> {
	parsing::try_elves_from_str(s)
}


fn part1_impl(input_elves: Vec<Elf>) -> u64 {
	input_elves.iter()
		.map(Elf::total_calories)
		.max()
		.unwrap_or(0)
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::ElvesError> {
	Ok(part1_impl(input_elves_from_str(input)?))
}


fn part2_impl(input_elves: Vec<Elf>) -> u64 {
	use {std::cmp::Reverse, itertools::Itertools as _};
	input_elves.iter()
		.map(|elf| Reverse(elf.total_calories()))
		.k_smallest(3)
		.map(|Reverse(calories)| calories)
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::ElvesError> {
	Ok(part2_impl(input_elves_from_str(input)?))
}


mod parsing {
	use std::{mem, num::ParseIntError};
	use super::Elf;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct ElvesError {
		line: usize,
		source: ParseIntError,
	}

	/// Elves are separated by a single blank line; an elf without any items ends the input.
	pub(super) fn try_elves_from_str(s: &str) -> Result<Vec<Elf>, ElvesError> {
		let mut elves = vec![];
		let mut items = vec![];
		for (l, line) in s.lines().enumerate() {
			if line.is_empty() {
				if items.is_empty() { break }
				elves.push(Elf(mem::take(&mut items)));
				continue
			}
			items.push(line.parse().map_err(|e| ElvesError { line: l + 1, source: e })?);
		}
		if !items.is_empty() { elves.push(Elf(items)) }
		Ok(elves)
	}

	#[test]
	fn tests() {
		let elves = try_elves_from_str(super::tests::INPUT).unwrap();
		assert_eq!(elves.len(), 5);
		assert_eq!(elves[0], Elf(vec![1000, 2000, 3000]));
		assert_eq!(elves[4], Elf(vec![10000]));
		assert_eq!(try_elves_from_str("1\n2\n\n\n3\n").unwrap(), [Elf(vec![1, 2])]);
		assert!(matches!(try_elves_from_str("1\n\n2x\n"), Err(ElvesError { line: 3, .. })));
		assert!(matches!(try_elves_from_str("-4"), Err(ElvesError { line: 1, .. })));
	}
}

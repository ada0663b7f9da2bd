// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


type Sections = RangeInclusive<u32>;

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Pair(Sections, Sections);

impl Pair {
	fn fully_contains(outer: &Sections, inner: &Sections) -> bool {
		outer.start() <= inner.start() && inner.end() <= outer.end()
	}

	fn is_redundant(&self) -> bool {
		Self::fully_contains(&self.0, &self.1) || Self::fully_contains(&self.1, &self.0)
	}

	fn overlaps(&self) -> bool {
		self.0.start() <= self.1.end() && self.1.start() <= self.0.end()
	}
}


fn input_pairs_from_str(s: &str) -> Result<Vec<Pair>, parsing::PairsError> {
	parsing::try_pairs_from_str(s)
}


fn part1_impl(input_pairs: Vec<Pair>) -> usize {
	input_pairs.iter().filter(|pair| pair.is_redundant()).count()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::PairsError> {
	Ok(part1_impl(input_pairs_from_str(input)?))
}


fn part2_impl(input_pairs: Vec<Pair>) -> usize {
	input_pairs.iter().filter(|pair| pair.overlaps()).count()
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::PairsError> {
	Ok(part2_impl(input_pairs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Pair, Sections};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum SectionsError {
		Format,
		Start(ParseIntError),
		End(ParseIntError),
		Reversed { start: u32, end: u32 },
	}

	fn try_sections_from_str(s: &str) -> Result<Sections, SectionsError> {
		let (start, end) = s.split_once('-').ok_or(SectionsError::Format)?;
		let start = start.parse().map_err(SectionsError::Start)?;
		let end = end.parse().map_err(SectionsError::End)?;
		if start > end { return Err(SectionsError::Reversed { start, end }) }
		Ok(start..=end)
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum PairError {
		Format,
		First(SectionsError),
		Second(SectionsError),
	}

	impl FromStr for Pair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (first, second) = s.split_once(',').ok_or(PairError::Format)?;
			Ok(Pair(
				try_sections_from_str(first).map_err(PairError::First)?,
				try_sections_from_str(second).map_err(PairError::Second)?))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct PairsError {
		line: usize,
		source: PairError,
	}

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<Pair>, PairsError> {
		s.lines()
			.take_while(|line| !line.is_empty())
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| PairsError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!(try_pairs_from_str("2-4,6-8\n6-6,4-6").unwrap(), [Pair(2..=4, 6..=8), Pair(6..=6, 4..=6)]);
		assert!(matches!(try_pairs_from_str("2-4,6-8\n2-4"),
			Err(PairsError { line: 2, source: PairError::Format })));
		assert!(matches!(try_pairs_from_str("2-4,6-"),
			Err(PairsError { line: 1, source: PairError::Second(SectionsError::End(_)) })));
		assert!(matches!(try_pairs_from_str("x-4,6-8"),
			Err(PairsError { line: 1, source: PairError::First(SectionsError::Start(_)) })));
		assert!(matches!(try_pairs_from_str("1-1,8-6"),
			Err(PairsError { line: 1, source: PairError::Second(SectionsError::Reversed { start: 8, end: 6 }) })));
		assert!(matches!(try_pairs_from_str("1 4,6-8"),
			Err(PairsError { line: 1, source: PairError::First(SectionsError::Format) })));
	}
}

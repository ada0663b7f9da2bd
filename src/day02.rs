// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Shape { Rock, Paper, Scissors }

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Outcome { Loss, Draw, Win }

impl Shape {
	fn beats(self) -> Shape {
		use Shape::*;
		match self { Rock => Scissors, Paper => Rock, Scissors => Paper }
	}

	fn beaten_by(self) -> Shape {
		use Shape::*;
		match self { Rock => Paper, Paper => Scissors, Scissors => Rock }
	}

	fn score(self) -> u64 {
		match self { Shape::Rock => 1, Shape::Paper => 2, Shape::Scissors => 3 }
	}

	fn against(self, opponent: Shape) -> Outcome {
		if self == opponent { Outcome::Draw }
		else if self.beats() == opponent { Outcome::Win }
		else { Outcome::Loss }
	}

	fn for_outcome(opponent: Shape, outcome: Outcome) -> Shape {
		match outcome {
			Outcome::Loss => opponent.beats(),
			Outcome::Draw => opponent,
			Outcome::Win => opponent.beaten_by(),
		}
	}
}

impl Outcome {
	fn score(self) -> u64 {
		match self { Outcome::Loss => 0, Outcome::Draw => 3, Outcome::Win => 6 }
	}
}

/// The second column of the strategy guide, whose meaning differs between parts.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Column { X, Y, Z }

impl Column {
	fn as_shape(self) -> Shape {
		match self { Column::X => Shape::Rock, Column::Y => Shape::Paper, Column::Z => Shape::Scissors }
	}

	fn as_outcome(self) -> Outcome {
		match self { Column::X => Outcome::Loss, Column::Y => Outcome::Draw, Column::Z => Outcome::Win }
	}
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Round(Shape, Column);

fn round_score(own: Shape, opponent: Shape) -> u64 {
	own.score() + own.against(opponent).score()
}


fn input_rounds_from_str(s: &str) -> Result<Vec<Round>, parsing::RoundsError> {
	parsing::try_rounds_from_str(s)
}


fn part1_impl(input_rounds: Vec<Round>) -> u64 {
	input_rounds.iter()
		.map(|&Round(opponent, column)| round_score(column.as_shape(), opponent))
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::RoundsError> {
	Ok(part1_impl(input_rounds_from_str(input)?))
}


fn part2_impl(input_rounds: Vec<Round>) -> u64 {
	input_rounds.iter()
		.map(|&Round(opponent, column)|
			round_score(Shape::for_outcome(opponent, column.as_outcome()), opponent))
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::RoundsError> {
	Ok(part2_impl(input_rounds_from_str(input)?))
}


mod parsing {
	use std::str::FromStr;
	use super::{Column, Round, Shape};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum RoundError {
		Format,
		Opponent(String),
		Column(String),
	}

	impl FromStr for Round {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (opponent, column) = s.split_once(' ').ok_or(RoundError::Format)?;
			let opponent = match opponent {
				"A" => Shape::Rock,
				"B" => Shape::Paper,
				"C" => Shape::Scissors,
				invalid => return Err(RoundError::Opponent(invalid.to_owned())),
			};
			let column = match column {
				"X" => Column::X,
				"Y" => Column::Y,
				"Z" => Column::Z,
				invalid => return Err(RoundError::Column(invalid.to_owned())),
			};
			Ok(Round(opponent, column))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct RoundsError {
		line: usize,
		source: RoundError,
	}

	pub(super) fn try_rounds_from_str(s: &str) -> Result<Vec<Round>, RoundsError> {
		s.lines()
			.take_while(|line| !line.is_empty())
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		use {Shape::*, Column::*};
		assert_eq!(try_rounds_from_str(super::tests::INPUT).unwrap(),
			[Round(Rock, Y), Round(Paper, X), Round(Scissors, Z)]);
		assert!(matches!(try_rounds_from_str("A Y\na y"),
			Err(RoundsError { line: 2, source: RoundError::Opponent(_) })));
		assert!(matches!(try_rounds_from_str("A c"),
			Err(RoundsError { line: 1, source: RoundError::Column(_) })));
		assert!(matches!(try_rounds_from_str("AX"),
			Err(RoundsError { line: 1, source: RoundError::Format })));
	}
}

// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const GROUP_SIZE: usize = 3;


/// Bit `p` is set for every item type with priority `p`.
#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Items(u64);

impl Items {
	const ALL: Items = Items(u64::MAX);

	fn priority(item: u8) -> Option<u32> {
		match item {
			b'a'..=b'z' => Some((item - b'a') as u32 + 1),
			b'A'..=b'Z' => Some((item - b'A') as u32 + 27),
			_ => None,
		}
	}

	fn intersection(self, other: Items) -> Items {
		Items(self.0 & other.0)
	}

	/// The priority of the only item type present, if exactly one is.
	fn single(self) -> Result<u32, u32> {
		match self.0.count_ones() {
			1 => Ok(self.0.trailing_zeros()),
			n => Err(n),
		}
	}
}

impl FromIterator<u32> for Items {
	fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
		Items(iter.into_iter().fold(0, |bits, p| bits | 1 << p))
	}
}

/// Only ever contains valid item types (see `parsing`).
#[cfg_attr(test, derive(Debug))]
struct Rucksack<'s>(&'s [u8]);

impl Rucksack<'_> {
	fn items_in(bytes: &[u8]) -> Items {
		bytes.iter().filter_map(|&b| Items::priority(b)).collect()
	}

	fn items(&self) -> Items {
		Self::items_in(self.0)
	}

	fn compartments(&self) -> (Items, Items) {
		let (l, r) = self.0.split_at(self.0.len() / 2);
		(Self::items_in(l), Self::items_in(r))
	}
}


#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum Error {
	Input(parsing::RucksacksError),
	NumShared { line: usize, found: u32 },
	IncompleteGroup { line: usize },
}

impl From<parsing::RucksacksError> for Error {
	fn from(e: parsing::RucksacksError) -> Self {
		Error::Input(e)
	}
}


fn input_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack<'_>>, parsing::RucksacksError> {
	parsing::try_rucksacks_from_str(s)
}


fn part1_impl(input_rucksacks: Vec<Rucksack<'_>>) -> Result<u64, Error> {
	input_rucksacks.iter()
		.enumerate()
		.map(|(l, rucksack)| {
			let (l_items, r_items) = rucksack.compartments();
			l_items.intersection(r_items).single()
				.map(u64::from)
				.map_err(|n| Error::NumShared { line: l + 1, found: n })
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl(input_rucksacks_from_str(input)?)
}


fn part2_impl(input_rucksacks: Vec<Rucksack<'_>>) -> Result<u64, Error> {
	input_rucksacks.chunks(GROUP_SIZE)
		.enumerate()
		.map(|(g, group)| {
			let line = g * GROUP_SIZE + 1;
			if group.len() < GROUP_SIZE { return Err(Error::IncompleteGroup { line }) }
			group.iter()
				.fold(Items::ALL, |items, rucksack| items.intersection(rucksack.items()))
				.single()
				.map(u64::from)
				.map_err(|n| Error::NumShared { line, found: n })
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part2_impl(input_rucksacks_from_str(input)?)
}


mod parsing {
	use super::{Items, Rucksack};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum RucksackError {
		OddLength(usize),
		Item { column: usize, found: char },
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			if let Some((c, found)) = s.char_indices()
					.find(|&(_, chr)| !chr.is_ascii() || Items::priority(chr as u8).is_none()) {
				return Err(RucksackError::Item { column: c + 1, found })
			}
			if s.len() % 2 != 0 { return Err(RucksackError::OddLength(s.len())) }
			Ok(Rucksack(s.as_bytes()))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct RucksacksError {
		line: usize,
		source: RucksackError,
	}

	pub(super) fn try_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack<'_>>, RucksacksError> {
		s.lines()
			.take_while(|line| !line.is_empty())
			.enumerate()
			.map(|(l, line)| line.try_into()
				.map_err(|e| RucksacksError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!(try_rucksacks_from_str(super::tests::INPUT).unwrap().len(), 6);
		assert!(matches!(try_rucksacks_from_str("abca\nab1b"),
			Err(RucksacksError { line: 2, source: RucksackError::Item { column: 3, found: '1' } })));
		assert!(matches!(try_rucksacks_from_str("abc"),
			Err(RucksacksError { line: 1, source: RucksackError::OddLength(3) })));
		assert!(matches!(try_rucksacks_from_str("aé"),
			Err(RucksacksError { line: 1, source: RucksackError::Item { column: 2, found: 'é' } })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;

	pub(super) const INPUT: &str = indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };

	#[test]
	fn items() {
		assert_eq!(Items::priority(b'p'), Some(16));
		assert_eq!(Items::priority(b'L'), Some(38));
		assert_eq!(Items::priority(b'z'), Some(26));
		assert_eq!(Items::priority(b'A'), Some(27));
		assert_eq!(Items::priority(b'-'), None);
		let (l, r) = Rucksack(b"vJrwpWtwJgWrhcsFMMfFFhFp").compartments();
		assert_eq!(l.intersection(r).single(), Ok(16));
		assert_eq!([1, 2].into_iter().collect::<Items>().single(), Err(2));
		assert_eq!(Items(0).single(), Err(0));
	}

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 157);
		assert_eq!(part2(INPUT).unwrap(), 70);
		assert!(matches!(part1("abcd\n"), Err(Error::NumShared { line: 1, found: 0 })));
		assert!(matches!(part1("abab\n"), Err(Error::NumShared { line: 1, found: 2 })));
		assert!(matches!(part2(&INPUT[..INPUT.len() - 25]), Err(Error::IncompleteGroup { line: 4 })));
	}
}

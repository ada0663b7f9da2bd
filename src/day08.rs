// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const DIRS: [[isize; 2]; 4] = [[0, -1], [1, 0], [0, 1], [-1, 0]];


#[cfg_attr(test, derive(Debug))]
struct Forest {
	heights: Vec<u8>,
	width: usize,
}

impl Forest {
	fn height(&self) -> usize {
		self.heights.len() / self.width
	}

	fn at(&self, [x, y]: [usize; 2]) -> u8 {
		self.heights[y * self.width + x]
	}

	fn positions(&self) -> impl Iterator<Item = [usize; 2]> {
		itertools::iproduct!(0..self.height(), 0..self.width).map(|(y, x)| [x, y])
	}

	/// Heights of the trees from `pos` toward the edge, nearest first.
	fn line_of_sight(&self, pos: [usize; 2], [dx, dy]: [isize; 2]) -> impl Iterator<Item = u8> + '_ {
		let (width, height) = (self.width, self.height());
		std::iter::successors(Some(pos), move |&[x, y]| {
			let x = x.checked_add_signed(dx).filter(|&x| x < width)?;
			let y = y.checked_add_signed(dy).filter(|&y| y < height)?;
			Some([x, y])
		})
			.skip(1)
			.map(|pos| self.at(pos))
	}

	fn is_visible(&self, pos: [usize; 2]) -> bool {
		let own = self.at(pos);
		DIRS.into_iter().any(|dir| self.line_of_sight(pos, dir).all(|h| h < own))
	}

	fn scenic_score(&self, pos: [usize; 2]) -> usize {
		let own = self.at(pos);
		DIRS.into_iter()
			.map(|dir| {
				let mut viewing_dist = 0;
				for h in self.line_of_sight(pos, dir) {
					viewing_dist += 1;
					if h >= own { break }
				}
				viewing_dist
			})
			.product()
	}
}


fn input_forest_from_str(s: &str) -> Result<Forest, parsing::ForestError> {
	s.parse()
}


fn part1_impl(input_forest: Forest) -> usize {
	input_forest.positions()
		.filter(|&pos| input_forest.is_visible(pos))
		.count()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::ForestError> {
	Ok(part1_impl(input_forest_from_str(input)?))
}


fn part2_impl(input_forest: Forest) -> usize {
	input_forest.positions()
		.map(|pos| input_forest.scenic_score(pos))
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::ForestError> {
	Ok(part2_impl(input_forest_from_str(input)?))
}


mod parsing {
	use std::str::FromStr;
	use super::Forest;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum ForestError {
		Empty,
		Ragged { line: usize, width: usize },
		Height { line: usize, column: usize, found: char },
	}

	impl FromStr for Forest {
		type Err = ForestError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lines = s.lines().take_while(|line| !line.is_empty()).peekable();
			let width = lines.peek().ok_or(ForestError::Empty)?.len();
			let mut heights = Vec::with_capacity(width * width);
			for (l, line) in lines.enumerate() {
				if let Some((c, found)) = line.char_indices().find(|(_, chr)| !chr.is_ascii_digit()) {
					return Err(ForestError::Height { line: l + 1, column: c + 1, found })
				}
				if line.len() != width {
					return Err(ForestError::Ragged { line: l + 1, width: line.len() })
				}
				heights.extend(line.bytes().map(|b| b - b'0'));
			}
			Ok(Forest { heights, width })
		}
	}

	#[test]
	fn tests() {
		let forest = super::tests::INPUT.parse::<Forest>().unwrap();
		assert_eq!((forest.width, forest.height()), (5, 5));
		assert_eq!(forest.at([3, 0]), 7);
		assert_eq!(forest.at([0, 4]), 3);
		assert!(matches!("".parse::<Forest>(), Err(ForestError::Empty)));
		assert!(matches!("123\n12\n".parse::<Forest>(), Err(ForestError::Ragged { line: 2, width: 2 })));
		assert!(matches!("123\n1x3\n".parse::<Forest>(),
			Err(ForestError::Height { line: 2, column: 2, found: 'x' })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;

	pub(super) const INPUT: &str = indoc! { "
		30373
		25512
		65332
		33549
		35390
	" };

	#[test]
	fn sight() {
		let forest = input_forest_from_str(INPUT).unwrap();
		assert_eq!(forest.line_of_sight([2, 3], [0, -1]).collect::<Vec<_>>(), [3, 5, 3]);
		assert_eq!(forest.line_of_sight([2, 3], [-1, 0]).collect::<Vec<_>>(), [3, 3]);
		assert_eq!(forest.line_of_sight([4, 3], [1, 0]).count(), 0);
		assert!(forest.is_visible([1, 1]));
		assert!(!forest.is_visible([3, 1]));
		assert!(forest.is_visible([0, 2]));
		assert_eq!(forest.scenic_score([2, 1]), 4);
		assert_eq!(forest.scenic_score([2, 3]), 8);
		assert_eq!(forest.scenic_score([0, 0]), 0);
	}

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 21);
		assert_eq!(part2(INPUT).unwrap(), 8);
		assert_eq!(part1("5").unwrap(), 1);
		assert_eq!(part2("5").unwrap(), 0);
	}
}

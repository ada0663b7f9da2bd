// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::Debug, num::ParseIntError};


#[allow(dead_code)]
#[derive(Debug)]
enum ArgsError {
	Usage,
	Day(ParseIntError),
	Part(ParseIntError),
	Unsolved { day: u8, part: u8 },
}

fn boxed(e: impl Debug + 'static) -> Box<dyn Debug> {
	Box::new(e)
}

macro_rules! days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	fn solve(day: u8, part: u8, input: &str) -> Result<String, Box<dyn Debug>> {
		match (day, part) {
			$(
				($day, 1) => [<day $day>]::part1(input).map(|a| a.to_string()).map_err(boxed),
				($day, 2) => [<day $day>]::part2(input).map(|a| a.to_string()).map_err(boxed),
			)+
			_ => Err(boxed(ArgsError::Unsolved { day, part })),
		}
	}
} } }

days!(01, 02, 03, 04, 05, 07, 08, 09, 10);


fn main() -> Result<(), Box<dyn Debug>> {
	let args = std::env::args().skip(1).collect::<Vec<_>>();
	let [day, part] = &args[..] else { return Err(boxed(ArgsError::Usage)) };
	let day = day.parse().map_err(|e| boxed(ArgsError::Day(e)))?;
	let part = part.parse().map_err(|e| boxed(ArgsError::Part(e)))?;
	let input = std::io::read_to_string(std::io::stdin()).map_err(boxed)?;
	println!("{}", solve(day, part, &input)?);
	Ok(())
}


#[test]
fn tests() {
	assert_eq!(solve(9, 1, "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n").unwrap(), "13");
	assert_eq!(solve(10, 1, "noop\naddx 3\naddx -5\n").unwrap(), "0");
	assert_eq!(solve(5, 2, "[A]\n 1 \n").unwrap(), "A");
	assert!(solve(6, 1, "").is_err());
	assert!(solve(9, 3, "").is_err());
	assert!(solve(9, 1, "X 1").is_err());
}
